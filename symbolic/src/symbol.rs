//! Named symbols.
//!
//! Every constructed symbol is distinct, even when two share a name: identity is
//! the serial number handed out at construction.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

const GREEK_LETTERS: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi", "psi",
    "omega", "Gamma", "Delta", "Theta", "Lambda", "Xi", "Pi", "Sigma", "Upsilon", "Phi",
    "Psi", "Omega",
];

#[derive(Debug)]
struct SymbolInner {
    serial: u64,
    name: String,
    tex_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Symbol {
    inner: Arc<SymbolInner>,
}

impl Symbol {
    /// Create a fresh symbol. An empty name is replaced by `symbol<serial>`.
    pub fn new(name: &str) -> Self {
        Self::build(name, None)
    }

    /// Create a fresh symbol with an explicit TeX rendering.
    pub fn with_tex_name(name: &str, tex_name: &str) -> Self {
        Self::build(name, Some(tex_name.to_string()))
    }

    fn build(name: &str, tex_name: Option<String>) -> Self {
        let serial = NEXT_SERIAL.fetch_add(1, AtomicOrdering::Relaxed);
        let name = if name.is_empty() {
            format!("symbol{}", serial)
        } else {
            name.to_string()
        };
        Symbol {
            inner: Arc::new(SymbolInner {
                serial,
                name,
                tex_name,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The explicit TeX name, or a default derived from the plain name
    /// (Greek letter names become their TeX macro).
    pub fn tex_name(&self) -> String {
        match &self.inner.tex_name {
            Some(tex) => tex.clone(),
            None if GREEK_LETTERS.contains(&self.name()) => format!("\\{}", self.name()),
            None => self.name().to_string(),
        }
    }

    pub fn serial(&self) -> u64 {
        self.inner.serial
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.inner.serial == other.inner.serial
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.serial.hash(state);
    }
}

// Name first so printed sums come out alphabetically; serial breaks ties.
impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name()
            .cmp(other.name())
            .then(self.inner.serial.cmp(&other.inner.serial))
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
