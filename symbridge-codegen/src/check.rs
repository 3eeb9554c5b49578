//! Descriptor table checks.
//!
//! Compares the signatures an interface declares with the descriptor table a
//! binding crate actually compiled. Symbols the interface does not declare are
//! ignored, so one table can be checked against several interface files.

use std::fmt;

use symbridge_shared::{BridgeError, BridgeResult};

use crate::interface::DescriptorRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    Missing {
        symbol: String,
    },
    Receiver {
        symbol: String,
        declared: String,
        compiled: String,
    },
    Params {
        symbol: String,
        declared: Vec<String>,
        compiled: Vec<String>,
    },
    Returns {
        symbol: String,
        declared: String,
        compiled: String,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Missing { symbol } => write!(f, "{}: declared but not compiled", symbol),
            Mismatch::Receiver {
                symbol,
                declared,
                compiled,
            } => write!(f, "{}: receiver {} declared, {} compiled", symbol, declared, compiled),
            Mismatch::Params {
                symbol,
                declared,
                compiled,
            } => write!(
                f,
                "{}: params ({}) declared, ({}) compiled",
                symbol,
                declared.join(", "),
                compiled.join(", ")
            ),
            Mismatch::Returns {
                symbol,
                declared,
                compiled,
            } => write!(f, "{}: returns {} declared, {} compiled", symbol, declared, compiled),
        }
    }
}

/// Parse a descriptor table dump (a JSON array of records).
pub fn parse_table(json: &str) -> BridgeResult<Vec<DescriptorRecord>> {
    serde_json::from_str(json)
        .map_err(|e| BridgeError::Descriptor(format!("invalid descriptor table: {}", e)))
}

/// Every difference between `declared` and `compiled`, in declaration order.
pub fn compare(declared: &[DescriptorRecord], compiled: &[DescriptorRecord]) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for want in declared {
        let Some(have) = compiled.iter().find(|d| d.symbol == want.symbol) else {
            mismatches.push(Mismatch::Missing {
                symbol: want.symbol.clone(),
            });
            continue;
        };
        if want.receiver != have.receiver {
            mismatches.push(Mismatch::Receiver {
                symbol: want.symbol.clone(),
                declared: want.receiver.clone(),
                compiled: have.receiver.clone(),
            });
        }
        if want.params != have.params {
            mismatches.push(Mismatch::Params {
                symbol: want.symbol.clone(),
                declared: want.params.clone(),
                compiled: have.params.clone(),
            });
        }
        if want.returns != have.returns {
            mismatches.push(Mismatch::Returns {
                symbol: want.symbol.clone(),
                declared: want.returns.clone(),
                compiled: have.returns.clone(),
            });
        }
    }
    mismatches
}
