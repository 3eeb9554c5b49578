pub mod check;
pub mod generate;
pub mod header;

use std::io::Write;
use std::path::Path;

/// Write `text` to `out`, or stdout when no path is given.
pub(crate) fn emit(text: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, text)?;
            tracing::info!("wrote {}", path.display());
        }
        None => std::io::stdout().write_all(text.as_bytes())?,
    }
    Ok(())
}
