use std::io::Write;

use tracing::debug;

use crate::encoder::{self, AsmConfig, EncodeError};

#[derive(thiserror::Error, Debug)]
pub enum AssembleError {
    #[error("line {line}: {source}")]
    Encode {
        line: usize,
        #[source]
        source: EncodeError,
    },
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Encode every non-blank input line and write the 32-character binary
/// strings to `sink`, one per line, in input order. Lines that are empty
/// after comment stripping are skipped without output. The first encoding
/// failure aborts the run, reporting the 1-based line number; a silently
/// skipped instruction would desynchronize address-dependent consumers.
pub fn assemble<'a, I, W>(lines: I, sink: &mut W, cfg: &AsmConfig) -> Result<(), AssembleError>
where
    I: IntoIterator<Item = &'a str>,
    W: Write,
{
    for (i, raw) in lines.into_iter().enumerate() {
        let line = i + 1;
        if encoder::normalize(raw).is_empty() {
            debug!(line, "skipping blank line");
            continue;
        }
        let encoded = encoder::encode(raw, cfg).map_err(|source| AssembleError::Encode {
            line,
            source,
        })?;
        writeln!(sink, "{encoded}")?;
    }
    Ok(())
}
