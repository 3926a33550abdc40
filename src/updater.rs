//! The read-increment-persist-emit sequence.

use crate::counter::{read_counter, write_counter, BuildNumber, Previous};
use crate::header::{write_header, HeaderConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// Outcome of one update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub previous: Previous,
    pub current: BuildNumber,
}

/// Advance the counter at `counter_path` and regenerate the header at `header_path`.
///
/// The counter file is written first, then the header. Neither file is touched
/// if the stored value cannot be incremented.
pub fn update(counter_path: &Path, header_path: &Path, header: &HeaderConfig) -> Result<Update> {
    let previous = read_counter(counter_path)?;
    let current = previous
        .value()
        .next()
        .with_context(|| format!("{}: build counter overflow", counter_path.display()))?;

    write_counter(counter_path, current)?;
    write_header(header_path, current, header)?;

    Ok(Update { previous, current })
}
