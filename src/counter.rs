//! Counter file handling: tolerant parsing, increment, and persistence.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// A build number as stored in the counter file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildNumber(pub u64);

impl BuildNumber {
    /// The number for the next build, or `None` if the counter is exhausted.
    pub fn next(self) -> Option<BuildNumber> {
        self.0.checked_add(1).map(BuildNumber)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BuildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the previous build number was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Previous {
    /// The counter file held a valid number.
    Stored(BuildNumber),
    /// The counter file did not exist.
    Missing,
    /// The counter file existed but its contents could not be parsed.
    Unparseable,
}

impl Previous {
    /// The value to increment from. Missing and unparseable files count as zero.
    pub fn value(&self) -> BuildNumber {
        match self {
            Previous::Stored(n) => *n,
            Previous::Missing | Previous::Unparseable => BuildNumber::default(),
        }
    }
}

/// Parse counter file contents. Surrounding whitespace (including `\r\n`) is ignored.
pub fn parse_counter(text: &str) -> Option<BuildNumber> {
    text.trim().parse().ok().map(BuildNumber)
}

/// Read the previous build number from `path`.
///
/// Absence and garbage are not errors. Any other read failure (permissions,
/// the path being a directory, ...) is returned to the caller.
pub fn read_counter(path: &Path) -> Result<Previous> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Previous::Missing),
        Err(e) => {
            return Err(e).with_context(|| format!("{}: failed to read counter file", path.display()))
        }
    };

    let previous = std::str::from_utf8(&bytes)
        .ok()
        .and_then(parse_counter)
        .map_or(Previous::Unparseable, Previous::Stored);
    Ok(previous)
}

/// Canonical on-disk form: decimal digits and a single trailing newline.
pub fn format_counter(value: BuildNumber) -> String {
    format!("{value}\n")
}

/// Overwrite the counter file with `value`.
pub fn write_counter(path: &Path, value: BuildNumber) -> Result<()> {
    fs::write(path, format_counter(value))
        .with_context(|| format!("{}: failed to write counter file", path.display()))
}
