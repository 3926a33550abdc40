//! Generated header artifact: a single `kBuildNumber` constant behind an include guard.

use crate::counter::BuildNumber;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs;
use std::path::Path;

/// Name of the emitted constant.
pub const CONSTANT_NAME: &str = "kBuildNumber";

/// Macro used by the `ifndef` guard when none is given.
pub const DEFAULT_GUARD_MACRO: &str = "BUILD_NUMBER_H";

/// Multiple-inclusion protection for the generated header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum GuardStyle {
    /// `#pragma once`
    #[default]
    PragmaOnce,
    /// `#ifndef` / `#define` / `#endif`
    Ifndef,
}

/// How the header should be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    pub guard: GuardStyle,
    /// Macro name for [`GuardStyle::Ifndef`]; ignored otherwise.
    pub guard_macro: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            guard: GuardStyle::PragmaOnce,
            guard_macro: DEFAULT_GUARD_MACRO.to_string(),
        }
    }
}

/// Whether `name` can be used as a preprocessor macro.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Smallest C++ integer type that holds `value`, with its literal suffix.
/// Every realistic build number stays `int`.
fn constant_type(value: BuildNumber) -> (&'static str, &'static str) {
    if value.get() <= i32::MAX as u64 {
        ("int", "")
    } else if value.get() <= i64::MAX as u64 {
        ("long long", "LL")
    } else {
        ("unsigned long long", "ULL")
    }
}

/// Render the complete header text for `value`.
pub fn render_header(value: BuildNumber, config: &HeaderConfig) -> String {
    let (ty, suffix) = constant_type(value);
    let declaration = format!("constexpr {ty} {CONSTANT_NAME} = {value}{suffix};\n");

    match config.guard {
        GuardStyle::PragmaOnce => format!("#pragma once\n\n{declaration}"),
        GuardStyle::Ifndef => {
            let guard = &config.guard_macro;
            format!("#ifndef {guard}\n#define {guard}\n\n{declaration}\n#endif // {guard}\n")
        }
    }
}

/// Overwrite the header at `path` with the declaration for `value`.
pub fn write_header(path: &Path, value: BuildNumber, config: &HeaderConfig) -> Result<()> {
    fs::write(path, render_header(value, config))
        .with_context(|| format!("{}: failed to write header file", path.display()))
}
