use crate::header::{is_c_identifier, GuardStyle, HeaderConfig, DEFAULT_GUARD_MACRO};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  buildnum BUILD_NUMBER include/build_number.h
  buildnum --guard ifndef --guard-macro APP_BUILD_H BUILD_NUMBER build.h
  BUILD=$(buildnum --print BUILD_NUMBER build.h)";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "buildnum",
    version,
    about = "Increment a persistent build counter and emit a header with the new build number",
    after_help = EXAMPLES
)]
pub struct Args {
    /// File holding the current build number (created if missing)
    #[arg(value_name = "COUNTER_FILE")]
    pub counter_path: PathBuf,

    /// Header to (re)generate with the new build number
    #[arg(value_name = "HEADER_FILE")]
    pub header_path: PathBuf,

    /// Include guard style for the generated header
    #[arg(long = "guard", value_enum, default_value_t = GuardStyle::PragmaOnce, env = "BUILDNUM_GUARD")]
    pub guard: GuardStyle,

    /// Macro name used by the ifndef guard
    #[arg(long = "guard-macro", default_value = DEFAULT_GUARD_MACRO)]
    pub guard_macro: String,

    /// Print the new build number on stdout
    #[arg(long = "print")]
    pub print: bool,

    /// Increase diagnostic output on stderr (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress diagnostic output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Header settings. The guard macro only has to be a C identifier when
    /// the `ifndef` guard actually uses it; a bad one is a usage error.
    pub fn header_config(&self) -> Result<HeaderConfig, clap::Error> {
        if self.guard == GuardStyle::Ifndef && !is_c_identifier(&self.guard_macro) {
            return Err(Args::command().error(
                ErrorKind::InvalidValue,
                format!(
                    "invalid value '{}' for '--guard-macro': not a valid C identifier",
                    self.guard_macro
                ),
            ));
        }
        Ok(HeaderConfig {
            guard: self.guard,
            guard_macro: self.guard_macro.clone(),
        })
    }
}
