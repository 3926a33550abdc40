#![allow(dead_code)]

use buildnum::header::CONSTANT_NAME;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory with the conventional counter and header paths.
pub struct Fixture {
    pub dir: TempDir,
    pub counter: PathBuf,
    pub header: PathBuf,
}

/// Empty fixture: neither file exists yet.
pub fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let counter = dir.path().join("BUILD_NUMBER");
    let header = dir.path().join("build_number.h");
    Fixture {
        dir,
        counter,
        header,
    }
}

/// Fixture whose counter file already holds `contents` verbatim.
pub fn fixture_with_counter(contents: &[u8]) -> Fixture {
    let fx = fixture();
    fs::write(&fx.counter, contents).unwrap();
    fx
}

pub fn read_counter_text(fx: &Fixture) -> String {
    fs::read_to_string(&fx.counter).unwrap()
}

pub fn read_header_text(fx: &Fixture) -> String {
    fs::read_to_string(&fx.header).unwrap()
}

/// Extract the value of `kBuildNumber` from generated header text.
pub fn declared_value(header: &str) -> Option<u64> {
    header.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("constexpr ")?;
        let (_, rest) = rest.split_once(CONSTANT_NAME)?;
        let literal = rest.trim().strip_prefix('=')?.trim().strip_suffix(';')?;
        literal
            .trim_end_matches(|c| c == 'U' || c == 'L')
            .parse()
            .ok()
    })
}

/// Value declared by the generated header.
pub fn header_value(fx: &Fixture) -> u64 {
    declared_value(&read_header_text(fx)).expect("header declares kBuildNumber")
}
