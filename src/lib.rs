#![forbid(unsafe_code)]
//! Persistent build counter that emits a C/C++ header with the current build number.

pub mod cli;
pub mod counter;
pub mod header;
pub mod updater;
