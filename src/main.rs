#![forbid(unsafe_code)]
mod cli;
mod counter;
mod header;
mod updater;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use counter::Previous;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("buildnum: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    let header_config = args.header_config().unwrap_or_else(|e| e.exit());

    let update = updater::update(&args.counter_path, &args.header_path, &header_config)?;

    if args.verbose > 1 {
        eprintln!(
            "buildnum: previous build {}",
            describe_previous(&update.previous)
        );
    }
    if args.verbose > 0 {
        eprintln!(
            "buildnum: build {} (counter={}, header={})",
            update.current,
            args.counter_path.display(),
            args.header_path.display()
        );
    }
    if args.print {
        println!("{}", update.current);
    }
    Ok(())
}

fn describe_previous(previous: &Previous) -> String {
    match previous {
        Previous::Stored(n) => n.to_string(),
        Previous::Missing => "0 (counter file missing)".to_string(),
        Previous::Unparseable => "0 (counter file unparseable, reset)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::BuildNumber;

    #[test]
    fn describe_previous_mentions_recovery() {
        assert_eq!(describe_previous(&Previous::Stored(BuildNumber(41))), "41");
        assert!(describe_previous(&Previous::Missing).contains("missing"));
        assert!(describe_previous(&Previous::Unparseable).contains("unparseable"));
    }
}
