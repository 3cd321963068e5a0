//! Puzzle CLI Binary
//!
//! Runs one puzzle solver per invocation.

use clap::Parser;
use puzzlekit::cli::Kata;

fn main() -> anyhow::Result<()> {
    let kata = Kata::parse();
    puzzlekit::log(kata.verbose);
    kata.run()
}
