//! # Introduction
//!
//! Classic sorting algorithms over `f64` slices, and a harness that times them against random
//! and reversed input and checks every result.
//!
//! ```
//! use sortlab_core::sorting::{Algorithm, Sorter};
//!
//! for algorithm in Algorithm::ALL {
//!     let mut slice = [2.0, 1.0, 2.0, 1.0];
//!     algorithm.sort(&mut slice);
//!     assert_eq!(slice, [1.0, 1.0, 2.0, 2.0]);
//! }
//! ```

pub mod error;
pub mod sorting;

use std::io;

use clap::{Args, ValueEnum};
use colored::Colorize;
use prettytable::{row, Table};

use sorting::benchmark::{
    self, BenchConfig, BenchRow, Mode, Pattern, DEFAULT_REPEAT, DEFAULT_SIZE,
};
use sorting::Algorithm;

/// Time and verify the sorting algorithms. Install the `sortlab` binary and run
/// `sortlab bench --help` to see what options are available
#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Which algorithms run over which input sizes.
    #[arg(value_enum, default_value_t = Mode::Standard)]
    mode: Mode,

    /// Repetitions per pattern in standard mode. 0 falls back to the default.
    #[arg(default_value_t = DEFAULT_REPEAT)]
    repeat: usize,

    /// Number of elements to sort. Standard mode sorts ten times as many.
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Seed for the random input, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Only run these algorithms.
    #[arg(long, value_enum, value_delimiter = ',')]
    only: Vec<Algorithm>,

    /// Prefix for every line of output. Defaults to the program name.
    #[arg(long)]
    label: Option<String>,
}

impl BenchArgs {
    pub fn config(self) -> BenchConfig {
        let label = self.label.unwrap_or_else(|| {
            std::env::args()
                .next()
                .unwrap_or_else(|| String::from("sortlab"))
        });

        BenchConfig {
            label,
            size: self.size,
            repeat: if self.repeat == 0 {
                DEFAULT_REPEAT
            } else {
                self.repeat
            },
            mode: self.mode,
            seed: self.seed,
            only: self.only,
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        let config = self.config();
        let rows = benchmark::run(&config, io::stdout().lock())?;

        println!();
        print_summary(&rows);

        let failures: usize = rows.iter().map(BenchRow::failures).sum();
        if failures > 0 {
            eprintln!(
                "{}",
                format!("{failures} sort calls left their input out of order")
                    .bold()
                    .red()
            );
        }
        Ok(())
    }
}

/// Prints one table per input size with the min and mean time of every algorithm.
pub fn print_summary(rows: &[BenchRow]) {
    let mut sizes = rows.iter().map(|r| r.size).collect::<Vec<_>>();
    sizes.dedup();

    for size in sizes {
        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            size.to_string().bold()
        );

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Random min/mean (µs)".bold(),
            "Reversed min/mean (µs)".bold(),
            "Failures".bold()
        ]);

        for bench_row in rows.iter().filter(|r| r.size == size) {
            let name = bench_row.algorithm.name();
            let cell = |pattern| match bench_row.summary(pattern) {
                Some(s) => format!("{} / {}", s.min_micros, s.mean_micros).normal(),
                None => "Not Doing It".red(),
            };
            let failures = match bench_row.failures() {
                0 => "0".green(),
                n => n.to_string().bold().red(),
            };

            table.add_row(row![
                name,
                cell(Pattern::Random),
                cell(Pattern::Reversed),
                failures
            ]);
        }

        table.printstd();
        println!();
    }
}

/// Prints every algorithm the harness knows about.
pub fn print_algorithms() {
    let mut table = Table::new();
    table.add_row(row!["Name".bold(), "Flag".bold(), "Quadratic".bold()]);

    for algorithm in Algorithm::ALL {
        let flag = algorithm
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        let slow = if algorithm.is_slow() {
            "yes".yellow()
        } else {
            "no".normal()
        };
        let name = algorithm.name();
        table.add_row(row![name, flag, slow]);
    }

    table.printstd();
}
