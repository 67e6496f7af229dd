//! Times every [`Algorithm`] against random and reversed input and verifies each result.
//!
//! A run is driven entirely by a [`BenchConfig`]. Measurements are written to the caller's
//! writer as they are taken, one elapsed-microseconds value per sort call; sortedness
//! violations and allocation failures are logged and the run carries on.
//!
//! # Example
//!
//! ```
//! use sortlab_core::sorting::benchmark::{self, BenchConfig, Mode};
//!
//! let config = BenchConfig {
//!     size: 1000,
//!     mode: Mode::Simple,
//!     seed: Some(1),
//!     ..BenchConfig::default()
//! };
//!
//! let mut out = Vec::new();
//! let rows = benchmark::run(&config, &mut out).unwrap();
//! assert!(rows.iter().all(|row| row.failures() == 0));
//! ```

mod patterns;
mod timing;

pub use patterns::Pattern;
pub use timing::{
    dump, find_violation, time_random, time_reversed, time_sort, Measurement, DUMP_LEN,
};

use std::io::{self, Write};

use anyhow::Context;
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{rngs::StdRng, SeedableRng};

use super::Algorithm;

pub const DEFAULT_SIZE: usize = 100_000;
pub const DEFAULT_REPEAT: usize = 100;

/// Selects which algorithms run over which input sizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One pass over `size` elements, quadratic algorithms skipped.
    #[value(alias = "s")]
    Simple,
    /// One pass over 100, 1000, ... elements below `size`, every algorithm.
    #[value(alias = "p")]
    Performance,
    /// One pass over `size` elements, every algorithm including the quadratic ones.
    #[value(alias = "b")]
    Brute,
    /// `repeat` passes over `10 * size` elements, quadratic algorithms skipped.
    #[value(alias = "a")]
    Standard,
}

/// One input size of a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stage {
    pub size: usize,
    pub repeat: usize,
    pub include_slow: bool,
}

impl Mode {
    pub fn stages(&self, size: usize, repeat: usize) -> Vec<Stage> {
        match self {
            Mode::Simple => vec![Stage {
                size,
                repeat: 1,
                include_slow: false,
            }],
            Mode::Performance => std::iter::successors(Some(100usize), |z| z.checked_mul(10))
                .take_while(|&z| z < size)
                .map(|size| Stage {
                    size,
                    repeat: 1,
                    include_slow: true,
                })
                .collect(),
            Mode::Brute => vec![Stage {
                size,
                repeat: 1,
                include_slow: true,
            }],
            Mode::Standard => vec![Stage {
                size: size.saturating_mul(10),
                repeat,
                include_slow: false,
            }],
        }
    }
}

/// Everything a benchmark run depends on.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Prefixed to every line of output.
    pub label: String,
    pub size: usize,
    /// Repetitions per pattern. Only [`Mode::Standard`] repeats.
    pub repeat: usize,
    pub mode: Mode,
    /// Seeds the input generator. A fresh seed is drawn from the OS when absent.
    pub seed: Option<u64>,
    /// Restricts the run to these algorithms. Empty means all of them.
    pub only: Vec<Algorithm>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            label: String::from("sortlab"),
            size: DEFAULT_SIZE,
            repeat: DEFAULT_REPEAT,
            mode: Mode::Standard,
            seed: None,
            only: Vec::new(),
        }
    }
}

impl BenchConfig {
    pub fn algorithms(&self) -> Vec<Algorithm> {
        if self.only.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            Algorithm::ALL
                .into_iter()
                .filter(|a| self.only.contains(a))
                .collect()
        }
    }
}

/// The measurements of one algorithm at one input size. A pattern that was skipped has no
/// measurements.
#[derive(Clone, Debug)]
pub struct BenchRow {
    pub algorithm: Algorithm,
    pub size: usize,
    pub random: Vec<Measurement>,
    pub reversed: Vec<Measurement>,
}

/// Min and mean of the measurements of one pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub min_micros: u128,
    pub mean_micros: u128,
    pub failures: usize,
}

impl BenchRow {
    fn new(algorithm: Algorithm, size: usize) -> Self {
        Self {
            algorithm,
            size,
            random: Vec::new(),
            reversed: Vec::new(),
        }
    }

    pub fn measurements(&self, pattern: Pattern) -> &[Measurement] {
        match pattern {
            Pattern::Random => &self.random,
            Pattern::Reversed => &self.reversed,
        }
    }

    pub fn summary(&self, pattern: Pattern) -> Option<Summary> {
        let measurements = self.measurements(pattern);
        let min_micros = measurements.iter().map(Measurement::micros).min()?;
        let total: u128 = measurements.iter().map(Measurement::micros).sum();

        Some(Summary {
            min_micros,
            mean_micros: total / measurements.len() as u128,
            failures: measurements.iter().filter(|m| !m.is_sorted()).count(),
        })
    }

    pub fn failures(&self) -> usize {
        self.random
            .iter()
            .chain(&self.reversed)
            .filter(|m| !m.is_sorted())
            .count()
    }
}

/// Runs every stage of `config.mode`, writing progress and measurements to `out`.
///
/// A stage whose working array cannot be allocated is logged and skipped. Only a failure to
/// write to `out` ends the run early.
pub fn run<W: Write>(config: &BenchConfig, out: W) -> anyhow::Result<Vec<BenchRow>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stages = config.mode.stages(config.size, config.repeat);
    let algorithms = config.algorithms();

    let progress = ProgressBar::new((stages.len() * algorithms.len()) as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "Benchmark -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] ({pos}/{len}) {msg}",
        )
        .context("Invalid progress bar template")?,
    );
    let mut out = Suspended {
        progress: &progress,
        inner: out,
    };

    self_check(config.size, &mut rng, &mut out)?;

    let mut rows = Vec::new();
    for stage in stages {
        log::info!(
            "Stage: {} elements, {} repetitions",
            stage.size,
            stage.repeat
        );

        let mut values = match allocate(stage.size) {
            Ok(values) => values,
            Err(e) => {
                log::error!("{e:#}");
                progress.inc(algorithms.len() as u64);
                continue;
            }
        };

        match config.mode {
            Mode::Standard => {
                writeln!(out, "Testing large arrays {} times each", stage.repeat)?
            }
            Mode::Performance => writeln!(out, "Sorting {} things", stage.size)?,
            Mode::Simple | Mode::Brute => writeln!(out, "Tests on {} elements", stage.size)?,
        }

        for &algorithm in &algorithms {
            progress.set_message(algorithm.name());
            let row = run_algorithm(config, stage, algorithm, &mut values, &mut rng, &mut out)?;
            rows.push(row);
            progress.inc(1);
        }
    }

    progress.finish_and_clear();
    Ok(rows)
}

fn run_algorithm<W: Write>(
    config: &BenchConfig,
    stage: Stage,
    algorithm: Algorithm,
    values: &mut [f64],
    rng: &mut StdRng,
    out: &mut W,
) -> io::Result<BenchRow> {
    let mut row = BenchRow::new(algorithm, stage.size);
    let skip = |pattern: Pattern| !stage.include_slow && algorithm.is_slow_on(pattern);

    if skip(Pattern::Random) && skip(Pattern::Reversed) {
        log::debug!("Skipping {} on {} elements", algorithm.name(), stage.size);
        return Ok(row);
    }

    write!(out, "{} {} (micros) Random: ", config.label, algorithm.name())?;
    out.flush()?;
    if skip(Pattern::Random) {
        write!(out, " skipped ")?;
    } else {
        row.random = time_random(values, &algorithm, stage.repeat, rng, out)?;
    }

    write!(out, "Reversed ")?;
    out.flush()?;
    if skip(Pattern::Reversed) {
        writeln!(out, "skipped")?;
    } else {
        row.reversed = time_reversed(values, &algorithm, stage.repeat, rng, out)?;
    }

    Ok(row)
}

// Proves the verifier notices disorder before anything is timed with it.
fn self_check<W: Write>(size: usize, rng: &mut StdRng, out: &mut W) -> anyhow::Result<()> {
    let mut values = allocate(size)?;
    Pattern::Random.fill(&mut values, rng);
    writeln!(
        out,
        "Test the test: Random array first out of order in position {}",
        find_violation(&values).unwrap_or(0)
    )?;
    Ok(())
}

fn allocate(len: usize) -> anyhow::Result<Vec<f64>> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(len)
        .with_context(|| format!("Can't allocate an array of {len} elements for tests"))?;
    values.resize(len, 0.0);
    Ok(values)
}

// Hides the progress bar while measurements are written, so the two never interleave.
struct Suspended<'a, W> {
    progress: &'a ProgressBar,
    inner: W,
}

impl<W: Write> Write for Suspended<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let inner = &mut self.inner;
        self.progress.suspend(|| inner.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        let inner = &mut self.inner;
        self.progress.suspend(|| inner.flush())
    }
}
