use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use rand::Rng;

use super::patterns::Pattern;
use crate::sorting::{is_less, Sorter};

/// How many leading elements are dumped when a sort leaves its input out of order.
pub const DUMP_LEN: usize = 5;

/// One timed and verified sort call.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub pattern: Pattern,
    pub elapsed: Duration,
    /// The first index holding an element smaller than its predecessor.
    pub violation: Option<usize>,
}

impl Measurement {
    pub fn micros(&self) -> u128 {
        self.elapsed.as_micros()
    }

    pub fn is_sorted(&self) -> bool {
        self.violation.is_none()
    }
}

/// Returns the index of the first element that is smaller than its predecessor, or `None` if
/// `slice` is in non-decreasing order.
///
/// ```
/// use sortlab_core::sorting::benchmark::find_violation;
///
/// assert_eq!(find_violation(&[1.0, 2.0, 2.0]), None);
/// assert_eq!(find_violation(&[1.0, 3.0, 2.0]), Some(2));
/// ```
pub fn find_violation(slice: &[f64]) -> Option<usize> {
    slice
        .windows(2)
        .position(|w| is_less(w[1], w[0]))
        .map(|i| i + 1)
}

/// The first [`DUMP_LEN`] elements of `slice`, one per line.
pub fn dump(slice: &[f64]) -> String {
    let mut s = String::new();
    for (i, value) in slice.iter().take(DUMP_LEN).enumerate() {
        let _ = writeln!(s, "p[{i}] = {value:e}");
    }
    s
}

/// Fills `slice` with `pattern`, sorts it with `sorter` and checks the result.
///
/// Only the sort call itself is timed. A violation is logged together with a dump of the
/// leading elements and recorded in the returned [`Measurement`]; it never aborts the run.
pub fn time_sort<S, R>(
    slice: &mut [f64],
    sorter: &S,
    pattern: Pattern,
    rng: &mut R,
) -> Measurement
where
    S: Sorter + ?Sized,
    R: Rng + ?Sized,
{
    pattern.fill(slice, rng);

    let now = Instant::now();
    sorter.sort(slice);
    let elapsed = now.elapsed();

    let violation = find_violation(slice);
    if let Some(index) = violation {
        log::error!("sort fails at {index}\n{}", dump(slice));
    }

    Measurement {
        pattern,
        elapsed,
        violation,
    }
}

/// Times `repeat` sorts of freshly generated random input, writing the elapsed microseconds
/// of each one to `out`.
pub fn time_random<S, R, W>(
    slice: &mut [f64],
    sorter: &S,
    repeat: usize,
    rng: &mut R,
    out: &mut W,
) -> io::Result<Vec<Measurement>>
where
    S: Sorter + ?Sized,
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    // A single measurement stays on the line so the reversed one can follow it.
    let end = if repeat > 1 { "\n" } else { " " };
    repeat_timing(slice, sorter, Pattern::Random, repeat, rng, out, |out, m| {
        write!(out, " {}{end}", m.micros())
    })
}

/// Times `repeat` sorts of reversed input, writing the elapsed microseconds of each one to
/// `out` on its own line.
pub fn time_reversed<S, R, W>(
    slice: &mut [f64],
    sorter: &S,
    repeat: usize,
    rng: &mut R,
    out: &mut W,
) -> io::Result<Vec<Measurement>>
where
    S: Sorter + ?Sized,
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    repeat_timing(slice, sorter, Pattern::Reversed, repeat, rng, out, |out, m| {
        writeln!(out, "{}", m.micros())
    })
}

fn repeat_timing<S, R, W, F>(
    slice: &mut [f64],
    sorter: &S,
    pattern: Pattern,
    repeat: usize,
    rng: &mut R,
    out: &mut W,
    mut report: F,
) -> io::Result<Vec<Measurement>>
where
    S: Sorter + ?Sized,
    R: Rng + ?Sized,
    W: Write + ?Sized,
    F: FnMut(&mut W, &Measurement) -> io::Result<()>,
{
    let mut measurements = Vec::with_capacity(repeat);
    for _ in 0..repeat {
        let measurement = time_sort(slice, sorter, pattern, rng);
        report(out, &measurement)?;
        out.flush()?;
        measurements.push(measurement);
    }
    Ok(measurements)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::sorting::{Algorithm, QuickSorter};
    use rand::{rngs::StdRng, SeedableRng};

    struct NoopSorter;

    impl Sorter for NoopSorter {
        fn sort(&self, _: &mut [f64]) {}
    }

    #[test]
    fn violations() {
        assert_eq!(find_violation(&[]), None);
        assert_eq!(find_violation(&[1.0]), None);
        assert_eq!(find_violation(&[1.0, 1.0, 1.0]), None);
        assert_eq!(find_violation(&[2.0, 1.0]), Some(1));
        assert_eq!(find_violation(&[1.0, 2.0, 3.0, 0.0, -1.0]), Some(3));
    }

    #[test]
    fn dump_is_bounded() {
        let slice = (0..100).map(f64::from).collect::<Vec<_>>();
        let dumped = dump(&slice);
        assert_eq!(dumped.lines().count(), DUMP_LEN);
        assert!(dumped.starts_with("p[0] = 0e0\n"));

        assert_eq!(dump(&[1.5]).lines().count(), 1);
    }

    #[test]
    fn verified_measurement() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut slice = vec![0.0; 500];
        for pattern in Pattern::ALL {
            let m = time_sort(&mut slice, &QuickSorter, pattern, &mut rng);
            assert_eq!(m.pattern, pattern);
            assert!(m.is_sorted());
            assert!(slice.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn broken_sorter_is_reported_not_fatal() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut slice = vec![0.0; 100];

        let m = time_sort(&mut slice, &NoopSorter, Pattern::Reversed, &mut rng);
        assert_eq!(m.violation, Some(1));

        let m = time_sort(&mut slice, &NoopSorter, Pattern::Random, &mut rng);
        assert!(!m.is_sorted());
    }

    #[test]
    fn one_line_per_repetition() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut slice = vec![0.0; 64];
        let mut out = Vec::new();

        let random = time_random(&mut slice, &Algorithm::Merge, 3, &mut rng, &mut out).unwrap();
        let reversed =
            time_reversed(&mut slice, &Algorithm::Merge, 3, &mut rng, &mut out).unwrap();

        assert_eq!(random.len(), 3);
        assert_eq!(reversed.len(), 3);
        assert!(random.iter().chain(&reversed).all(Measurement::is_sorted));

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 6);
        assert!(out.lines().all(|l| l.trim().parse::<u128>().is_ok()));
    }

    #[test]
    fn single_repetition_shares_a_line() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut slice = vec![0.0; 16];
        let mut out = Vec::new();

        time_random(&mut slice, &Algorithm::Quick, 1, &mut rng, &mut out).unwrap();
        write!(out, "Reversed ").unwrap();
        time_reversed(&mut slice, &Algorithm::Quick, 1, &mut rng, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains(" Reversed "));
    }

    #[test]
    fn zero_repetitions() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut out = Vec::new();
        let measurements =
            time_random(&mut [0.0; 4], &Algorithm::Insertion, 0, &mut rng, &mut out).unwrap();
        assert!(measurements.is_empty());
        assert!(out.is_empty());
    }
}
