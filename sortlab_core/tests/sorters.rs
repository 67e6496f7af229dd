use rand::{rngs::StdRng, Rng, SeedableRng};
use sortlab_core::sorting::benchmark::{find_violation, Pattern};
use sortlab_core::sorting::{Algorithm, MergeSorter, Sorter};

fn assert_sorted(slice: &[f64], algorithm: Algorithm) {
    assert_eq!(
        find_violation(slice),
        None,
        "{} left {:?}",
        algorithm.name(),
        &slice[..slice.len().min(8)]
    );
}

// Sorting by bits is only used to compare multisets, not as an ordering of values.
fn multiset(slice: &[f64]) -> Vec<u64> {
    let mut bits = slice.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    bits.sort_unstable();
    bits
}

fn inputs() -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut inputs = vec![
        vec![],
        vec![42.0],
        vec![1.0, 2.0],
        vec![2.0, 1.0],
        vec![5.0, 3.0, 4.0, 1.0, 2.0],
        vec![2.0, 1.0, 2.0, 1.0],
        vec![0.0, -0.0, 0.0, -0.0],
        vec![f64::INFINITY, f64::MIN, f64::MAX, f64::NEG_INFINITY, 0.0],
    ];

    for len in [3, 7, 16, 33, 100, 257, 1000] {
        let mut random = vec![0.0; len];
        Pattern::Random.fill(&mut random, &mut rng);
        inputs.push(random);

        let mut reversed = vec![0.0; len];
        Pattern::Reversed.fill(&mut reversed, &mut rng);
        inputs.push(reversed);

        inputs.push((0..len).map(|_| f64::from(rng.gen_range(0..4i32))).collect());
        inputs.push((0..len).map(|i| -(i as f64) / 3.0).collect());
    }

    inputs
}

#[test]
fn order_and_permutation() {
    for algorithm in Algorithm::ALL {
        for input in inputs() {
            let mut slice = input.clone();
            algorithm.sort(&mut slice);

            assert_sorted(&slice, algorithm);
            assert_eq!(
                multiset(&slice),
                multiset(&input),
                "{} changed the elements",
                algorithm.name()
            );
        }
    }
}

#[test]
fn idempotent() {
    for algorithm in Algorithm::ALL {
        for input in inputs() {
            let mut once = input;
            algorithm.sort(&mut once);
            let mut twice = once.clone();
            algorithm.sort(&mut twice);

            assert_eq!(
                once.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
                twice.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
                "{}",
                algorithm.name()
            );
        }
    }
}

#[test]
fn agrees_with_baseline() {
    for input in inputs() {
        let mut expected = input.clone();
        Algorithm::Baseline.sort(&mut expected);

        for algorithm in Algorithm::ALL {
            let mut slice = input.clone();
            algorithm.sort(&mut slice);
            assert_eq!(
                slice.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
                expected.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
                "{}",
                algorithm.name()
            );
        }
    }
}

#[test]
fn base_cases() {
    for algorithm in Algorithm::ALL {
        let mut empty: Vec<f64> = vec![];
        algorithm.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = [42.0];
        algorithm.sort(&mut one);
        assert_eq!(one, [42.0]);

        for pair in [[1.0, 2.0], [2.0, 1.0]] {
            let mut pair = pair;
            algorithm.sort(&mut pair);
            assert_eq!(pair, [1.0, 2.0], "{}", algorithm.name());
        }
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn arbitrary() {
        for algorithm in Algorithm::ALL {
            let mut slice = [5.0, 3.0, 4.0, 1.0, 2.0];
            algorithm.sort(&mut slice);
            assert_eq!(slice, [1.0, 2.0, 3.0, 4.0, 5.0], "{}", algorithm.name());
        }
    }

    #[test]
    fn reversed() {
        for algorithm in Algorithm::ALL {
            let mut slice = [5.0, 4.0, 3.0, 2.0, 1.0];
            algorithm.sort(&mut slice);
            assert_eq!(slice, [1.0, 2.0, 3.0, 4.0, 5.0], "{}", algorithm.name());
        }
    }

    #[test]
    fn duplicates() {
        for algorithm in Algorithm::ALL {
            let mut slice = [2.0, 1.0, 2.0, 1.0];
            algorithm.sort(&mut slice);
            assert_eq!(slice, [1.0, 1.0, 2.0, 2.0], "{}", algorithm.name());
        }
    }

    #[test]
    fn merge_variants_match_bitwise() {
        let mut rng = StdRng::seed_from_u64(17);
        for len in [0, 1, 2, 3, 5, 64, 999, 10_000] {
            let mut input = vec![0.0; len];
            Pattern::Random.fill(&mut input, &mut rng);
            for (i, x) in input.iter_mut().enumerate() {
                if i % 5 == 0 {
                    *x = -*x;
                }
            }

            let mut plain = input.clone();
            let mut ping_pong = input;
            MergeSorter { ping_pong: false }.sort(&mut plain);
            MergeSorter { ping_pong: true }.sort(&mut ping_pong);

            assert!(plain
                .iter()
                .zip(&ping_pong)
                .all(|(a, b)| a.to_bits() == b.to_bits()));
        }
    }

    #[test]
    fn large_reversed_quick_sort() {
        // Worst case for a first-element pivot; must finish without exhausting the stack.
        let mut slice = vec![0.0; 20_000];
        Pattern::Reversed.fill(&mut slice, &mut StdRng::seed_from_u64(0));
        Algorithm::Quick.sort(&mut slice);
        assert_sorted(&slice, Algorithm::Quick);
    }
}
