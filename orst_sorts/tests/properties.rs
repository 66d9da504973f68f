use std::fmt::Debug;

use clap::ValueEnum;
use orst_sorts::compare::{is_sorted_by, Compare, Greater, Less};
use orst_sorts::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

const TEST_SIZES: [usize; 22] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 15, 16, 17, 20, 24, 33, 50, 100, 500,
];

const SEED: u64 = 0x5eed;

fn random(len: usize, rng: &mut StdRng) -> Vec<i32> {
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

fn random_uniform(len: usize, max: i32, rng: &mut StdRng) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(0..=max)).collect()
}

fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

fn saw(len: usize, rng: &mut StdRng) -> Vec<i32> {
    let mut v = random(len, rng);
    for chunk in v.chunks_mut(7) {
        chunk.sort();
    }
    v
}

fn patterns() -> Vec<(&'static str, Vec<Vec<i32>>)> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut by_size = |make: &mut dyn FnMut(usize, &mut StdRng) -> Vec<i32>| {
        TEST_SIZES
            .iter()
            .map(|&len| make(len, &mut rng))
            .collect::<Vec<_>>()
    };

    vec![
        ("random", by_size(&mut random)),
        ("few distinct", by_size(&mut |len, rng| random_uniform(len, 3, rng))),
        ("all equal", by_size(&mut |len, _| vec![66; len])),
        ("ascending", by_size(&mut |len, _| ascending(len))),
        ("descending", by_size(&mut |len, _| descending(len))),
        ("saw", by_size(&mut saw)),
    ]
}

fn check_sorted<T, C>(name: &str, pattern: &str, original: &[T], result: &[T], compare: &C)
where
    T: Ord + Clone + Debug,
    C: Compare<T>,
{
    let mut expected = original.to_vec();
    expected.sort();
    let mut got = result.to_vec();
    got.sort();
    assert_eq!(got, expected, "{name} lost or duplicated elements on {pattern}");

    if !is_sorted_by(result, compare) {
        if original.len() <= 100 {
            eprintln!("Original: {original:?}");
            eprintln!("Got:      {result:?}");
        }
        panic!("{name} did not sort {pattern} of length {}", original.len());
    }
}

fn for_every_input(mut test: impl FnMut(&str, &[i32])) {
    for (pattern, inputs) in patterns() {
        for input in inputs {
            test(pattern, &input);
        }
    }
}

fn comparator_algorithms() -> Vec<Algorithm> {
    [
        Algorithm::Insertion,
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::QuickMedianOfThree,
        Algorithm::QuickMiddle,
        Algorithm::QuickFirst,
    ]
    .to_vec()
}

mod sortedness {
    use super::*;

    #[test]
    fn ascending_every_algorithm() {
        for_every_input(|pattern, input| {
            for algorithm in [
                Algorithm::Insertion,
                Algorithm::Shell,
                Algorithm::Heap,
                Algorithm::Merge,
                Algorithm::QuickMedianOfThree,
                Algorithm::QuickMiddle,
                Algorithm::QuickFirst,
                Algorithm::ThreeWay,
            ] {
                let mut v = input.to_vec();
                algorithm.sort(&mut v);
                check_sorted(algorithm.name(), pattern, input, &v, &Less);
            }
        });
    }

    #[test]
    fn descending_comparator_algorithms() {
        for_every_input(|pattern, input| {
            for algorithm in comparator_algorithms() {
                let mut v = input.to_vec();
                algorithm.sort_by(&mut v, &Greater).unwrap();
                check_sorted(algorithm.name(), pattern, input, &v, &Greater);
            }
        });
    }

    #[test]
    fn custom_comparator() {
        let by_last_digit = |a: &i32, b: &i32| a.rem_euclid(10) < b.rem_euclid(10);
        for_every_input(|pattern, input| {
            for algorithm in comparator_algorithms() {
                let mut v = input.to_vec();
                algorithm.sort_by(&mut v, &by_last_digit).unwrap();
                check_sorted(algorithm.name(), pattern, input, &v, &by_last_digit);
            }
        });
    }

    #[test]
    fn idempotent() {
        for_every_input(|_, input| {
            for algorithm in comparator_algorithms() {
                let mut once = input.to_vec();
                algorithm.sort_by(&mut once, &Greater).unwrap();
                let mut twice = once.clone();
                algorithm.sort_by(&mut twice, &Greater).unwrap();
                assert_eq!(once, twice, "{}", algorithm.name());
            }
        });
    }

    #[test]
    fn strings() {
        let words = "the quick brown fox jumps over the lazy dog while the cat naps in a sunny spot"
            .split(' ')
            .map(String::from)
            .collect::<Vec<_>>();
        for algorithm in comparator_algorithms() {
            let mut v = words.clone();
            algorithm.sort_by(&mut v, &Less).unwrap();
            check_sorted(algorithm.name(), "words", &words, &v, &Less);
        }
    }
}

mod stability {
    use super::*;

    fn keyed(len: usize, rng: &mut StdRng) -> Vec<(u8, usize)> {
        (0..len).map(|position| (rng.gen_range(0..4), position)).collect()
    }

    fn stable<F>(v: &[(u8, usize)], before: F) -> bool
    where
        F: Fn(u8, u8) -> bool,
    {
        v.windows(2)
            .all(|w| before(w[0].0, w[1].0) || (w[0].0 == w[1].0 && w[0].1 < w[1].1))
    }

    #[test]
    fn merge_and_insertion_keep_equal_keys_in_order() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let by_key = |a: &(u8, usize), b: &(u8, usize)| a.0 < b.0;
        let by_key_desc = |a: &(u8, usize), b: &(u8, usize)| a.0 > b.0;

        for &len in &TEST_SIZES {
            let input = keyed(len, &mut rng);

            for binary in [false, true] {
                let mut v = input.clone();
                InsertionSorter { binary }.sort_by(&mut v, &by_key);
                assert!(stable(&v, |a, b| a < b), "insertion, binary: {binary}");
            }

            let mut v = input.clone();
            MergeSorter.sort_by(&mut v, &by_key);
            assert!(stable(&v, |a, b| a < b), "merge ascending");

            let mut v = input.clone();
            MergeSorter.sort_by(&mut v, &by_key_desc);
            assert!(stable(&v, |a, b| a > b), "merge descending");
        }
    }
}

mod selection {
    use super::*;

    #[test]
    fn matches_a_sorted_copy() {
        for_every_input(|pattern, input| {
            let mut sorted = input.to_vec();
            sorted.sort();

            for k in 1..=input.len() {
                let mut v = input.to_vec();
                let kth = *quick_select(&mut v, k).unwrap();
                assert_eq!(kth, sorted[k - 1], "rank {k} of {pattern}");
                assert_eq!(v[k - 1], kth);
                assert!(v[..k - 1].iter().all(|x| *x <= kth));
                assert!(v[k..].iter().all(|x| *x >= kth));
            }
        });
    }

    #[test]
    fn rejects_invalid_ranks() {
        let mut v = vec![1, 2, 3];
        assert_eq!(
            quick_select(&mut v, 0),
            Err(Error::InvalidRank { k: 0, len: 3 })
        );
        assert_eq!(
            quick_select(&mut v, 4),
            Err(Error::InvalidRank { k: 4, len: 3 })
        );
    }
}

mod scenarios {
    use super::*;

    const INPUT: [i32; 6] = [5, 3, 8, 1, 9, 2];

    #[test]
    fn a_ascending() {
        for &algorithm in Algorithm::value_variants() {
            let mut v = INPUT;
            algorithm.sort(&mut v);
            assert_eq!(v, [1, 2, 3, 5, 8, 9], "{}", algorithm.name());
        }
    }

    #[test]
    fn b_descending() {
        for algorithm in comparator_algorithms() {
            let mut v = INPUT;
            algorithm.sort_by(&mut v, &Greater).unwrap();
            assert_eq!(v, [9, 8, 5, 3, 2, 1], "{}", algorithm.name());
        }
    }

    #[test]
    fn c_all_equal() {
        for &algorithm in Algorithm::value_variants() {
            let mut v = [4, 4, 4, 4];
            algorithm.sort(&mut v);
            assert_eq!(v, [4, 4, 4, 4]);
        }
        for algorithm in comparator_algorithms() {
            let mut v = [4, 4, 4, 4];
            algorithm.sort_by(&mut v, &Greater).unwrap();
            assert_eq!(v, [4, 4, 4, 4]);
        }
    }

    #[test]
    fn d_select_third() {
        let mut v = [7, 2, 9, 4, 1];
        quick_select(&mut v, 3).unwrap();
        assert_eq!(v[2], 4);
    }

    #[test]
    fn e_first_pivot_on_sorted_input() {
        let mut v = (0..1000).collect::<Vec<i32>>();
        QuickSorter {
            pivot: PivotStrategy::First,
        }
        .sort(&mut v);
        assert_eq!(v, (0..1000).collect::<Vec<_>>());

        let mut v = (0..1000).collect::<Vec<i32>>();
        quick_sort_by(&mut v, PivotStrategy::First, &Greater);
        assert_eq!(v, (0..1000).rev().collect::<Vec<_>>());
    }
}

mod broken_comparators {
    use super::*;

    #[test]
    fn terminate_and_keep_elements() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let always = |_: &i32, _: &i32| true;
        let coin = |a: &i32, b: &i32| (a ^ b) & 1 == 1;

        for &len in &TEST_SIZES {
            let input = random(len, &mut rng);
            for algorithm in comparator_algorithms() {
                for compare in [&always as &dyn Compare<i32>, &coin] {
                    let mut v = input.clone();
                    algorithm.sort_by(&mut v, compare).unwrap();

                    let mut got = v.clone();
                    got.sort();
                    let mut expected = input.clone();
                    expected.sort();
                    assert_eq!(got, expected, "{}", algorithm.name());
                }
            }
        }
    }
}
