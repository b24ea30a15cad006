// Integration tests for the step functions

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortty::algorithms::{Algorithm, MergeSort, StepFunction, StepResult};
use sortty::engine::step_budget;

fn run<T: Ord, S: StepFunction<T>>(sorter: &mut S, array: &mut [T]) -> Vec<StepResult> {
    let budget = step_budget(array.len());
    let mut results = Vec::new();
    while results.len() < budget {
        let result = sorter.step(array);
        results.push(result);
        if result.terminated {
            return results;
        }
    }
    panic!("no termination within {} steps", budget);
}

fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn test_random_arrays_sorted_and_permuted() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for algorithm in Algorithm::ALL {
        for n in [7, 16, 33, 64] {
            let input: Vec<i32> = (0..n).map(|_| rng.gen_range(-20..20)).collect();
            let mut array = input.clone();
            let mut sorter = algorithm.start::<i32>();

            run(&mut sorter, &mut array);

            let mut expected = input.clone();
            expected.sort();
            assert!(is_sorted(&array), "{} left {:?}", algorithm, array);
            assert_eq!(array, expected, "{} lost elements", algorithm);
        }
    }
}

#[test]
fn test_mutation_count_matches_array_changes() {
    let mut rng = StdRng::seed_from_u64(42);
    for algorithm in Algorithm::ALL {
        let mut array: Vec<i32> = (0..20).map(|_| rng.gen_range(0..10)).collect();
        let mut sorter = algorithm.start::<i32>();
        let budget = step_budget(array.len());

        for _ in 0..budget {
            let before = array.clone();
            let result = sorter.step(&mut array);
            if !result.mutated {
                assert_eq!(before, array, "{} changed the array silently", algorithm);
            }
            if result.terminated {
                break;
            }
        }
        assert!(sorter.is_finished());
    }
}

#[test]
fn test_merge_sort_is_stable() {
    #[derive(Debug, Clone)]
    struct Keyed(i32, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Keyed {}
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    let mut array = vec![Keyed(3, 'a'), Keyed(1, 'b'), Keyed(3, 'c')];
    let mut sorter = MergeSort::new();

    run(&mut sorter, &mut array);

    let order: Vec<char> = array.iter().map(|k| k.1).collect();
    assert_eq!(order, vec!['b', 'a', 'c']);
}

#[test]
fn test_sorted_inputs_terminate_without_swaps() {
    for algorithm in Algorithm::ALL {
        for n in 0..10 {
            let mut array: Vec<i32> = (0..n).collect();
            let mut sorter = algorithm.start::<i32>();

            let results = run(&mut sorter, &mut array);

            assert!(results.iter().all(|r| !r.mutated), "{} swapped", algorithm);
        }
    }
}

#[test]
fn test_single_element_terminates_on_first_call() {
    for algorithm in Algorithm::ALL {
        let mut array = vec![1];
        let mut sorter = algorithm.start::<i32>();
        assert_eq!(sorter.step(&mut array), StepResult::finished());
    }
}
