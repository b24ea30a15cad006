// Integration tests for the sort session

use sortty::engine::{Intent, Outcome, Phase, SessionOptions, SortSession, Status, Value};
use sortty::registry::Registry;

fn session(values: Vec<Value>) -> SortSession {
    let options = SessionOptions {
        seed: Some(2024),
        ..SessionOptions::default()
    };
    SortSession::from_values(Registry::with_defaults().expect("registry"), options, values)
        .expect("session creation failed")
}

fn permutations(values: &[Value]) -> Vec<Vec<Value>> {
    if values.len() <= 1 {
        return vec![values.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..values.len() {
        let mut rest = values.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

#[test]
fn test_bubble_sort_scenario() {
    let mut s = session(vec![5, 3, 4, 1, 2]);

    let first = s.step_forward().expect("first step");
    assert_eq!(first.first, Some(0));
    assert_eq!(first.second, Some(1));
    assert!(first.mutated);
    assert!(!first.terminated);
    assert_eq!(s.values(), &[3, 5, 4, 1, 2]);

    for _ in 1..10 {
        s.step_forward();
    }
    assert_eq!(s.values(), &[1, 2, 3, 4, 5]);
    assert_eq!(s.phase(), Phase::Complete);
    assert_eq!(s.steps(), 10);
}

#[test]
fn test_trivial_arrays() {
    let empty = session(Vec::new());
    assert!(empty.is_complete());
    assert_eq!(empty.steps(), 0);

    let mut single = session(vec![1]);
    let result = single.step_forward().expect("one step");
    assert!(result.terminated);
    assert!(!result.mutated);
    assert_eq!(single.swaps(), 0);
}

#[test]
fn test_every_algorithm_sorts_every_permutation() {
    let registry = Registry::with_defaults().unwrap();
    for index in 0..registry.count() {
        for n in 0..=6 {
            let base: Vec<Value> = (1..=n).collect();
            for input in permutations(&base) {
                let mut s = session(input.clone());
                s.select_algorithm(index).unwrap();
                s.run_to_completion();

                assert!(s.is_complete(), "{} on {:?}", s.algorithm_name(), input);
                assert_eq!(s.values(), base.as_slice(), "{} on {:?}", s.algorithm_name(), input);
            }
        }
    }
}

#[test]
fn test_duplicates_are_preserved() {
    let input = vec![3, 1, 3, 2, 1, 2, 3];
    let mut expected = input.clone();
    expected.sort();
    for index in 0..5 {
        let mut s = session(input.clone());
        s.select_algorithm(index).unwrap();
        s.run_to_completion();
        assert_eq!(s.values(), expected.as_slice(), "{}", s.algorithm_name());
    }
}

#[test]
fn test_counters_are_monotonic() {
    for index in 0..5 {
        let mut s = session(vec![6, 2, 9, 4, 4, 1, 8]);
        s.select_algorithm(index).unwrap();

        let mut steps = 0;
        let mut swaps = 0;
        while let Some(result) = s.step_forward() {
            steps += 1;
            if result.mutated {
                swaps += 1;
            }
            assert_eq!(s.steps(), steps);
            assert_eq!(s.swaps(), swaps);
        }
        assert!(s.is_complete());
    }
}

#[test]
fn test_completion_is_idempotent() {
    let mut s = session(vec![4, 3, 2, 1]);
    s.select_algorithm_by_name("Merge Sort").unwrap();
    s.run_to_completion();

    let values = s.values().to_vec();
    let steps = s.steps();
    for _ in 0..3 {
        assert!(s.step_forward().is_none());
    }
    assert_eq!(s.values(), values.as_slice());
    assert_eq!(s.steps(), steps);
    assert_eq!(s.status(), Status::Complete);
}

#[test]
fn test_reset_restores_original() {
    let original = vec![8, 6, 7, 5, 3, 0, 9];
    let mut s = session(original.clone());
    s.select_algorithm(3).unwrap();
    for _ in 0..9 {
        s.step_forward();
    }
    assert_ne!(s.steps(), 0);

    s.reset();

    assert_eq!(s.values(), original.as_slice());
    assert_eq!(s.steps(), 0);
    assert_eq!(s.swaps(), 0);
    assert_eq!(s.highlight(), None);
    assert_eq!(s.phase(), Phase::Ready);

    // The replay after reset matches a fresh session exactly
    let mut fresh = session(original.clone());
    fresh.select_algorithm(3).unwrap();
    for _ in 0..20 {
        assert_eq!(s.step_forward(), fresh.step_forward());
    }
}

#[test]
fn test_randomize_keeps_value_set() {
    let mut s = session(vec![1, 2, 3, 4, 5, 6, 7, 8]);
    s.step_forward();

    s.randomize();

    let mut values = s.values().to_vec();
    assert_eq!(s.original(), values.as_slice());
    assert_eq!(s.steps(), 0);
    values.sort();
    assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_intents() {
    let mut s = session(vec![3, 1, 2]);

    assert_eq!(s.apply(Intent::TogglePause), Outcome::Applied);
    assert_eq!(s.status(), Status::Running);

    assert_eq!(s.apply(Intent::NextAlgorithm), Outcome::Applied);
    assert_eq!(s.algorithm_name(), "Selection Sort");

    assert!(matches!(s.apply(Intent::SelectAlgorithm(99)), Outcome::Ignored(_)));
    assert_eq!(s.algorithm_name(), "Selection Sort");

    assert_eq!(s.apply(Intent::IncreaseSize), Outcome::Applied);
    assert_eq!(s.values().len(), 4);
    assert_eq!(s.apply(Intent::DecreaseSize), Outcome::Applied);
    assert_eq!(s.apply(Intent::DecreaseSize), Outcome::Applied);
    assert_eq!(s.apply(Intent::DecreaseSize), Outcome::Unchanged);
    assert_eq!(s.values().len(), 2);

    assert_eq!(s.apply(Intent::RunToEnd), Outcome::Applied);
    assert!(s.is_complete());
    assert_eq!(s.apply(Intent::Quit), Outcome::Quit);
}

#[test]
fn test_step_backward_to_start() {
    let mut s = session(vec![4, 2, 3, 1]);
    s.select_algorithm_by_name("Insertion Sort").unwrap();
    s.run_to_completion();

    while s.step_backward() {}

    assert_eq!(s.values(), &[4, 2, 3, 1]);
    assert_eq!(s.steps(), 0);
    assert_eq!(s.phase(), Phase::Ready);
    assert!(!s.projection().can_step_back);
}

#[test]
fn test_projection_mirrors_session() {
    let mut s = session(vec![2, 1]);
    s.step_forward();

    let view = s.projection();
    assert_eq!(view.values, &[1, 2]);
    assert_eq!(view.algorithm, "Bubble Sort");
    assert_eq!(view.highlight, Some((0, 1)));
    assert!(view.last_mutated);
    assert_eq!(view.steps, 1);
    assert_eq!(view.swaps, 1);
    assert_eq!(view.size, 2);
    assert_eq!(view.status, Status::Paused);
    assert!(view.is_highlighted(1));
    assert_eq!(view.max_value(), 2);
}
