use std::cell::Cell;
use std::rc::Rc;
use stratsort::prelude::*;

fn banana_apple_cherry() -> Vec<String> {
    vec!["banana".to_string(), "apple".to_string(), "cherry".to_string()]
}

#[test]
fn test_unbound_context() {
    let context = SortContext::new();
    assert!(!context.is_bound());
    assert!(context.strategy().is_none());

    let mut input = banana_apple_cherry();
    let mut out = Vec::new();
    let err = context.execute_sort_to(&mut input, &mut out).unwrap_err();

    assert!(matches!(err, SortError::NoStrategy));
    assert_eq!(input, banana_apple_cherry());
    assert!(out.is_empty());
}

#[test]
fn test_bound_context_delegates() {
    let context = SortContext::with_strategy(QuickSort);
    assert!(context.is_bound());
    assert_eq!(context.strategy().map(|s| s.name()), Some("QuickSort"));

    let mut input = banana_apple_cherry();
    let mut out = Vec::new();
    context.execute_sort_to(&mut input, &mut out).unwrap();

    assert_eq!(input, vec!["apple", "banana", "cherry"]);
    assert_eq!(out, b"QuickSorted list \n");
}

#[test]
fn test_latest_strategy_wins() {
    let mut context = SortContext::with_strategy(QuickSort);
    context.set_strategy(ShellSort);
    context.set_strategy(MergeSort);

    let mut input = banana_apple_cherry();
    let mut out = Vec::new();
    context.execute_sort_to(&mut input, &mut out).unwrap();

    assert_eq!(input, banana_apple_cherry());
    assert_eq!(out, b"MergeSorted list \n");
}

#[test]
fn test_rebinding_between_calls() {
    let mut context = SortContext::new();
    let mut out = Vec::new();

    for algorithm in Algorithm::ALL {
        context.set_boxed(algorithm.strategy());
        let mut input = banana_apple_cherry();
        context.execute_sort_to(&mut input, &mut out).unwrap();
    }

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        vec!["QuickSorted list ", "MergeSorted list ", "ShellSorted list "]
    );
}

#[test]
fn test_from_algorithm() {
    let context = SortContext::from(Algorithm::Shell);
    assert_eq!(context.strategy().map(|s| s.name()), Some("ShellSort"));
    assert_eq!(format!("{context:?}"), r#"SortContext { strategy: Some("ShellSort") }"#);
}

/// Counts how often it is invoked; leaves the list alone.
struct Counting(Rc<Cell<usize>>);

impl SortStrategy for Counting {
    fn name(&self) -> &'static str {
        "CountingSort"
    }

    fn reorder(&self, _list: &mut [String]) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn test_custom_strategy() {
    let calls = Rc::new(Cell::new(0));
    let mut context = SortContext::with_strategy(Counting(Rc::clone(&calls)));

    let mut out = Vec::new();
    let mut input = banana_apple_cherry();
    context.execute_sort_to(&mut input, &mut out).unwrap();
    context.execute_sort_to(&mut input, &mut out).unwrap();
    assert_eq!(calls.get(), 2);
    assert_eq!(out, b"CountingSorted list \nCountingSorted list \n");

    context.set_strategy(QuickSort);
    context.execute_sort_to(&mut input, &mut out).unwrap();
    assert_eq!(calls.get(), 2);
    assert_eq!(input, vec!["apple", "banana", "cherry"]);
}

#[test]
fn test_set_boxed_keeps_single_box() {
    let calls = Rc::new(Cell::new(0));
    let boxed: Box<dyn SortStrategy> = Box::new(Counting(Rc::clone(&calls)));
    let addr = std::ptr::from_ref(boxed.as_ref()).cast::<()>();

    let mut context = SortContext::with_strategy(QuickSort);
    context.set_boxed(boxed);

    // Bound strategy lives in the allocation that was passed in.
    let bound = std::ptr::from_ref(context.strategy().unwrap()).cast::<()>();
    assert_eq!(bound, addr);

    let mut out = Vec::new();
    context
        .execute_sort_to(&mut banana_apple_cherry(), &mut out)
        .unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(out, b"CountingSorted list \n");
}

#[test]
fn test_execute_sort_on_stdout() {
    let mut input = banana_apple_cherry();
    let err = SortContext::new().execute_sort(&mut input).unwrap_err();
    assert!(matches!(err, SortError::NoStrategy));
    assert_eq!(input, banana_apple_cherry());

    SortContext::from(Algorithm::Quick)
        .execute_sort(&mut input)
        .unwrap();
    assert_eq!(input, vec!["apple", "banana", "cherry"]);

    let mut input = banana_apple_cherry();
    SortContext::with_strategy(MergeSort)
        .execute_sort(&mut input)
        .unwrap();
    assert_eq!(input, banana_apple_cherry());
}
