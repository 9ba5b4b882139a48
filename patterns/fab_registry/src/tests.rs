use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn numbers() -> Registry<u32> {
    let mut reg = Registry::new("number");
    reg.register("two", || 2);
    reg.register("one", || 1);
    reg.register("three", || 3);
    reg
}

#[test]
fn test_create_known_tag() {
    let reg = numbers();
    assert_eq!(reg.create("one"), Ok(1));
    assert_eq!(reg.create("two"), Ok(2));
    assert_eq!(reg.create("three"), Ok(3));
}

#[test]
fn test_create_unknown_tag() {
    let reg = numbers();
    let err = match reg.create("four") {
        Err(err) => err,
        Ok(n) => panic!("expected UnknownVariant, got {n}"),
    };
    assert_eq!(err.family, "number");
    assert_eq!(err.tag, "four");
    assert_eq!(err.expected, vec!["one", "three", "two"]);
}

#[test]
fn test_error_message_lists_supported_tags() {
    let reg = numbers();
    let err = match reg.create("four") {
        Err(err) => err,
        Ok(n) => panic!("expected UnknownVariant, got {n}"),
    };
    assert_eq!(
        err.to_string(),
        "unknown number variant `four`, expected one of: one, three, two",
    );
}

#[test]
fn test_tags_sorted_regardless_of_registration_order() {
    let reg = numbers();
    assert_eq!(reg.tags(), ["one", "three", "two"]);
}

#[test]
fn test_reregistering_replaces_constructor() {
    let mut reg = numbers();
    reg.register("one", || 10);
    assert_eq!(reg.create("one"), Ok(10));
    // No duplicate tag entry either.
    assert_eq!(reg.len(), 3);
    assert_eq!(reg.tags(), ["one", "three", "two"]);
}

#[test]
fn test_contains_and_len() {
    let reg = numbers();
    assert!(reg.contains("one"));
    assert!(!reg.contains("four"));
    assert_eq!(reg.len(), 3);
    assert!(!reg.is_empty());
    assert!(Registry::<u32>::new("empty").is_empty());
}

#[test]
fn test_family_label() {
    assert_eq!(numbers().family(), "number");
}

#[test]
fn test_repeated_creates_are_independent() {
    let mut reg = Registry::new("list");
    reg.register("empty", Vec::<u32>::new);
    let mut first = match reg.create("empty") {
        Ok(v) => v,
        Err(err) => panic!("create failed: {err}"),
    };
    let second = match reg.create("empty") {
        Ok(v) => v,
        Err(err) => panic!("create failed: {err}"),
    };
    first.push(1);
    assert_eq!(first, vec![1]);
    assert_eq!(second, Vec::<u32>::new());
}

proptest! {
    #[test]
    fn unknown_tags_always_fail(tag in "[A-Za-z_]{1,12}") {
        let reg = numbers();
        prop_assume!(!reg.contains(&tag));
        let err = match reg.create(&tag) {
            Err(err) => err,
            Ok(n) => panic!("expected UnknownVariant, got {n}"),
        };
        prop_assert_eq!(err.family, "number");
        prop_assert_eq!(err.tag, tag);
    }
}
