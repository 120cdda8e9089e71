//! Tests for item name normalization

use crate::slug::normalize_item_name;

#[test]
fn test_normalize_simple_name() {
    assert_eq!(normalize_item_name("Mirage Prime Set"), "mirage_prime_set");
}

#[test]
fn test_normalize_trims_surrounding_whitespace() {
    assert_eq!(normalize_item_name("  Ash Prime Set \n"), "ash_prime_set");
}

#[test]
fn test_normalize_keeps_internal_space_runs() {
    // Each space maps to one underscore, runs are not collapsed
    assert_eq!(normalize_item_name("nova  prime"), "nova__prime");
}

#[test]
fn test_normalize_passes_punctuation_through() {
    assert_eq!(
        normalize_item_name("Secura Dual Cestra's Blueprint"),
        "secura_dual_cestra's_blueprint"
    );
}

#[test]
fn test_normalize_empty_input() {
    assert_eq!(normalize_item_name(""), "");
    assert_eq!(normalize_item_name("   \t"), "");
}

#[test]
fn test_normalize_is_idempotent() {
    let inputs = [
        "Mirage Prime Set",
        "  Ash Prime Set ",
        "ALREADY_SLUG",
        "a b  c",
        "",
        "Ünïcode Ítem",
    ];

    for input in inputs {
        let once = normalize_item_name(input);
        let twice = normalize_item_name(&once);
        assert_eq!(once, twice, "not idempotent for {input:?}");
    }
}

#[test]
fn test_normalize_matches_definition() {
    let inputs = [" Vauban Prime Neuroptics ", "X", "two words", "\tTabbed\t"];

    for input in inputs {
        let expected = input.trim().to_lowercase().replace(' ', "_");
        assert_eq!(normalize_item_name(input), expected);
    }
}
