use artfs_core::paths::{normalize_prefetch_paths, to_slash};
use proptest::prelude::*;

#[test]
fn trims_whitespace_and_drops_empties() {
    let input = [" config.json ", "  tokenizer.json"];
    assert_eq!(normalize_prefetch_paths(&input), vec!["config.json", "tokenizer.json"]);

    let input = ["", "   ", "\t"];
    assert!(normalize_prefetch_paths(&input).is_empty());

    let empty: [&str; 0] = [];
    assert!(normalize_prefetch_paths(&empty).is_empty());
}

#[test]
fn converts_backslashes_to_forward_slashes() {
    let input = [r"weights\model.bin", "tokenizer/vocab.json"];
    assert_eq!(
        normalize_prefetch_paths(&input),
        vec!["weights/model.bin", "tokenizer/vocab.json"]
    );
    assert_eq!(to_slash(r"a\b\c"), "a/b/c");
}

#[test]
fn preserves_order_of_survivors() {
    let input = ["z.bin", " ", "a.bin", "m.bin"];
    assert_eq!(normalize_prefetch_paths(&input), vec!["z.bin", "a.bin", "m.bin"]);
}

proptest! {
    #[test]
    fn normalization_is_idempotent(input in proptest::collection::vec(".*", 0..8)) {
        let once = normalize_prefetch_paths(&input);
        let twice = normalize_prefetch_paths(&once);
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn survivors_are_trimmed_and_non_empty(input in proptest::collection::vec(".*", 0..8)) {
        for p in normalize_prefetch_paths(&input) {
            prop_assert!(!p.is_empty());
            prop_assert_eq!(p.trim(), p.as_str());
            prop_assert!(!p.contains('\\'));
        }
    }
}
