use super::*;

#[test]
fn identical_strings_have_ratio_one() {
    assert_eq!(string_ratio("kitten", "kitten"), 1.0);
}

#[test]
fn kitten_sitting_ratio_is_between_zero_and_one() {
    let r = string_ratio("kitten", "sitting");
    assert!(r > 0.0 && r < 1.0);
    assert!((r - 2.0 * 4.0 / (6.0 + 7.0)).abs() < 1e-9);
}

#[test]
fn closest_match_on_empty_candidates_returns_empty_and_zero() {
    let candidates: [&str; 0] = [];
    assert_eq!(closest_match("anything", &candidates), (String::new(), 0.0));
}

#[test]
fn closest_match_picks_the_best_scoring_candidate() {
    let candidates = ["apple", "appel", "banana"];
    let (best, ratio) = closest_match("apple", &candidates);
    assert_eq!(best, "apple");
    assert_eq!(ratio, 1.0);
}

#[test]
fn closest_match_keeps_first_candidate_on_tied_ratio() {
    let candidates = ["abc", "abd"];
    let (best, _) = closest_match("abx", &candidates);
    assert_eq!(best, "abc");
}

#[test]
fn closest_matches_truncates_and_sorts_descending() {
    let candidates = ["apple", "appel", "banana", "appla"];
    let top = closest_matches("apple", &candidates, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0], "apple");
}

#[test]
fn closest_matches_with_n_larger_than_candidates_returns_all() {
    let candidates = ["a", "b"];
    let top = closest_matches("a", &candidates, 10);
    assert_eq!(top.len(), 2);
}
