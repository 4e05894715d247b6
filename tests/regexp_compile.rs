use bunner_path_pattern::{
    PathPatternError, PathToRegexpOptions, PatternFlags, RegexError, path_to_regexp,
};
use fancy_regex::Regex;

fn key_names(pattern: &str, options: &PathToRegexpOptions) -> Vec<String> {
    path_to_regexp(pattern, options)
        .expect("pattern should compile")
        .keys()
        .iter()
        .map(|key| key.name.clone())
        .collect()
}

#[test]
fn path_to_regexp_when_default_options_then_anchors_and_ignores_case() {
    let regex = path_to_regexp("/user/:id", &PathToRegexpOptions::default())
        .expect("pattern should compile");
    assert!(regex.as_str().starts_with("(?i)^"));
    assert!(regex.as_str().ends_with('$'));
    assert!(regex.flags().contains(PatternFlags::LOOSE | PatternFlags::END));
    assert!(regex.is_match("/USER/1").expect("no engine error"));
}

#[test]
fn path_to_regexp_when_same_input_then_source_is_deterministic() {
    let options = PathToRegexpOptions::default();
    let first = path_to_regexp("/a/:b{/:c}*", &options).expect("pattern should compile");
    let second = path_to_regexp("/a/:b{/:c}*", &options).expect("pattern should compile");
    assert_eq!(first.as_str(), second.as_str());
    assert_eq!(first.keys(), second.keys());
}

#[test]
fn path_to_regexp_when_parameters_then_keys_follow_group_order() {
    assert_eq!(
        key_names("/:a/{:b}?/(\\d+)/*rest", &PathToRegexpOptions::default()),
        vec!["a", "b", "0", "rest"]
    );
}

#[test]
fn path_to_regexp_when_non_capturing_group_then_has_no_key() {
    let regex = path_to_regexp("/a{/static}?/:id", &PathToRegexpOptions::default())
        .expect("pattern should compile");
    assert_eq!(regex.keys().len(), 1);
    assert!(regex.is_match("/a/static/1").expect("no engine error"));
    assert!(regex.is_match("/a/1").expect("no engine error"));
}

#[test]
fn path_to_regexp_when_captures_then_groups_align_with_keys() {
    let regex = path_to_regexp("/:kind/:id", &PathToRegexpOptions::default())
        .expect("pattern should compile");
    let captures = regex
        .captures("/post/9")
        .expect("no engine error")
        .expect("path should match");
    assert_eq!(regex.keys()[0].name, "kind");
    assert_eq!(captures.get(1).map(|m| m.as_str()), Some("post"));
    assert_eq!(captures.get(2).map(|m| m.as_str()), Some("9"));
}

#[test]
fn path_to_regexp_when_strict_then_detects_ambiguous_neighbours() {
    let options = PathToRegexpOptions::builder()
        .strict(true)
        .build()
        .expect("builder should succeed");

    match path_to_regexp("/:a-:b", &options).expect_err("ambiguous pattern should fail") {
        PathPatternError::Regex(RegexError::AmbiguousPattern { name }) => assert_eq!(name, "b"),
        other => panic!("unexpected error: {other:?}"),
    }

    match path_to_regexp("/:a{-:b}+", &options).expect_err("ambiguous prefix should fail") {
        PathPatternError::Regex(RegexError::AmbiguousPattern { name }) => assert_eq!(name, "b"),
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(path_to_regexp("/:a/:b", &options).is_ok());
}

#[test]
fn path_to_regexp_when_strict_separator_matches_pattern_then_rejects() {
    let options = PathToRegexpOptions::builder()
        .strict(true)
        .build()
        .expect("builder should succeed");
    match path_to_regexp("{:x(.+);-}+", &options).expect_err("separator is ambiguous") {
        PathPatternError::Regex(RegexError::AmbiguousSeparator { name }) => assert_eq!(name, "x"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn path_to_regexp_when_repeating_without_separator_then_rejects() {
    match path_to_regexp("{:x}+", &PathToRegexpOptions::default())
        .expect_err("separator is required")
    {
        PathPatternError::Regex(RegexError::MissingSeparator { name }) => assert_eq!(name, "x"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn path_to_regexp_when_custom_pattern_invalid_then_reports_parameter() {
    match path_to_regexp("/:id([)", &PathToRegexpOptions::default())
        .expect_err("invalid custom pattern")
    {
        PathPatternError::Regex(RegexError::InvalidPattern { name, .. }) => assert_eq!(name, "id"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn path_to_regexp_when_raw_regex_then_passes_through() {
    let raw = Regex::new(r"^/v(\d+)/(?P<rest>.*)$").expect("regex should compile");
    let regex = path_to_regexp(raw, &PathToRegexpOptions::default()).expect("raw regex accepted");
    assert_eq!(regex.as_str(), r"^/v(\d+)/(?P<rest>.*)$");
    assert!(regex.flags().contains(PatternFlags::RAW));
    let names: Vec<_> = regex.keys().iter().map(|key| key.name.as_str()).collect();
    assert_eq!(names, vec!["0", "rest"]);
}

#[test]
fn path_to_regexp_when_into_parts_then_yields_regex_and_keys() {
    let (regex, keys) = path_to_regexp("/:id", &PathToRegexpOptions::default())
        .expect("pattern should compile")
        .into_parts();
    assert!(regex.is_match("/1").expect("no engine error"));
    assert_eq!(keys.len(), 1);
}
