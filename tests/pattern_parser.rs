use bunner_path_pattern::{
    Codec, Key, LexTokenKind, Modifier, ParseOptions, PathPatternError, PatternError, Token, parse,
};

fn default_parse_options() -> ParseOptions {
    ParseOptions::default()
}

fn key_at(tokens: &[Token], index: usize) -> &Key {
    match &tokens[index] {
        Token::Param(key) => key,
        other => panic!("expected parameter token, got {other:?}"),
    }
}

#[test]
fn parse_when_literal_and_parameter_then_splits_tokens() {
    let data = parse("/users/:id", &default_parse_options()).expect("pattern should parse");
    assert_eq!(data.tokens.len(), 2);
    assert_eq!(data.delimiter, "/");
    match &data.tokens[0] {
        Token::Text(text) => assert_eq!(text, "/users/"),
        other => panic!("expected text token, got {other:?}"),
    }
    let key = key_at(&data.tokens, 1);
    assert_eq!(key.name, "id");
    assert_eq!(key.pattern, None);
    assert_eq!(key.modifier, None);
}

#[test]
fn parse_when_custom_pattern_then_keeps_source() {
    let data = parse("/users/:id(\\d+)", &default_parse_options()).expect("pattern should parse");
    let key = key_at(&data.tokens, 1);
    assert_eq!(key.pattern.as_deref(), Some("\\d+"));
}

#[test]
fn parse_when_unnamed_patterns_then_numbers_them_in_order() {
    let data = parse("/(\\d+)/(\\w+)", &default_parse_options()).expect("pattern should parse");
    let names: Vec<_> = data.keys().map(|key| key.name.clone()).collect();
    assert_eq!(names, vec!["0", "1"]);
}

#[test]
fn parse_when_group_with_modifier_then_records_prefix_and_separator() {
    let data = parse("/list{/:item}*", &default_parse_options()).expect("pattern should parse");
    let key = key_at(&data.tokens, 1);
    assert_eq!(key.name, "item");
    assert_eq!(key.prefix, "/");
    assert_eq!(key.suffix, "");
    assert_eq!(key.modifier, Some(Modifier::ZeroOrMore));
    assert_eq!(key.separator(), "/");
}

#[test]
fn parse_when_group_has_explicit_separator_then_uses_it() {
    let data = parse("{:tag;,}+", &default_parse_options());
    match data.expect_err("comma is reserved") {
        PathPatternError::Pattern(PatternError::UnexpectedToken { .. }) => {}
        other => panic!("unexpected error: {other:?}"),
    }

    let data = parse("{:tag;|}+", &default_parse_options()).expect("pattern should parse");
    let key = key_at(&data.tokens, 0);
    assert_eq!(key.separator.as_deref(), Some("|"));
}

#[test]
fn parse_when_group_without_name_then_is_non_capturing() {
    let data = parse("/a{/b}?", &default_parse_options()).expect("pattern should parse");
    let key = key_at(&data.tokens, 1);
    assert!(!key.is_capturing());
    assert_eq!(data.keys().count(), 0);
}

#[test]
fn parse_when_wildcard_then_uses_delimiter_excluding_pattern() {
    let data = parse("/files/*path", &default_parse_options()).expect("pattern should parse");
    let key = key_at(&data.tokens, 1);
    assert_eq!(key.name, "path");
    assert_eq!(key.modifier, Some(Modifier::ZeroOrMore));
    assert_eq!(key.separator.as_deref(), Some("/"));
    assert!(key.pattern.is_some());
}

#[test]
fn parse_when_optional_bare_parameter_then_marks_optional() {
    let data = parse("/:test?", &default_parse_options()).expect("pattern should parse");
    let key = key_at(&data.tokens, 1);
    assert_eq!(key.modifier, Some(Modifier::Optional));
    assert!(key.is_optional());
}

#[test]
fn parse_when_asterisk_follows_bare_parameter_then_rejects() {
    let err = parse("/:id*", &default_parse_options()).expect_err("bare parameter cannot repeat");
    match err {
        PathPatternError::Pattern(PatternError::UnexpectedAsteriskAfterParameter { name, .. }) => {
            assert_eq!(name, "id");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn parse_when_capturing_group_in_pattern_then_rejects() {
    let err = parse("/:foo(\\d+(\\.\\d+)?)", &default_parse_options())
        .expect_err("nested capturing group should fail");
    assert!(
        err.to_string().contains("Capturing groups are not allowed"),
        "unexpected message: {err}"
    );
}

#[test]
fn parse_when_pattern_starts_with_question_mark_then_rejects() {
    let err =
        parse("/:foo(?:x)", &default_parse_options()).expect_err("leading ? should be rejected");
    assert!(
        err.to_string().contains("Pattern cannot start with \"?\""),
        "unexpected message: {err}"
    );
}

#[test]
fn parse_when_group_unterminated_then_reports_expected_close() {
    let err = parse("/{:id", &default_parse_options()).expect_err("group should be unterminated");
    match err {
        PathPatternError::Pattern(PatternError::UnexpectedToken { index, .. }) => {
            assert_eq!(index, 5);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn parse_when_encode_path_set_then_rewrites_literal_text() {
    let options = ParseOptions::builder()
        .encode_path(Codec::new(|text| text.to_lowercase()))
        .build()
        .expect("builder should succeed");
    let data = parse("/USERS/:ID", &options).expect("pattern should parse");
    assert_eq!(key_at(&data.tokens, 1).name, "ID");
    match &data.tokens[0] {
        Token::Text(text) => assert_eq!(text, "/users/"),
        other => panic!("expected text token, got {other:?}"),
    }
}

#[test]
fn parse_when_custom_delimiter_then_records_it() {
    let options = ParseOptions::builder()
        .delimiter(".")
        .build()
        .expect("builder should succeed");
    let data = parse("*host", &options).expect("pattern should parse");
    assert_eq!(data.delimiter, ".");
    assert_eq!(key_at(&data.tokens, 0).separator.as_deref(), Some("."));
}

#[test]
fn parse_when_reserved_or_stray_character_then_expects_end() {
    for (pattern, kind) in [
        ("/a!b", LexTokenKind::Bang),
        ("/a@b", LexTokenKind::At),
        ("/a}b", LexTokenKind::Close),
    ] {
        let err = parse(pattern, &default_parse_options()).expect_err("character is reserved");
        match err {
            PathPatternError::Pattern(PatternError::UnexpectedToken {
                kind: found,
                index,
                expected,
            }) => {
                assert_eq!(found, kind, "pattern {pattern:?}");
                assert_eq!(index, 2, "pattern {pattern:?}");
                assert_eq!(expected, LexTokenKind::End, "pattern {pattern:?}");
            }
            other => panic!("unexpected error for {pattern:?}: {other:?}"),
        }
    }
}
