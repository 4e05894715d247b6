use bunner_path_pattern::{
    CompileOptions, MatchOptions, OptionsError, ParseOptions, PathPatternError,
    PathToRegexpOptions, compile, match_path, parse, path_to_regexp,
};

#[test]
fn options_when_defaults_then_follow_documented_values() {
    let options = PathToRegexpOptions::default();
    assert_eq!(options.parse.delimiter, "/");
    assert!(!options.sensitive);
    assert!(options.loose);
    assert!(!options.strict);
    assert!(options.start);
    assert!(options.end);
    assert!(options.trailing);

    let compile = CompileOptions::default();
    assert!(compile.validate);
    assert_eq!(compile.encode.as_ref().map(|codec| codec.label()), Some("uri_component"));

    let matching = MatchOptions::default();
    assert_eq!(matching.decode.as_ref().map(|codec| codec.label()), Some("percent_decode"));
}

#[test]
fn options_builder_when_delimiter_empty_then_fails() {
    let err = ParseOptions::builder()
        .delimiter("")
        .build()
        .expect_err("empty delimiter should fail");
    assert_eq!(err, OptionsError::EmptyDelimiter);

    assert!(MatchOptions::builder().delimiter("").build().is_err());
    assert!(CompileOptions::builder().delimiter("").build().is_err());
    assert!(PathToRegexpOptions::builder().delimiter("").build().is_err());
}

#[test]
fn operations_when_options_invalid_then_return_options_error() {
    let mut options = PathToRegexpOptions::default();
    options.parse.delimiter = String::new();

    match path_to_regexp("/:id", &options).expect_err("invalid options") {
        PathPatternError::Options(OptionsError::EmptyDelimiter) => {}
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(parse("/:id", &options.parse).is_err());

    let mut compile_options = CompileOptions::default();
    compile_options.parse.delimiter = String::new();
    assert!(compile("/:id", &compile_options).is_err());

    let mut match_options = MatchOptions::default();
    match_options.regexp.parse.delimiter = String::new();
    assert!(match_path("/:id", &match_options).is_err());
}

#[test]
fn options_when_deserialized_from_json_then_fills_missing_fields() {
    let options: PathToRegexpOptions =
        serde_json::from_str(r#"{"delimiter": ".", "strict": true}"#)
            .expect("options should deserialize");
    assert_eq!(options.parse.delimiter, ".");
    assert!(options.strict);
    assert!(options.loose);
    assert!(options.end);

    let matching: MatchOptions =
        serde_json::from_str(r#"{"end": false, "sensitive": true}"#)
            .expect("options should deserialize");
    assert!(!matching.regexp.end);
    assert!(matching.regexp.sensitive);
    assert_eq!(matching.regexp.parse.delimiter, "/");
    assert!(matching.decode.is_some());

    let compile: CompileOptions =
        serde_json::from_str(r#"{"validate": false}"#).expect("options should deserialize");
    assert!(!compile.validate);
    assert!(compile.encode.is_some());
}

#[test]
fn options_when_serialized_then_omit_codecs() {
    let value = serde_json::to_value(MatchOptions::default()).expect("options should serialize");
    assert_eq!(value["delimiter"], "/");
    assert_eq!(value["loose"], true);
    assert!(value.get("decode").is_none());
    assert!(value.get("encode_path").is_none());
}
