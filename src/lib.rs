mod builder;
mod encoding;
pub mod errors;
mod matcher;
pub mod options;
mod pattern;
mod regexp;
pub mod types;

pub use builder::{BuildError, BuildResult, PathBuilder};
pub use encoding::{Codec, decode_uri_component, encode_uri_component};
pub use errors::{PathPatternError, PathPatternResult};
pub use matcher::Matcher;
pub use options::{
    CompileOptions, DEFAULT_DELIMITER, MatchOptions, OptionsError, ParseOptions,
    PathToRegexpOptions,
};
pub use pattern::{
    Key, LexToken, LexTokenKind, Modifier, PatternError, PatternResult, Token, TokenData, lex,
    stringify,
};
pub use regexp::{PathRegex, PatternFlags, RegexError, RegexResult, escape, tokens_to_regexp};
pub use types::{MatchResult, ParamValue, Params};

use fancy_regex::Regex;

/// Anything a path operation accepts: pattern text, already parsed tokens,
/// or a pre-compiled expression.
#[derive(Debug, Clone)]
pub enum PathInput {
    Pattern(String),
    Data(TokenData),
    Regex(Regex),
}

impl From<&str> for PathInput {
    fn from(pattern: &str) -> Self {
        Self::Pattern(pattern.to_string())
    }
}

impl From<String> for PathInput {
    fn from(pattern: String) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<TokenData> for PathInput {
    fn from(data: TokenData) -> Self {
        Self::Data(data)
    }
}

impl From<&TokenData> for PathInput {
    fn from(data: &TokenData) -> Self {
        Self::Data(data.clone())
    }
}

impl From<Regex> for PathInput {
    fn from(regex: Regex) -> Self {
        Self::Regex(regex)
    }
}

enum Resolved {
    Tokens(TokenData),
    Raw(Regex),
}

impl PathInput {
    fn resolve(self, options: &ParseOptions) -> PathPatternResult<Resolved> {
        match self {
            Self::Pattern(pattern) => Ok(Resolved::Tokens(pattern::parse_pattern(
                &pattern, options,
            )?)),
            Self::Data(data) => {
                if data.delimiter.is_empty() {
                    return Err(OptionsError::EmptyDelimiter.into());
                }
                Ok(Resolved::Tokens(data))
            }
            Self::Regex(regex) => Ok(Resolved::Raw(regex)),
        }
    }
}

/// Parses a pattern into its token sequence.
#[tracing::instrument(level = "trace", skip(options), fields(pattern=%pattern))]
pub fn parse(pattern: &str, options: &ParseOptions) -> PathPatternResult<TokenData> {
    options.validate()?;
    Ok(pattern::parse_pattern(pattern, options)?)
}

/// Compiles a path into a regular expression plus the keys of its capture
/// groups. A pre-compiled expression is passed through and its keys are
/// inferred from its capture groups.
#[tracing::instrument(level = "trace", skip(path, options))]
pub fn path_to_regexp<P: Into<PathInput>>(
    path: P,
    options: &PathToRegexpOptions,
) -> PathPatternResult<PathRegex> {
    options.validate()?;
    match path.into().resolve(&options.parse)? {
        Resolved::Tokens(data) => Ok(tokens_to_regexp(&data, options)?),
        Resolved::Raw(regex) => Ok(PathRegex::from_raw(regex)),
    }
}

/// Returns a builder that turns parameter values into a path.
#[tracing::instrument(level = "trace", skip(path, options))]
pub fn compile<P: Into<PathInput>>(
    path: P,
    options: &CompileOptions,
) -> PathPatternResult<PathBuilder> {
    options.validate()?;
    match path.into().resolve(&options.parse)? {
        Resolved::Tokens(data) => Ok(PathBuilder::new(&data, options)?),
        Resolved::Raw(_) => Err(BuildError::RawRegexUnsupported.into()),
    }
}

/// Returns a matcher that extracts decoded parameters from concrete paths.
#[tracing::instrument(level = "trace", skip(path, options))]
pub fn match_path<P: Into<PathInput>>(
    path: P,
    options: &MatchOptions,
) -> PathPatternResult<Matcher> {
    options.validate()?;
    match path.into().resolve(&options.regexp.parse)? {
        Resolved::Tokens(data) => {
            let regex = tokens_to_regexp(&data, &options.regexp)?;
            Ok(Matcher::new(regex, &data.delimiter, options)?)
        }
        Resolved::Raw(regex) => Ok(Matcher::new(
            PathRegex::from_raw(regex),
            &options.regexp.parse.delimiter,
            options,
        )?),
    }
}
