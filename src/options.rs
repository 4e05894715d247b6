use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encoding::Codec;
use crate::regexp::PatternFlags;

pub const DEFAULT_DELIMITER: &str = "/";

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_encode() -> Option<Codec> {
    Some(Codec::uri_component())
}

fn default_decode() -> Option<Codec> {
    Some(Codec::percent_decode())
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("delimiter must not be empty")]
    EmptyDelimiter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub delimiter: String,
    /// Applied to literal text (and group prefixes/suffixes) while parsing.
    #[serde(skip)]
    pub encode_path: Codec,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            encode_path: Codec::identity(),
        }
    }
}

impl ParseOptions {
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.delimiter.is_empty() {
            return Err(OptionsError::EmptyDelimiter);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    pub fn delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.options.delimiter = delimiter.into();
        self
    }

    pub fn encode_path(mut self, codec: Codec) -> Self {
        self.options.encode_path = codec;
        self
    }

    pub fn build(self) -> Result<ParseOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathToRegexpOptions {
    #[serde(flatten)]
    pub parse: ParseOptions,
    pub sensitive: bool,
    pub loose: bool,
    pub strict: bool,
    pub start: bool,
    pub end: bool,
    pub trailing: bool,
}

impl Default for PathToRegexpOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            sensitive: false,
            loose: true,
            strict: false,
            start: true,
            end: true,
            trailing: true,
        }
    }
}

impl PathToRegexpOptions {
    pub fn builder() -> PathToRegexpOptionsBuilder {
        PathToRegexpOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        self.parse.validate()
    }

    pub fn flags(&self) -> PatternFlags {
        let mut flags = PatternFlags::empty();
        flags.set(PatternFlags::SENSITIVE, self.sensitive);
        flags.set(PatternFlags::LOOSE, self.loose);
        flags.set(PatternFlags::STRICT, self.strict);
        flags.set(PatternFlags::START, self.start);
        flags.set(PatternFlags::END, self.end);
        flags.set(PatternFlags::TRAILING, self.trailing);
        flags
    }
}

#[derive(Debug, Default, Clone)]
pub struct PathToRegexpOptionsBuilder {
    options: PathToRegexpOptions,
}

impl PathToRegexpOptionsBuilder {
    pub fn delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.options.parse.delimiter = delimiter.into();
        self
    }

    pub fn encode_path(mut self, codec: Codec) -> Self {
        self.options.parse.encode_path = codec;
        self
    }

    pub fn sensitive(mut self, value: bool) -> Self {
        self.options.sensitive = value;
        self
    }

    pub fn loose(mut self, value: bool) -> Self {
        self.options.loose = value;
        self
    }

    pub fn strict(mut self, value: bool) -> Self {
        self.options.strict = value;
        self
    }

    pub fn start(mut self, value: bool) -> Self {
        self.options.start = value;
        self
    }

    pub fn end(mut self, value: bool) -> Self {
        self.options.end = value;
        self
    }

    pub fn trailing(mut self, value: bool) -> Self {
        self.options.trailing = value;
        self
    }

    pub fn build(self) -> Result<PathToRegexpOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    #[serde(flatten)]
    pub regexp: PathToRegexpOptions,
    /// `None` leaves captured values undecoded.
    #[serde(skip, default = "default_decode")]
    pub decode: Option<Codec>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            regexp: PathToRegexpOptions::default(),
            decode: default_decode(),
        }
    }
}

impl MatchOptions {
    pub fn builder() -> MatchOptionsBuilder {
        MatchOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        self.regexp.validate()
    }
}

#[derive(Debug, Default, Clone)]
pub struct MatchOptionsBuilder {
    options: MatchOptions,
}

impl MatchOptionsBuilder {
    pub fn regexp(mut self, regexp: PathToRegexpOptions) -> Self {
        self.options.regexp = regexp;
        self
    }

    pub fn delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.options.regexp.parse.delimiter = delimiter.into();
        self
    }

    pub fn encode_path(mut self, codec: Codec) -> Self {
        self.options.regexp.parse.encode_path = codec;
        self
    }

    pub fn sensitive(mut self, value: bool) -> Self {
        self.options.regexp.sensitive = value;
        self
    }

    pub fn loose(mut self, value: bool) -> Self {
        self.options.regexp.loose = value;
        self
    }

    pub fn strict(mut self, value: bool) -> Self {
        self.options.regexp.strict = value;
        self
    }

    pub fn start(mut self, value: bool) -> Self {
        self.options.regexp.start = value;
        self
    }

    pub fn end(mut self, value: bool) -> Self {
        self.options.regexp.end = value;
        self
    }

    pub fn trailing(mut self, value: bool) -> Self {
        self.options.regexp.trailing = value;
        self
    }

    pub fn decode(mut self, codec: Option<Codec>) -> Self {
        self.options.decode = codec;
        self
    }

    pub fn build(self) -> Result<MatchOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    #[serde(flatten)]
    pub parse: ParseOptions,
    pub sensitive: bool,
    pub loose: bool,
    pub strict: bool,
    pub validate: bool,
    /// `None` writes parameter values verbatim.
    #[serde(skip, default = "default_encode")]
    pub encode: Option<Codec>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            sensitive: false,
            loose: true,
            strict: false,
            validate: true,
            encode: default_encode(),
        }
    }
}

impl CompileOptions {
    pub fn builder() -> CompileOptionsBuilder {
        CompileOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        self.parse.validate()
    }

    pub fn flags(&self) -> PatternFlags {
        let mut flags = PatternFlags::START | PatternFlags::END;
        flags.set(PatternFlags::SENSITIVE, self.sensitive);
        flags.set(PatternFlags::LOOSE, self.loose);
        flags.set(PatternFlags::STRICT, self.strict);
        flags
    }
}

#[derive(Debug, Default, Clone)]
pub struct CompileOptionsBuilder {
    options: CompileOptions,
}

impl CompileOptionsBuilder {
    pub fn delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.options.parse.delimiter = delimiter.into();
        self
    }

    pub fn encode_path(mut self, codec: Codec) -> Self {
        self.options.parse.encode_path = codec;
        self
    }

    pub fn sensitive(mut self, value: bool) -> Self {
        self.options.sensitive = value;
        self
    }

    pub fn loose(mut self, value: bool) -> Self {
        self.options.loose = value;
        self
    }

    pub fn strict(mut self, value: bool) -> Self {
        self.options.strict = value;
        self
    }

    pub fn validate(mut self, value: bool) -> Self {
        self.options.validate = value;
        self
    }

    pub fn encode(mut self, codec: Option<Codec>) -> Self {
        self.options.encode = codec;
        self
    }

    pub fn build(self) -> Result<CompileOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}
