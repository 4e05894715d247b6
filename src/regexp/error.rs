use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegexError {
    #[error("ambiguous pattern for \"{name}\": its pattern can match the text that precedes it")]
    AmbiguousPattern { name: String },
    #[error("ambiguous pattern for \"{name}\" separator: its pattern can match the separator")]
    AmbiguousSeparator { name: String },
    #[error("missing separator for repeated parameter \"{name}\"")]
    MissingSeparator { name: String },
    #[error("invalid pattern for \"{name}\": {cause}")]
    InvalidPattern { name: String, cause: String },
    #[error("generated expression '{source_pattern}' failed to compile: {cause}")]
    Build {
        source_pattern: String,
        cause: String,
    },
    #[error("regex engine failed while matching: {cause}")]
    Runtime { cause: String },
}

impl RegexError {
    pub(crate) fn runtime(err: fancy_regex::Error) -> Self {
        Self::Runtime {
            cause: err.to_string(),
        }
    }
}

pub type RegexResult<T> = Result<T, RegexError>;
