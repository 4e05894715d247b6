use thiserror::Error;

use crate::regexp::RegexError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("missing required parameter \"{name}\"")]
    MissingParameter { name: String },
    #[error("expected \"{name}\" to be a single value, got a sequence")]
    ExpectedSingle { name: String },
    #[error("expected \"{name}\" to be a sequence, got a single value")]
    ExpectedSequence { name: String },
    #[error("expected \"{name}\" to not be empty")]
    EmptySequence { name: String },
    #[error("value for \"{name}\" does not match pattern: {value:?}")]
    InvalidValue { name: String, value: String },
    #[error("value \"{name}/{index}\" does not match pattern: {value:?}")]
    InvalidElement {
        name: String,
        index: usize,
        value: String,
    },
    #[error("cannot build a path from a pre-compiled regular expression")]
    RawRegexUnsupported,
    #[error(transparent)]
    Regex(#[from] RegexError),
}

pub type BuildResult<T> = Result<T, BuildError>;
