use thiserror::Error;

use crate::builder::BuildError;
use crate::options::OptionsError;
use crate::pattern::PatternError;
use crate::regexp::RegexError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathPatternError {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Regex(#[from] RegexError),
    #[error(transparent)]
    Build(#[from] BuildError),
}

pub type PathPatternResult<T> = Result<T, PathPatternError>;
