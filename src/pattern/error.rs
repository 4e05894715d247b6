use thiserror::Error;

use super::lexer::LexTokenKind;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unexpected end of pattern after escape character at {index}")]
    LoneEscapeCharacter { index: usize },
    #[error("missing parameter name at {index}")]
    MissingParameterName { index: usize },
    #[error("unterminated quote at {index}")]
    UnterminatedQuote { index: usize },
    #[error("Pattern cannot start with \"?\" at {index}")]
    PatternStartsWithQuestionMark { index: usize },
    #[error("Capturing groups are not allowed at {index}")]
    CapturingGroupNotAllowed { index: usize },
    #[error("unbalanced pattern at {index}")]
    UnbalancedPattern { index: usize },
    #[error("missing pattern at {index}")]
    MissingPattern { index: usize },
    #[error("unexpected {kind} at {index}, expected {expected}")]
    UnexpectedToken {
        kind: LexTokenKind,
        index: usize,
        expected: LexTokenKind,
    },
    #[error("unexpected * at {index}, you probably want `/*` or `{{/:{name}}}*`")]
    UnexpectedAsteriskAfterParameter { index: usize, name: String },
}

impl PatternError {
    pub fn index(&self) -> usize {
        match self {
            Self::LoneEscapeCharacter { index }
            | Self::MissingParameterName { index }
            | Self::UnterminatedQuote { index }
            | Self::PatternStartsWithQuestionMark { index }
            | Self::CapturingGroupNotAllowed { index }
            | Self::UnbalancedPattern { index }
            | Self::MissingPattern { index }
            | Self::UnexpectedToken { index, .. }
            | Self::UnexpectedAsteriskAfterParameter { index, .. } => *index,
        }
    }
}

pub type PatternResult<T> = Result<T, PatternError>;
