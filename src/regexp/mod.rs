mod compiled;
mod error;
mod escape;
mod flags;
mod raw;
mod source;

pub use compiled::{PathRegex, tokens_to_regexp};
pub use error::{RegexError, RegexResult};
pub use escape::escape;
pub use flags::PatternFlags;

pub(crate) use escape::Stringify;
pub(crate) use source::{anchored, default_pattern, to_regexp_sources};
