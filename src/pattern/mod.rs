mod ast;
mod error;
mod lexer;
mod parser;
mod printer;

pub use ast::{Key, Modifier, Token, TokenData};
pub use error::{PatternError, PatternResult};
pub use lexer::{LexToken, LexTokenKind, lex};
pub use parser::parse_pattern;
pub use printer::stringify;
