use std::fmt;

use super::{PatternError, PatternResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexTokenKind {
    Open,
    Close,
    Optional,
    Asterisk,
    Plus,
    Semicolon,
    Bang,
    At,
    Comma,
    Name,
    Pattern,
    Char,
    Escaped,
    End,
}

impl LexTokenKind {
    fn from_simple(ch: char) -> Option<Self> {
        match ch {
            '{' => Some(Self::Open),
            '}' => Some(Self::Close),
            '?' => Some(Self::Optional),
            '*' => Some(Self::Asterisk),
            '+' => Some(Self::Plus),
            ';' => Some(Self::Semicolon),
            '!' => Some(Self::Bang),
            '@' => Some(Self::At),
            ',' => Some(Self::Comma),
            _ => None,
        }
    }
}

impl fmt::Display for LexTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Open => "{",
            Self::Close => "}",
            Self::Optional => "?",
            Self::Asterisk => "*",
            Self::Plus => "+",
            Self::Semicolon => ";",
            Self::Bang => "!",
            Self::At => "@",
            Self::Comma => ",",
            Self::Name => "NAME",
            Self::Pattern => "PATTERN",
            Self::Char => "CHAR",
            Self::Escaped => "ESCAPED",
            Self::End => "END",
        };
        f.write_str(label)
    }
}

/// One lexical unit of a pattern. `index` is the character offset of the
/// token in the source and is only used for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexToken {
    pub kind: LexTokenKind,
    pub index: usize,
    pub value: String,
}

pub(crate) fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[tracing::instrument(level = "trace", fields(pattern=%pattern))]
pub fn lex(pattern: &str) -> PatternResult<Vec<LexToken>> {
    let mut lexer = Lexer::new(pattern);
    lexer.run()?;
    tracing::event!(
        tracing::Level::TRACE,
        operation = "lex",
        tokens = lexer.tokens.len() as u64
    );
    Ok(lexer.tokens)
}

struct Lexer {
    chars: Vec<char>,
    index: usize,
    tokens: Vec<LexToken>,
}

impl Lexer {
    fn new(pattern: &str) -> Self {
        let chars: Vec<char> = pattern.chars().collect();
        Self {
            tokens: Vec::with_capacity(chars.len() + 1),
            chars,
            index: 0,
        }
    }

    fn run(&mut self) -> PatternResult<()> {
        while let Some(ch) = self.peek() {
            if let Some(kind) = LexTokenKind::from_simple(ch) {
                self.push(kind, self.index, ch.to_string());
                self.index += 1;
                continue;
            }

            match ch {
                '\\' => self.lex_escape()?,
                ':' => self.lex_name()?,
                '(' => self.lex_pattern()?,
                _ => {
                    self.push(LexTokenKind::Char, self.index, ch.to_string());
                    self.index += 1;
                }
            }
        }

        self.push(LexTokenKind::End, self.chars.len(), String::new());
        Ok(())
    }

    fn lex_escape(&mut self) -> PatternResult<()> {
        let start = self.index;
        self.index += 1;
        let escaped = self
            .next()
            .ok_or(PatternError::LoneEscapeCharacter { index: start })?;
        self.push(LexTokenKind::Escaped, start, escaped.to_string());
        Ok(())
    }

    fn lex_name(&mut self) -> PatternResult<()> {
        let start = self.index;
        self.index += 1;

        let name = if self.peek() == Some('"') {
            self.read_quoted_name()?
        } else {
            let mut name = String::new();
            while let Some(ch) = self.peek() {
                if !is_identifier_char(ch) {
                    break;
                }
                name.push(ch);
                self.index += 1;
            }
            name
        };

        if name.is_empty() {
            return Err(PatternError::MissingParameterName { index: start });
        }

        self.push(LexTokenKind::Name, start, name);
        Ok(())
    }

    fn read_quoted_name(&mut self) -> PatternResult<String> {
        let quote = self.index;
        self.index += 1;
        let mut name = String::new();

        loop {
            match self.next() {
                Some('"') => return Ok(name),
                Some('\\') => match self.next() {
                    Some(ch) => name.push(ch),
                    None => return Err(PatternError::UnterminatedQuote { index: quote }),
                },
                Some(ch) => name.push(ch),
                None => return Err(PatternError::UnterminatedQuote { index: quote }),
            }
        }
    }

    fn lex_pattern(&mut self) -> PatternResult<()> {
        let start = self.index;
        self.index += 1;

        if self.peek() == Some('?') {
            return Err(PatternError::PatternStartsWithQuestionMark { index: self.index });
        }

        let mut depth = 1usize;
        let mut pattern = String::new();

        while let Some(ch) = self.peek() {
            match ch {
                '\\' => {
                    pattern.push(ch);
                    self.index += 1;
                    if let Some(escaped) = self.next() {
                        pattern.push(escaped);
                    }
                    continue;
                }
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        self.index += 1;
                        break;
                    }
                }
                '(' => {
                    depth += 1;
                    if self.opens_capturing_group() {
                        return Err(PatternError::CapturingGroupNotAllowed { index: self.index });
                    }
                }
                _ => {}
            }

            pattern.push(ch);
            self.index += 1;
        }

        if depth > 0 {
            return Err(PatternError::UnbalancedPattern { index: start });
        }

        if pattern.is_empty() {
            return Err(PatternError::MissingPattern { index: start });
        }

        self.push(LexTokenKind::Pattern, start, pattern);
        Ok(())
    }

    /// `true` for `(`, `(?<name>` and `(?P<name>`; lookbehinds stay allowed.
    fn opens_capturing_group(&self) -> bool {
        match (self.peek_at(1), self.peek_at(2), self.peek_at(3)) {
            (Some('?'), Some('<'), Some('=' | '!')) => false,
            (Some('?'), Some('<'), _) => true,
            (Some('?'), Some('P'), Some('<')) => true,
            (Some('?'), _, _) => false,
            _ => true,
        }
    }

    fn push(&mut self, kind: LexTokenKind, index: usize, value: String) {
        self.tokens.push(LexToken { kind, index, value });
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.index += 1;
        }
        ch
    }
}
