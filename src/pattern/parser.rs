use regex::escape;

use super::ast::{Key, Modifier, Token, TokenData};
use super::lexer::{LexToken, LexTokenKind, is_identifier_char, lex};
use super::{PatternError, PatternResult};
use crate::options::ParseOptions;

/// Parses `pattern` into [`TokenData`].
///
/// Literal text is passed through `options.encode_path`; the delimiter is
/// recorded on the result so later stages use the same one.
#[tracing::instrument(level = "trace", skip(options), fields(pattern=%pattern))]
pub fn parse_pattern(pattern: &str, options: &ParseOptions) -> PatternResult<TokenData> {
    let tokens = lex(pattern)?;
    let mut parser = PatternParser::new(tokens, options);
    parser.parse_sequence()?;

    tracing::event!(
        tracing::Level::TRACE,
        operation = "parse",
        tokens = parser.output.len() as u64,
        unnamed = parser.next_key as u64
    );

    Ok(TokenData::new(parser.output, options.delimiter.clone()))
}

pub(crate) fn wildcard_pattern(delimiter: &str) -> String {
    format!("(?:(?!{}).)+", escape(delimiter))
}

struct PatternParser<'a> {
    tokens: Vec<LexToken>,
    index: usize,
    options: &'a ParseOptions,
    next_key: usize,
    output: Vec<Token>,
}

impl<'a> PatternParser<'a> {
    fn new(tokens: Vec<LexToken>, options: &'a ParseOptions) -> Self {
        Self {
            tokens,
            index: 0,
            options,
            next_key: 0,
            output: Vec::new(),
        }
    }

    fn parse_sequence(&mut self) -> PatternResult<()> {
        loop {
            let text = self.text();
            if !text.is_empty() {
                let encoded = self.options.encode_path.apply(&text);
                self.output.push(Token::Text(encoded));
            }

            let name = self.try_consume(LexTokenKind::Name);
            let pattern = self.try_consume(LexTokenKind::Pattern);
            if name.is_some() || pattern.is_some() {
                self.parse_bare_parameter(name, pattern)?;
                continue;
            }

            if self.peek().kind == LexTokenKind::Asterisk {
                self.parse_wildcard();
                continue;
            }

            if self.try_consume(LexTokenKind::Open).is_some() {
                self.parse_group()?;
                continue;
            }

            self.consume(LexTokenKind::End)?;
            return Ok(());
        }
    }

    fn parse_bare_parameter(
        &mut self,
        name: Option<String>,
        pattern: Option<String>,
    ) -> PatternResult<()> {
        let name = match name {
            Some(name) => name,
            None => self.next_name(),
        };

        let next = self.peek();
        let modifier = match next.kind {
            LexTokenKind::Asterisk => {
                return Err(PatternError::UnexpectedAsteriskAfterParameter {
                    index: next.index,
                    name,
                });
            }
            LexTokenKind::Optional => Some(Modifier::Optional),
            LexTokenKind::Plus => Some(Modifier::OneOrMore),
            _ => None,
        };
        if modifier.is_some() {
            self.index += 1;
        }

        let separator = modifier
            .filter(Modifier::is_repeating)
            .map(|_| self.options.delimiter.clone());

        self.output.push(Token::Param(Key {
            pattern,
            modifier,
            separator,
            ..Key::new(name)
        }));
        Ok(())
    }

    fn parse_wildcard(&mut self) {
        self.index += 1;

        let mut name = String::new();
        while let Some(ch) = self.peek_identifier_char() {
            name.push(ch);
            self.index += 1;
        }
        if name.is_empty() {
            name = self.next_name();
        }

        let delimiter = self.options.delimiter.clone();
        self.output.push(Token::Param(Key {
            pattern: Some(wildcard_pattern(&delimiter)),
            modifier: Some(Modifier::ZeroOrMore),
            separator: Some(delimiter),
            ..Key::new(name)
        }));
    }

    fn parse_group(&mut self) -> PatternResult<()> {
        let prefix = self.text();
        let name = self.try_consume(LexTokenKind::Name);
        let pattern = self.try_consume(LexTokenKind::Pattern);
        let suffix = self.text();
        let explicit_separator = match self.try_consume(LexTokenKind::Semicolon) {
            Some(_) => Some(self.text()),
            None => None,
        };

        self.consume(LexTokenKind::Close)?;
        let modifier = self.modifier();

        let name = match name {
            Some(name) => name,
            None if pattern.is_some() => self.next_name(),
            None => String::new(),
        };

        let encode = &self.options.encode_path;
        let prefix = encode.apply(&prefix);
        let suffix = encode.apply(&suffix);
        let separator = match explicit_separator {
            Some(separator) => Some(encode.apply(&separator)),
            None if modifier.is_some_and(|m| m.is_repeating()) => {
                Some(format!("{suffix}{prefix}"))
            }
            None => None,
        };

        self.output.push(Token::Param(Key {
            name,
            prefix,
            suffix,
            pattern,
            modifier,
            separator,
        }));
        Ok(())
    }

    fn next_name(&mut self) -> String {
        let name = self.next_key.to_string();
        self.next_key += 1;
        name
    }

    fn text(&mut self) -> String {
        let mut text = String::new();
        while matches!(
            self.peek().kind,
            LexTokenKind::Char | LexTokenKind::Escaped
        ) {
            text.push_str(&self.tokens[self.index].value);
            self.index += 1;
        }
        text
    }

    fn modifier(&mut self) -> Option<Modifier> {
        let modifier = match self.peek().kind {
            LexTokenKind::Optional => Modifier::Optional,
            LexTokenKind::Asterisk => Modifier::ZeroOrMore,
            LexTokenKind::Plus => Modifier::OneOrMore,
            _ => return None,
        };
        self.index += 1;
        Some(modifier)
    }

    fn peek_identifier_char(&self) -> Option<char> {
        let token = self.peek();
        if token.kind != LexTokenKind::Char {
            return None;
        }
        token.value.chars().next().filter(|ch| is_identifier_char(*ch))
    }

    fn try_consume(&mut self, kind: LexTokenKind) -> Option<String> {
        if self.peek().kind != kind {
            return None;
        }
        let value = self.tokens[self.index].value.clone();
        self.index += 1;
        Some(value)
    }

    fn consume(&mut self, kind: LexTokenKind) -> PatternResult<String> {
        if let Some(value) = self.try_consume(kind) {
            return Ok(value);
        }
        let next = self.peek();
        Err(PatternError::UnexpectedToken {
            kind: next.kind,
            index: next.index,
            expected: kind,
        })
    }

    fn peek(&self) -> &LexToken {
        // the lexer always terminates the stream with `End`
        let last = self.tokens.len() - 1;
        &self.tokens[self.index.min(last)]
    }
}
