use fancy_regex::{Captures, Regex};

use super::escape::{Stringify, escape};
use super::raw::keys_from_regex;
use super::source::to_regexp_sources;
use super::{PatternFlags, RegexError, RegexResult};
use crate::options::PathToRegexpOptions;
use crate::pattern::{Key, TokenData};

/// A compiled path expression together with the keys of its capture groups.
///
/// Capture group `i + 1` belongs to `keys()[i]`. Every search runs a fresh
/// scan, so one value can be shared across threads.
#[derive(Debug, Clone)]
pub struct PathRegex {
    regex: Regex,
    keys: Vec<Key>,
    flags: PatternFlags,
}

impl PathRegex {
    pub(crate) fn from_raw(regex: Regex) -> Self {
        let keys = keys_from_regex(regex.as_str());
        Self {
            regex,
            keys,
            flags: PatternFlags::RAW,
        }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    pub fn is_match(&self, input: &str) -> RegexResult<bool> {
        self.regex.is_match(input).map_err(RegexError::runtime)
    }

    pub fn captures<'t>(&self, input: &'t str) -> RegexResult<Option<Captures<'t>>> {
        self.regex.captures(input).map_err(RegexError::runtime)
    }

    pub fn into_parts(self) -> (Regex, Vec<Key>) {
        (self.regex, self.keys)
    }
}

/// Assembles the full expression for `data`.
#[tracing::instrument(level = "trace", skip(data, options), fields(tokens=data.tokens.len() as u64))]
pub fn tokens_to_regexp(data: &TokenData, options: &PathToRegexpOptions) -> RegexResult<PathRegex> {
    let flags = options.flags();
    let stringify = Stringify::new(&data.delimiter, options.loose);
    let mut keys = Vec::new();
    let sources = to_regexp_sources(data, &stringify, &mut keys, flags)?;

    let mut source = String::from(flags.inline_prefix());
    if options.start {
        source.push('^');
    }
    for fragment in &sources {
        source.push_str(fragment);
    }
    if options.trailing {
        source.push_str("(?:");
        source.push_str(&stringify.apply(&data.delimiter));
        source.push_str(")?");
    }
    if options.end {
        source.push('$');
    } else {
        source.push_str("(?=");
        source.push_str(&escape(&data.delimiter));
        source.push_str("|$)");
    }

    tracing::event!(
        tracing::Level::DEBUG,
        operation = "tokens_to_regexp",
        keys = keys.len() as u64,
        source = %source,
        "compiled path expression"
    );

    let regex = Regex::new(&source).map_err(|err| RegexError::Build {
        source_pattern: source.clone(),
        cause: err.to_string(),
    })?;

    Ok(PathRegex { regex, keys, flags })
}
