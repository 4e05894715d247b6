use fancy_regex::Regex;

use super::params::collect_params;
use crate::encoding::Codec;
use crate::options::MatchOptions;
use crate::regexp::{PathRegex, RegexError, RegexResult, Stringify};
use crate::types::MatchResult;

/// Matches concrete paths against a compiled pattern.
///
/// The expression is compiled once; each call to [`Matcher::matches`] is an
/// independent scan, so a matcher can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: PathRegex,
    decode: Option<Codec>,
    splitters: Vec<Option<Regex>>,
}

impl Matcher {
    /// `delimiter` is the one the pattern was parsed with; repeating keys
    /// are split on their separator as the expression saw it.
    pub(crate) fn new(regex: PathRegex, delimiter: &str, options: &MatchOptions) -> RegexResult<Self> {
        let stringify = Stringify::new(delimiter, options.regexp.loose);
        let prefix = regex.flags().inline_prefix();

        let splitters = regex
            .keys()
            .iter()
            .map(|key| {
                if !key.is_repeating() {
                    return Ok(None);
                }
                let source = format!("{}{}", prefix, stringify.apply(&key.separator()));
                Regex::new(&source)
                    .map(Some)
                    .map_err(|err| RegexError::Build {
                        source_pattern: source.clone(),
                        cause: err.to_string(),
                    })
            })
            .collect::<RegexResult<Vec<_>>>()?;

        Ok(Self {
            regex,
            decode: options.decode.clone(),
            splitters,
        })
    }

    pub fn regex(&self) -> &PathRegex {
        &self.regex
    }

    /// Returns `Ok(None)` when `input` does not match. An error means the
    /// engine gave up (for example on its backtrack limit).
    #[tracing::instrument(level = "trace", skip(self), fields(input=%input))]
    pub fn matches(&self, input: &str) -> RegexResult<Option<MatchResult>> {
        let Some(captures) = self.regex.captures(input)? else {
            return Ok(None);
        };
        let Some(whole) = captures.get(0) else {
            return Ok(None);
        };

        let params = collect_params(
            &captures,
            self.regex.keys(),
            &self.splitters,
            self.decode.as_ref(),
        )?;

        tracing::event!(
            tracing::Level::TRACE,
            operation = "match",
            index = whole.start() as u64,
            params = params.len() as u64
        );

        Ok(Some(MatchResult {
            path: whole.as_str().to_string(),
            index: whole.start(),
            params,
        }))
    }
}
