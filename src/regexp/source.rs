use fancy_regex::Regex;

use super::escape::{Stringify, escape};
use super::{PatternFlags, RegexError, RegexResult};
use crate::pattern::{Key, Modifier, Token, TokenData};

pub(crate) fn default_pattern(delimiter: &str) -> String {
    format!("(?:(?!{}).)+?", escape(delimiter))
}

/// Compiles `^source$` with the case flag from `flags`.
pub(crate) fn anchored(source: &str, flags: PatternFlags) -> Result<Regex, fancy_regex::Error> {
    Regex::new(&format!("{}^{}$", flags.inline_prefix(), source))
}

/// Builds one regex fragment per token of `data`, pushing every capturing
/// key onto `keys` in capture-group order.
///
/// Ambiguity checks are a conservative heuristic. A parameter directly
/// after a parameter whose boundary could not be proven (strict mode, or an
/// empty suffix) must not be able to match its own prefix, or the literal
/// text before it. In strict mode the suffix and separator are checked too.
/// Passing these checks does not prove the expression is free of
/// catastrophic backtracking.
#[tracing::instrument(level = "trace", skip(data, stringify, keys), fields(tokens=data.tokens.len() as u64))]
pub(crate) fn to_regexp_sources(
    data: &TokenData,
    stringify: &Stringify,
    keys: &mut Vec<Key>,
    flags: PatternFlags,
) -> RegexResult<Vec<String>> {
    let default = default_pattern(&data.delimiter);
    let strict = flags.contains(PatternFlags::STRICT);
    let mut backtrack = "";
    let mut safe = true;
    let mut sources = Vec::with_capacity(data.tokens.len());

    for token in &data.tokens {
        let key = match token {
            Token::Text(text) => {
                backtrack = text.as_str();
                sources.push(stringify.apply(text));
                continue;
            }
            Token::Param(key) => key,
        };

        let pre = stringify.apply(&key.prefix);
        let post = stringify.apply(&key.suffix);
        let modifier = key.modifier.map(|m| m.as_str()).unwrap_or("");

        if !key.is_capturing() {
            sources.push(format!("(?:{pre}{post}){modifier}"));
            continue;
        }

        let pattern = match &key.pattern {
            Some(pattern) => format!("(?:{pattern})"),
            None => default.clone(),
        };
        let checker = anchored(&pattern, flags).map_err(|err| RegexError::InvalidPattern {
            name: key.name.clone(),
            cause: err.to_string(),
        })?;

        if !safe {
            let context = if key.prefix.is_empty() {
                backtrack
            } else {
                key.prefix.as_str()
            };
            safe = cannot_match(&checker, context)?;
        }
        if !safe {
            return Err(RegexError::AmbiguousPattern {
                name: key.name.clone(),
            });
        }
        safe = !strict || cannot_match(&checker, &key.suffix)?;
        backtrack = "";

        keys.push(key.clone());

        if key.is_repeating() {
            let separator = key.separator();
            let sep = stringify.apply(&separator);
            if sep.is_empty() {
                return Err(RegexError::MissingSeparator {
                    name: key.name.clone(),
                });
            }

            if !safe {
                safe = cannot_match(&checker, &separator)?;
            }
            if !safe {
                return Err(RegexError::AmbiguousSeparator {
                    name: key.name.clone(),
                });
            }
            safe = !strict;

            let optional = if key.modifier == Some(Modifier::ZeroOrMore) {
                "?"
            } else {
                ""
            };
            sources.push(format!(
                "(?:{pre}({pattern}(?:{sep}{pattern})*){post}){optional}"
            ));
        } else {
            sources.push(format!("(?:{pre}({pattern}){post}){modifier}"));
        }
    }

    Ok(sources)
}

/// `true` when `value` is non-empty and `checker` rejects it; an empty
/// value gives no boundary and counts as unsafe.
fn cannot_match(checker: &Regex, value: &str) -> RegexResult<bool> {
    if value.is_empty() {
        return Ok(false);
    }
    let matched = checker.is_match(value).map_err(RegexError::runtime)?;
    Ok(!matched)
}
