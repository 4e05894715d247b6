use fancy_regex::{Captures, Regex};

use crate::encoding::Codec;
use crate::pattern::Key;
use crate::regexp::{RegexError, RegexResult};
use crate::types::{ParamValue, Params};

/// Converts the capture groups of one match into decoded parameters.
/// Group `i + 1` belongs to `keys[i]`; groups that did not participate are
/// left out of the result.
pub(crate) fn collect_params(
    captures: &Captures<'_>,
    keys: &[Key],
    splitters: &[Option<Regex>],
    decode: Option<&Codec>,
) -> RegexResult<Params> {
    let mut params = Params::with_capacity(keys.len());

    for (i, key) in keys.iter().enumerate() {
        let Some(group) = captures.get(i + 1) else {
            continue;
        };
        let value = match splitters.get(i).and_then(Option::as_ref) {
            Some(splitter) => ParamValue::Multiple(
                split(splitter, group.as_str())?
                    .into_iter()
                    .map(|piece| decode_value(decode, piece))
                    .collect(),
            ),
            None => ParamValue::Single(decode_value(decode, group.as_str())),
        };
        params.insert(key.name.clone(), value);
    }

    Ok(params)
}

fn split<'t>(splitter: &Regex, value: &'t str) -> RegexResult<Vec<&'t str>> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for found in splitter.find_iter(value) {
        let found = found.map_err(RegexError::runtime)?;
        pieces.push(&value[last..found.start()]);
        last = found.end();
    }
    pieces.push(&value[last..]);
    Ok(pieces)
}

fn decode_value(decode: Option<&Codec>, value: &str) -> String {
    match decode {
        Some(codec) => codec.apply(value),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_collapses_runs_when_separator_is_loose() {
        let splitter = Regex::new("(?:/)+(?!/)").expect("valid splitter");
        assert_eq!(split(&splitter, "a//b/c").expect("splits"), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_without_separator_yields_whole_value() {
        let splitter = Regex::new("-").expect("valid splitter");
        assert_eq!(split(&splitter, "abc").expect("splits"), vec!["abc"]);
    }
}
