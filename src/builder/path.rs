use fancy_regex::Regex;

use super::{BuildError, BuildResult};
use crate::encoding::Codec;
use crate::options::CompileOptions;
use crate::pattern::{Key, Token, TokenData};
use crate::regexp::{RegexError, RegexResult, Stringify, anchored, to_regexp_sources};
use crate::types::{ParamValue, Params};

/// Produces concrete paths from parameter values.
///
/// Every value is encoded, then (unless validation is disabled) checked
/// against the same expression a matcher would use, so a built path is
/// always matched back by a matcher compiled with equivalent options.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    segments: Vec<Segment>,
    encode: Option<Codec>,
}

#[derive(Debug, Clone)]
enum Segment {
    Text(String),
    Param(ParamSegment),
}

#[derive(Debug, Clone)]
struct ParamSegment {
    key: Key,
    validator: Option<Regex>,
}

impl PathBuilder {
    #[tracing::instrument(level = "trace", skip(data, options), fields(tokens=data.tokens.len() as u64))]
    pub(crate) fn new(data: &TokenData, options: &CompileOptions) -> RegexResult<Self> {
        let flags = options.flags();
        let stringify = Stringify::new(&data.delimiter, options.loose);
        let mut keys = Vec::new();
        let sources = to_regexp_sources(data, &stringify, &mut keys, flags)?;

        let mut segments = Vec::with_capacity(data.tokens.len());
        for (token, source) in data.tokens.iter().zip(&sources) {
            let key = match token {
                Token::Text(text) => {
                    segments.push(Segment::Text(text.clone()));
                    continue;
                }
                Token::Param(key) => key,
            };

            let validator = if options.validate && key.is_capturing() {
                let expression = if key.is_repeating() {
                    element_source(key, &data.delimiter)
                } else {
                    source.clone()
                };
                let regex = anchored(&expression, flags).map_err(|err| RegexError::Build {
                    source_pattern: expression.clone(),
                    cause: err.to_string(),
                })?;
                Some(regex)
            } else {
                None
            };

            segments.push(Segment::Param(ParamSegment {
                key: key.clone(),
                validator,
            }));
        }

        tracing::event!(
            tracing::Level::DEBUG,
            operation = "compile",
            segments = segments.len() as u64,
            validate = options.validate,
            "path builder ready"
        );

        Ok(Self {
            segments,
            encode: options.encode.clone(),
        })
    }

    pub fn build(&self, params: &Params) -> BuildResult<String> {
        let mut path = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => path.push_str(text),
                Segment::Param(param) => {
                    let value = params.get(&param.key.name);
                    param.write(value, self.encode.as_ref(), &mut path)?;
                }
            }
        }
        Ok(path)
    }

    /// Builds a path for a pattern whose parameters are all optional.
    pub fn build_empty(&self) -> BuildResult<String> {
        self.build(&Params::new())
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(param) if param.key.is_capturing() => Some(&param.key),
            _ => None,
        })
    }
}

impl ParamSegment {
    fn write(
        &self,
        value: Option<&ParamValue>,
        encode: Option<&Codec>,
        out: &mut String,
    ) -> BuildResult<()> {
        let key = &self.key;
        if !key.is_capturing() {
            if !key.is_optional() {
                out.push_str(&key.prefix);
                out.push_str(&key.suffix);
            }
            return Ok(());
        }

        if key.is_repeating() {
            self.write_sequence(value, encode, out)
        } else {
            self.write_single(value, encode, out)
        }
    }

    fn write_single(
        &self,
        value: Option<&ParamValue>,
        encode: Option<&Codec>,
        out: &mut String,
    ) -> BuildResult<()> {
        let key = &self.key;
        let value = match value {
            None if key.is_optional() => return Ok(()),
            None => return Err(self.missing()),
            Some(ParamValue::Multiple(_)) => {
                return Err(BuildError::ExpectedSingle {
                    name: key.name.clone(),
                });
            }
            Some(ParamValue::Single(value)) => value,
        };

        let built = format!("{}{}{}", key.prefix, encode_value(encode, value), key.suffix);
        if !self.accepts(&built)? {
            return Err(BuildError::InvalidValue {
                name: key.name.clone(),
                value: value.clone(),
            });
        }
        out.push_str(&built);
        Ok(())
    }

    fn write_sequence(
        &self,
        value: Option<&ParamValue>,
        encode: Option<&Codec>,
        out: &mut String,
    ) -> BuildResult<()> {
        let key = &self.key;
        let values = match value {
            None if key.is_optional() => return Ok(()),
            None => return Err(self.missing()),
            Some(ParamValue::Single(_)) => {
                return Err(BuildError::ExpectedSequence {
                    name: key.name.clone(),
                });
            }
            Some(ParamValue::Multiple(values)) => values,
        };

        if values.is_empty() {
            if key.is_optional() {
                return Ok(());
            }
            return Err(BuildError::EmptySequence {
                name: key.name.clone(),
            });
        }

        let separator = key.separator();
        let mut joined = String::new();
        for (index, value) in values.iter().enumerate() {
            let encoded = encode_value(encode, value);
            if !self.accepts(&encoded)? {
                return Err(BuildError::InvalidElement {
                    name: key.name.clone(),
                    index,
                    value: value.clone(),
                });
            }
            if index > 0 {
                joined.push_str(&separator);
            }
            joined.push_str(&encoded);
        }

        out.push_str(&key.prefix);
        out.push_str(&joined);
        out.push_str(&key.suffix);
        Ok(())
    }

    fn accepts(&self, candidate: &str) -> BuildResult<bool> {
        match &self.validator {
            Some(regex) => Ok(regex.is_match(candidate).map_err(RegexError::runtime)?),
            None => Ok(true),
        }
    }

    fn missing(&self) -> BuildError {
        BuildError::MissingParameter {
            name: self.key.name.clone(),
        }
    }
}

fn element_source(key: &Key, delimiter: &str) -> String {
    match &key.pattern {
        Some(pattern) => format!("(?:{pattern})"),
        None => crate::regexp::default_pattern(delimiter),
    }
}

fn encode_value(encode: Option<&Codec>, value: &str) -> String {
    match encode {
        Some(codec) => codec.apply(value),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;
    use crate::pattern::parse_pattern;

    fn builder(pattern: &str) -> PathBuilder {
        let data = parse_pattern(pattern, &ParseOptions::default()).expect("pattern should parse");
        PathBuilder::new(&data, &CompileOptions::default()).expect("builder should compile")
    }

    #[test]
    fn keys_lists_capturing_parameters_in_order() {
        let names: Vec<_> = builder("/:a{/x}/:b")
            .keys()
            .map(|key| key.name.clone())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
