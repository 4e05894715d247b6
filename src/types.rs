use hashbrown::HashMap as FastHashMap;
use serde::{Deserialize, Serialize};

/// Value of one parameter: a scalar for plain parameters, a sequence for
/// parameters with a `*` or `+` modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ParamValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    pub fn as_multiple(&self) -> Option<&[String]> {
        match self {
            Self::Multiple(values) => Some(values),
            Self::Single(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl<T: Into<String>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::Multiple(values.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(values: &[&str]) -> Self {
        Self::Multiple(values.iter().map(|value| value.to_string()).collect())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Single(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);

pub type Params = FastHashMap<String, ParamValue>;

/// A successful match: the matched substring, its byte offset in the input
/// and the decoded parameters. Unmatched optional parameters are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub path: String,
    pub index: usize,
    pub params: Params,
}

impl MatchResult {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }
}
