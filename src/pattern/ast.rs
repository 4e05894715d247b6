use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    #[serde(rename = "?")]
    Optional,
    #[serde(rename = "*")]
    ZeroOrMore,
    #[serde(rename = "+")]
    OneOrMore,
}

impl Modifier {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '?' => Some(Self::Optional),
            '*' => Some(Self::ZeroOrMore),
            '+' => Some(Self::OneOrMore),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optional => "?",
            Self::ZeroOrMore => "*",
            Self::OneOrMore => "+",
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional | Self::ZeroOrMore)
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Self::ZeroOrMore | Self::OneOrMore)
    }
}

/// Metadata for one parameter of a pattern.
///
/// A key with an empty `name` is a non-capturing group such as `{/static}?`:
/// it contributes text to the regex and the built path but never a capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub name: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub modifier: Option<Modifier>,
    #[serde(default)]
    pub separator: Option<String>,
}

impl Key {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            prefix: String::new(),
            suffix: String::new(),
            pattern: None,
            modifier: None,
            separator: None,
        }
    }

    pub fn is_capturing(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn is_optional(&self) -> bool {
        self.modifier.is_some_and(|m| m.is_optional())
    }

    pub fn is_repeating(&self) -> bool {
        self.modifier.is_some_and(|m| m.is_repeating())
    }

    /// Separator placed between repeated values. Falls back to
    /// `suffix + prefix` when none was recorded.
    pub fn separator(&self) -> String {
        match &self.separator {
            Some(separator) => separator.clone(),
            None => format!("{}{}", self.suffix, self.prefix),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    Text(String),
    Param(Key),
}

impl Token {
    pub fn as_key(&self) -> Option<&Key> {
        match self {
            Self::Param(key) => Some(key),
            Self::Text(_) => None,
        }
    }
}

/// Parsed form of a pattern, shared by the regex compiler, the path builder
/// and the matcher so all three agree on parameter order and naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    pub tokens: Vec<Token>,
    pub delimiter: String,
}

impl TokenData {
    pub fn new(tokens: Vec<Token>, delimiter: String) -> Self {
        Self { tokens, delimiter }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Capturing keys in capture-group order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.tokens
            .iter()
            .filter_map(Token::as_key)
            .filter(|key| key.is_capturing())
    }
}
