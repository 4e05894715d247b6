use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::fmt;
use std::sync::Arc;

/// Characters escaped by the default value encoder. Mirrors the set left
/// untouched by `encodeURIComponent`: alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

type CodecFn = dyn Fn(&str) -> String + Send + Sync;

/// A string transform used to encode parameter values, decode captures or
/// rewrite literal path text.
#[derive(Clone)]
pub struct Codec {
    label: &'static str,
    func: Arc<CodecFn>,
}

impl Codec {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            label: "custom",
            func: Arc::new(func),
        }
    }

    pub fn identity() -> Self {
        Self {
            label: "identity",
            func: Arc::new(|value: &str| value.to_string()),
        }
    }

    pub fn uri_component() -> Self {
        Self {
            label: "uri_component",
            func: Arc::new(encode_uri_component),
        }
    }

    pub fn percent_decode() -> Self {
        Self {
            label: "percent_decode",
            func: Arc::new(decode_uri_component),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn apply(&self, value: &str) -> String {
        (self.func)(value)
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Codec").field(&self.label).finish()
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::identity()
    }
}

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Percent-decodes `value`. Invalid UTF-8 produced by decoding is replaced
/// rather than rejected, and malformed escapes are kept verbatim.
pub fn decode_uri_component(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}
