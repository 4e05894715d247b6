use memchr::memmem;

pub use regex::escape;

/// Turns literal path text into regex source.
///
/// In loose mode each run of delimiters becomes `(?:D)+(?!D)`, so `//` in an
/// input is accepted wherever the pattern has a single `/`.
#[derive(Debug, Clone)]
pub(crate) struct Stringify {
    delimiter: String,
    escaped_delimiter: String,
    loose: bool,
}

impl Stringify {
    pub(crate) fn new(delimiter: &str, loose: bool) -> Self {
        Self {
            delimiter: delimiter.to_string(),
            escaped_delimiter: escape(delimiter),
            loose,
        }
    }

    pub(crate) fn apply(&self, value: &str) -> String {
        if !self.loose || self.delimiter.is_empty() {
            return escape(value);
        }

        let mut out = String::with_capacity(value.len() * 2);
        let mut last = 0usize;
        let mut in_run = false;

        for pos in memmem::find_iter(value.as_bytes(), self.delimiter.as_bytes()) {
            if pos < last {
                continue;
            }
            if pos > last {
                out.push_str(&escape(&value[last..pos]));
                in_run = false;
            }
            if !in_run {
                out.push_str("(?:");
                out.push_str(&self.escaped_delimiter);
                out.push_str(")+(?!");
                out.push_str(&self.escaped_delimiter);
                out.push(')');
                in_run = true;
            }
            last = pos + self.delimiter.len();
        }

        out.push_str(&escape(&value[last..]));
        out
    }
}
