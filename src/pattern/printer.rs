use super::ast::{Key, Modifier, Token, TokenData};
use super::lexer::is_identifier_char;
use super::parser::wildcard_pattern;

const SPECIAL_CHARS: &[char] = &[
    '{', '}', '(', ')', '+', '?', '!', ':', '*', ';', '@', ',', '\\',
];

/// Renders `data` back into pattern source text.
///
/// Parsing the output with the same delimiter yields `data` again.
pub fn stringify(data: &TokenData) -> String {
    let mut printer = Printer {
        delimiter: &data.delimiter,
        out: String::new(),
        next_key: 0,
        open_name: false,
    };
    for token in &data.tokens {
        match token {
            Token::Text(text) => printer.text(text),
            Token::Param(key) => printer.param(key),
        }
    }
    printer.out
}

struct Printer<'a> {
    delimiter: &'a str,
    out: String,
    next_key: usize,
    // last output was an unquoted name that following identifier chars would extend
    open_name: bool,
}

impl Printer<'_> {
    fn text(&mut self, text: &str) {
        let guard = self.open_name;
        self.push_escaped(text, guard);
        self.open_name = false;
    }

    fn param(&mut self, key: &Key) {
        if self.is_wildcard(key) && (self.is_synthesized(key) || is_plain_name(&key.name)) {
            self.out.push('*');
            if self.is_synthesized(key) {
                self.next_key += 1;
            } else {
                self.out.push_str(&key.name);
            }
            self.open_name = true;
            return;
        }

        if self.is_bare(key) {
            self.name_and_pattern(key);
            if let Some(modifier) = key.modifier {
                self.out.push_str(modifier.as_str());
                self.open_name = false;
            }
            return;
        }

        self.out.push('{');
        self.push_escaped(&key.prefix, false);
        let named = key.is_capturing() || key.pattern.is_some();
        if named {
            self.name_and_pattern(key);
        }
        self.push_escaped(&key.suffix, named && self.open_name);
        if let Some(separator) = self.explicit_separator(key) {
            self.out.push(';');
            self.push_escaped(&separator, false);
        }
        self.out.push('}');
        if let Some(modifier) = key.modifier {
            self.out.push_str(modifier.as_str());
        }
        self.open_name = false;
    }

    fn name_and_pattern(&mut self, key: &Key) {
        let omit_name = key.pattern.is_some() && self.is_synthesized(key);
        if omit_name {
            self.next_key += 1;
        } else {
            self.out.push(':');
            if is_plain_name(&key.name) {
                self.out.push_str(&key.name);
            } else {
                self.push_quoted(&key.name);
            }
        }

        match &key.pattern {
            Some(pattern) => {
                self.out.push('(');
                self.out.push_str(pattern);
                self.out.push(')');
                self.open_name = false;
            }
            None => self.open_name = is_plain_name(&key.name),
        }
    }

    fn is_synthesized(&self, key: &Key) -> bool {
        key.name == self.next_key.to_string()
    }

    fn is_wildcard(&self, key: &Key) -> bool {
        key.prefix.is_empty()
            && key.suffix.is_empty()
            && key.modifier == Some(Modifier::ZeroOrMore)
            && key.separator.as_deref() == Some(self.delimiter)
            && key.pattern.as_deref() == Some(wildcard_pattern(self.delimiter).as_str())
    }

    fn is_bare(&self, key: &Key) -> bool {
        if !key.is_capturing() || !key.prefix.is_empty() || !key.suffix.is_empty() {
            return false;
        }
        // an unnamed pattern right after an open name would be read as its pattern
        if self.open_name && key.pattern.is_some() && self.is_synthesized(key) {
            return false;
        }
        match key.modifier {
            None | Some(Modifier::Optional) => key.separator.is_none(),
            Some(Modifier::OneOrMore) => key.separator.as_deref() == Some(self.delimiter),
            Some(Modifier::ZeroOrMore) => false,
        }
    }

    fn explicit_separator(&self, key: &Key) -> Option<String> {
        let derived = key
            .is_repeating()
            .then(|| format!("{}{}", key.suffix, key.prefix));
        if key.separator == derived {
            None
        } else {
            key.separator.clone()
        }
    }

    fn push_escaped(&mut self, text: &str, guard_identifier: bool) {
        for (i, ch) in text.chars().enumerate() {
            let extends_name = i == 0 && guard_identifier && is_identifier_char(ch);
            if extends_name || SPECIAL_CHARS.contains(&ch) {
                self.out.push('\\');
            }
            self.out.push(ch);
        }
    }

    fn push_quoted(&mut self, name: &str) {
        self.out.push('"');
        for ch in name.chars() {
            if ch == '"' || ch == '\\' {
                self.out.push('\\');
            }
            self.out.push(ch);
        }
        self.out.push('"');
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_identifier_char)
}
