use crate::pattern::Key;

/// Infers keys for a pre-compiled expression by scanning its source for
/// capture groups. Named groups keep their name; plain groups are numbered
/// from 0. Escapes and character classes are skipped; nothing else of the
/// expression is interpreted.
pub(crate) fn keys_from_regex(source: &str) -> Vec<Key> {
    let chars: Vec<char> = source.chars().collect();
    let mut keys = Vec::new();
    let mut next_index = 0usize;
    let mut in_class = false;
    let mut i = 0usize;

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                i += 2;
                continue;
            }
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '(' if !in_class => {
                if chars.get(i + 1) == Some(&'?') {
                    if let Some(name) = group_name(&chars[i + 2..]) {
                        keys.push(Key::new(name));
                    }
                } else {
                    keys.push(Key::new(next_index.to_string()));
                    next_index += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    keys
}

/// Reads the name of `(?<name>` / `(?P<name>`; `rest` starts after `(?`.
fn group_name(rest: &[char]) -> Option<String> {
    let body = match rest {
        ['P', '<', body @ ..] => body,
        ['<', next, ..] if *next == '=' || *next == '!' => return None,
        ['<', body @ ..] => body,
        _ => return None,
    };
    let end = body.iter().position(|ch| *ch == '>')?;
    Some(body[..end].iter().collect())
}
