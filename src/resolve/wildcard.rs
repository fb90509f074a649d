// wildcard.rs - Shell-style name matching for wildcard tokens
//
// Every pattern is accepted: runs of `*` act as one `*`, an unclosed `[` is a
// literal `[`, and a class whose ranges are all reversed matches nothing.

use regex::Regex;

use crate::error::PackError;

/// Compiled form of one wildcard basename such as `*.h` or `[a-c]?.c`
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
    regex: Regex,
}

impl WildcardMatcher {
    pub fn new(pattern: &str) -> Result<Self, PackError> {
        let regex = Regex::new(&translate(pattern)).map_err(|source| PackError::Wildcard {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Case-sensitive match of a whole directory entry name
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Translate a wildcard into an anchored regex.
///
/// `*` is any run of characters, `?` any one character, `[...]` a class with
/// `!` negation and `a-z` ranges. Everything else is literal.
pub fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from("(?s)^");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.push_str(&translate_class(&chars[i..end]));
                    i = end + 1;
                }
                None => out.push_str(r"\["),
            },
            other => out.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }

    out.push('$');
    out
}

/// Index of the `]` closing a class whose body starts at `start`.
///
/// A `]` right after the opening bracket (or after `[!`) is a member.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    (j..chars.len()).find(|&k| chars[k] == ']')
}

fn translate_class(body: &[char]) -> String {
    let (negated, members) = match body.first() {
        Some('!') => (true, &body[1..]),
        _ => (false, body),
    };

    let mut class = String::new();
    let mut p = 0;
    while p < members.len() {
        if p + 2 < members.len() && members[p + 1] == '-' {
            let (lo, hi) = (members[p], members[p + 2]);
            // Reversed ranges are dropped
            if lo <= hi {
                class.push_str(&escape_char(lo));
                class.push('-');
                class.push_str(&escape_char(hi));
            }
            p += 3;
        } else {
            class.push_str(&escape_char(members[p]));
            p += 1;
        }
    }

    match (negated, class.is_empty()) {
        (true, true) => ".".to_string(),
        (false, true) => r"[^\s\S]".to_string(),
        (true, false) => format!("[^{}]", class),
        (false, false) => format!("[{}]", class),
    }
}

/// Escape a class member so `[`, `]`, `^`, `-`, `&` and `~` stay literal
fn escape_char(c: char) -> String {
    if matches!(c, '\\' | '[' | ']' | '^' | '-' | '&' | '~') {
        format!("\\{}", c)
    } else {
        c.to_string()
    }
}
