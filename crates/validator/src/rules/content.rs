//! Content rules
//!
//! Rules checking what a string says: a mailbox, a number.

use std::sync::LazyLock;

use crate::foundation::{FieldValue, ValidationError};

/// `dot-atom-text`: atoms of `atext` joined by single dots.
static DOT_ATOM_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .unwrap()
});

/// Returns true if `input` is an RFC 5322 mailbox.
///
/// Accepts an `addr-spec` (`local@domain`) or a `name-addr`
/// (`Display Name <local@domain>`). The local part is a dot-atom or a
/// quoted string, the domain a dot-atom or a `[literal]`. Comments are
/// allowed anywhere outside quoted strings. Group syntax is not.
#[must_use]
pub fn is_mailbox(input: &str) -> bool {
    let Some(uncommented) = strip_comments(input) else {
        return false;
    };
    let mailbox = uncommented.trim();

    if let Some(rest) = mailbox.strip_suffix('>') {
        return match unquoted(rest, '<').next() {
            Some(open) => is_phrase(&rest[..open]) && is_addr_spec(&rest[open + 1..]),
            None => false,
        };
    }

    is_addr_spec(mailbox)
}

fn is_addr_spec(addr: &str) -> bool {
    let Some(at) = unquoted(addr, '@').last() else {
        return false;
    };
    let (local, domain) = (addr[..at].trim(), addr[at + 1..].trim());

    let local_ok = if local.starts_with('"') {
        is_quoted_string(local)
    } else {
        DOT_ATOM_REGEX.is_match(local)
    };

    let domain_ok = match domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
        Some(literal) => {
            !literal.trim().is_empty()
                && literal
                    .chars()
                    .all(|c| c == ' ' || (c.is_ascii_graphic() && !matches!(c, '[' | ']' | '\\')))
        }
        None => DOT_ATOM_REGEX.is_match(domain),
    };

    local_ok && domain_ok
}

/// `phrase`: words that are atoms or quoted strings. Dots are allowed in
/// atoms, as in `John Q. Public`. An empty phrase is accepted.
fn is_phrase(phrase: &str) -> bool {
    let mut rest = phrase.trim();

    while !rest.is_empty() {
        let word = if rest.starts_with('"') {
            quoted_len(rest)
        } else {
            let end = rest
                .find(|c: char| !is_atext(c) && c != '.')
                .unwrap_or(rest.len());
            (end > 0).then_some(end)
        };

        let Some(len) = word else {
            return false;
        };
        rest = rest[len..].trim_start();
    }

    true
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c) || !c.is_ascii()
}

fn is_quoted_string(s: &str) -> bool {
    quoted_len(s) == Some(s.len()) && !s.chars().any(|c| c.is_control() && c != '\t')
}

/// Byte length of the quoted string `s` starts with, closing quote included.
fn quoted_len(s: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// Byte offsets of `target` outside quoted strings.
fn unquoted(s: &str, target: char) -> impl Iterator<Item = usize> + '_ {
    let mut quoted = false;
    let mut escaped = false;
    s.char_indices().filter_map(move |(i, c)| {
        if escaped {
            escaped = false;
            return None;
        }
        match c {
            '\\' if quoted => escaped = true,
            '"' => quoted = !quoted,
            c if c == target && !quoted => return Some(i),
            _ => {}
        }
        None
    })
}

/// Replaces every comment with a space. `None` when parentheses or quotes
/// are unbalanced.
fn strip_comments(input: &str) -> Option<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    let mut depth = 0_usize;
    let mut quoted = false;

    while let Some(c) = chars.next() {
        if depth > 0 {
            match c {
                '\\' => {
                    chars.next()?;
                }
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        out.push(' ');
                    }
                }
                _ => {}
            }
            continue;
        }

        match c {
            '\\' if quoted => {
                out.push(c);
                out.push(chars.next()?);
            }
            '"' => {
                quoted = !quoted;
                out.push(c);
            }
            '(' if !quoted => depth = 1,
            ')' if !quoted => return None,
            _ => out.push(c),
        }
    }

    (depth == 0 && !quoted).then_some(out)
}

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Fails unless the value is a string holding an RFC 5322 mailbox.
    ///
    /// Non-string values always fail.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Email;
    check(value) { value.as_str().is_some_and(is_mailbox) }
    error(value) {
        ValidationError::new("email", "must be a valid email address")
            .with_param("found", value.type_name())
    }
    fn email();
}

// ============================================================================
// NUMBER
// ============================================================================

crate::rule! {
    /// Fails for absent values and for strings that do not parse as a float.
    ///
    /// Every other value passes: numeric kinds are numbers already, and
    /// booleans are left for type-specific rules to judge.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Number;
    check(value) {
        match value {
            FieldValue::Null => false,
            FieldValue::Str(s) => s.parse::<f64>().is_ok(),
            _ => true,
        }
    }
    error(value) { ValidationError::new("number", "must be a valid number") }
    fn number();
}

// ============================================================================
// TESTS
// ============================================================================
