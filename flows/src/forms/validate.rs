//! Field validators and blur-time formatters.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const NAME_MAX_CHARS: usize = 50;
pub const PASSWORD_MIN_CHARS: usize = 8;

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the
/// domain with text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let len = domain.len();
    domain.char_indices().any(|(i, c)| c == '.' && i > 0 && i + 1 < len)
}

/// 1..=50 characters once trimmed.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let count = name.trim().chars().count();
    (1..=NAME_MAX_CHARS).contains(&count)
}

/// Letters (ASCII and Latin-1 accented), apostrophes, spaces, and hyphens.
#[must_use]
pub fn is_valid_first_name_format(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && name.chars().all(is_first_name_char)
}

fn is_first_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c, '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{FF}' | '\'' | ' ' | '-')
}

/// Trim, lower-case, then capitalize each word. Whitespace runs and hyphens
/// separate words and are kept as typed.
#[must_use]
pub fn title_case(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut at_word_start = true;
    for c in lowered.chars() {
        if c.is_whitespace() || c == '-' {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[must_use]
pub fn format_last_name(value: &str) -> String {
    value.trim().to_uppercase()
}

#[must_use]
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}
