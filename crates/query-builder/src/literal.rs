//! Classification and escaping of single tokens.

use model::core::literal::{Literal, LiteralKind};

/// Characters that get a backslash in front of them inside `E'...'`.
pub const ESCAPE_CHARS: [char; 6] = ['\'', '"', '\\', '%', '_', '/'];

const KEYWORDS: [&str; 3] = ["true", "false", "null"];

/// Decides how a raw token is represented in SQL.
///
/// A token is numeric when, with every `.`, `,` and `-` removed, it is a
/// non-empty run of ASCII digits. Otherwise it is a keyword when it equals
/// `true`, `false` or `null` ignoring case, and a string in every other case.
pub fn classify(token: &str) -> LiteralKind {
    let mut rest = token.chars().filter(|c| !matches!(c, '.' | ',' | '-'));
    let mut non_empty = false;
    let all_digits = rest.all(|c| {
        non_empty = true;
        c.is_ascii_digit()
    });

    if non_empty && all_digits {
        LiteralKind::Numeric
    } else if KEYWORDS.iter().any(|kw| token.eq_ignore_ascii_case(kw)) {
        LiteralKind::Keyword
    } else {
        LiteralKind::String
    }
}

/// Prefixes every character of [`ESCAPE_CHARS`] with a backslash.
pub fn escape(token: &str) -> String {
    let mut escaped = String::with_capacity(token.len());
    for ch in token.chars() {
        if ESCAPE_CHARS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

pub fn format_token(token: &str) -> Literal {
    match classify(token) {
        LiteralKind::Numeric | LiteralKind::Keyword => Literal::Bare(token.to_uppercase()),
        LiteralKind::String => Literal::Escaped(escape(token)),
    }
}

/// Formats every token of a row independently, keeping the row's length
/// and order.
pub fn format_row<T: AsRef<str>>(tokens: &[T]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| format_token(token.as_ref()).into_sql())
        .collect()
}
