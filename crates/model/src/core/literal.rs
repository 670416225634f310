use std::fmt;

/// How a single text token is represented in SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// Digits once `.`, `,` and `-` are removed.
    Numeric,
    /// `TRUE`, `FALSE` or `NULL`, in any case.
    Keyword,
    /// Anything else, emitted as an escaped string literal.
    String,
}

impl LiteralKind {
    pub fn is_bare(self) -> bool {
        matches!(self, LiteralKind::Numeric | LiteralKind::Keyword)
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LiteralKind::Numeric => "numeric",
            LiteralKind::Keyword => "keyword",
            LiteralKind::String => "string",
        };
        f.write_str(name)
    }
}

/// SQL text for one token.
///
/// `Escaped` holds a payload that has already gone through escaping; it is
/// rendered with the PostgreSQL escape-string prefix, `E'...'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Bare(String),
    Escaped(String),
}

impl Literal {
    pub fn is_bare(&self) -> bool {
        matches!(self, Literal::Bare(_))
    }

    pub fn into_sql(self) -> String {
        match self {
            Literal::Bare(text) => text,
            escaped => escaped.to_string(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bare(text) => f.write_str(text),
            Literal::Escaped(text) => write!(f, "E'{text}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_bare() {
        assert_eq!(Literal::Bare("20.7".into()).to_string(), "20.7");
        assert_eq!(Literal::Bare("TRUE".into()).into_sql(), "TRUE");
    }

    #[test]
    fn test_display_escaped() {
        assert_eq!(Literal::Escaped("Rice".into()).to_string(), "E'Rice'");
        assert_eq!(Literal::Escaped(String::new()).into_sql(), "E''");
        assert_eq!(Literal::Escaped(r"Ri\'ce".into()).into_sql(), r"E'Ri\'ce'");
    }

    #[test]
    fn test_kind_is_bare() {
        assert!(LiteralKind::Numeric.is_bare());
        assert!(LiteralKind::Keyword.is_bare());
        assert!(!LiteralKind::String.is_bare());
        assert_eq!(LiteralKind::Keyword.to_string(), "keyword");
    }
}
