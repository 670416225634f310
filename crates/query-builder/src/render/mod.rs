//! Defines the core rendering trait and context for converting AST to SQL.

pub mod insert;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Accumulates the SQL text while AST nodes render themselves.
#[derive(Debug, Default)]
pub struct Renderer {
    pub sql: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the renderer and returns the final SQL string.
    pub fn finish(self) -> String {
        self.sql
    }

    /// Appends `(a, b, c)`.
    pub fn push_list<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sql.push('(');
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.sql.push_str(item.as_ref());
        }
        self.sql.push(')');
    }
}

/// Joins items with `", "` and wraps the result in parentheses.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut renderer = Renderer::new();
    renderer.push_list(items);
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_list() {
        assert_eq!(join_list(&["a", "b", "c"]), "(a, b, c)");
        assert_eq!(join_list(&["id"]), "(id)");
        assert_eq!(join_list::<&str>(&[]), "()");
    }

    #[test]
    fn test_join_list_keeps_items_verbatim() {
        let items = vec!["E'a, b'".to_string(), "NULL".to_string()];
        assert_eq!(join_list(&items), "(E'a, b', NULL)");
    }
}
