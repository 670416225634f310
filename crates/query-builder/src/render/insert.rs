use crate::{ast::insert::Insert, render::Render};

impl Render for Insert {
    fn render(&self, r: &mut super::Renderer) {
        // 1. INSERT INTO table (...)
        r.sql.push_str("INSERT INTO ");
        r.sql.push_str(&self.table.name);
        r.sql.push(' ');
        r.push_list(&self.columns);

        // 2. VALUES (...), (...)
        r.sql.push_str(" VALUES ");
        if self.values.is_empty() {
            // Not valid SQL; callers that care run `validate_rows` first.
            r.sql.push_str("()");
        }
        for (i, row) in self.values.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.push_list(row.iter().map(ToString::to_string));
        }
        r.sql.push(';');
    }
}

#[cfg(test)]
mod tests {
    use model::core::literal::Literal;

    use crate::{
        ast::{common::TableRef, insert::Insert},
        render::{Render, Renderer},
    };

    fn render(ast: &Insert) -> String {
        let mut renderer = Renderer::new();
        ast.render(&mut renderer);
        renderer.finish()
    }

    #[test]
    fn test_render_batch_insert() {
        let ast = Insert {
            table: TableRef::new("users"),
            columns: vec!["name".to_string(), "is_active".to_string()],
            values: vec![
                vec![
                    Literal::Escaped("Alice".to_string()),
                    Literal::Bare("TRUE".to_string()),
                ],
                vec![
                    Literal::Escaped("Bob".to_string()),
                    Literal::Bare("FALSE".to_string()),
                ],
            ],
        };

        assert_eq!(
            render(&ast),
            "INSERT INTO users (name, is_active) VALUES (E'Alice', TRUE), (E'Bob', FALSE);"
        );
    }

    #[test]
    fn test_render_without_rows() {
        let ast = Insert {
            table: TableRef::new("users"),
            columns: vec!["id".to_string()],
            values: Vec::new(),
        };

        assert_eq!(render(&ast), "INSERT INTO users (id) VALUES ();");
    }
}
