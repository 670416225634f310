//! Provides a fluent builder for constructing `Insert` ASTs.

use crate::{
    ast::{common::TableRef, insert::Insert},
    literal::format_token,
    render::{Render, Renderer},
};

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    ast: Insert,
}

impl InsertBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: Insert {
                table,
                ..Default::default()
            },
        }
    }

    /// Header tokens, used verbatim as identifiers.
    pub fn columns<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.ast.columns = columns.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    /// Adds one data row. Every token goes through the literal formatter.
    /// This can be called multiple times for a batch insert.
    pub fn row<T: AsRef<str>>(mut self, tokens: &[T]) -> Self {
        let literals = tokens.iter().map(|t| format_token(t.as_ref())).collect();
        self.ast.values.push(literals);
        self
    }

    pub fn rows<R, T>(self, rows: &[R]) -> Self
    where
        R: AsRef<[T]>,
        T: AsRef<str>,
    {
        rows.iter().fold(self, |builder, row| builder.row(row.as_ref()))
    }

    pub fn build(self) -> Insert {
        self.ast
    }
}

/// Assembles `INSERT INTO <table> (<columns>) VALUES (<row>), ...;`.
///
/// Pure text assembly: arity is not checked and zero rows render as
/// `VALUES ();`. See [`crate::validate_rows`] for the guard.
pub fn build_insert_statement<S, R, T>(table: &str, columns: &[S], rows: &[R]) -> String
where
    S: AsRef<str>,
    R: AsRef<[T]>,
    T: AsRef<str>,
{
    let ast = InsertBuilder::new(TableRef::new(table))
        .columns(columns)
        .rows(rows)
        .build();

    let mut renderer = Renderer::new();
    ast.render(&mut renderer);
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use model::{core::literal::Literal, records::row::Row};

    use super::*;
    use crate::table_ref;

    #[test]
    fn test_build_single_insert() {
        let ast = InsertBuilder::new(table_ref!("users"))
            .columns(&["name", "email"])
            .row(&["Alice", "a@test.com"])
            .build();

        assert_eq!(ast.table.name, "users");
        assert_eq!(ast.columns, vec!["name", "email"]);
        assert_eq!(ast.values.len(), 1);
        assert_eq!(ast.values[0][0], Literal::Escaped("Alice".to_string()));
    }

    #[test]
    fn test_build_batch_insert() {
        let ast = InsertBuilder::new(table_ref!("logs"))
            .columns(&["level", "count"])
            .row(&["info", "3"])
            .row(&["warn", "null"])
            .build();

        assert_eq!(ast.values.len(), 2);
        assert_eq!(ast.values[1][1], Literal::Bare("NULL".to_string()));
    }

    #[test]
    fn test_header_is_not_formatted() {
        let ast = InsertBuilder::new(table_ref!("t"))
            .columns(&["first_name", "42", "true"])
            .build();

        assert_eq!(ast.columns, vec!["first_name", "42", "true"]);
    }

    #[test]
    fn test_build_insert_statement() {
        let sql = build_insert_statement(
            "people",
            &["id", "name"],
            &[vec!["1", "Ann"], vec!["2", "O'Hara"]],
        );

        assert_eq!(
            sql,
            r"INSERT INTO people (id, name) VALUES (1, E'Ann'), (2, E'O\'Hara');"
        );
    }

    #[test]
    fn test_build_insert_statement_from_rows() {
        let columns: Row = ["id", "price", "active", "note"].into_iter().collect();
        let rows: Vec<Row> = vec![
            ["52", "20.7", "TRUE", "Rice"].into_iter().collect(),
            ["53", "1,000", "false", ""].into_iter().collect(),
        ];

        let sql = build_insert_statement("items", columns.as_slice(), &rows);

        assert_eq!(
            sql,
            "INSERT INTO items (id, price, active, note) \
             VALUES (52, 20.7, TRUE, E'Rice'), (53, 1,000, FALSE, E'');"
        );
    }

    #[test]
    fn test_build_insert_statement_without_rows() {
        let rows: Vec<Vec<String>> = Vec::new();
        let sql = build_insert_statement("people", &["id", "name"], &rows);

        assert_eq!(sql, "INSERT INTO people (id, name) VALUES ();");
    }

    #[test]
    fn test_build_insert_statement_passes_arity_through() {
        let sql = build_insert_statement("t", &["a", "b"], &[vec!["1"]]);
        assert_eq!(sql, "INSERT INTO t (a, b) VALUES (1);");
    }
}
