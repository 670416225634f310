//! Defines the AST for an INSERT statement.

use crate::ast::common::TableRef;
use model::core::literal::Literal;

/// A multi-row INSERT with every value already formatted as a literal.
///
/// Column names are kept verbatim; they are never classified or escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Insert {
    pub table: TableRef,
    pub columns: Vec<String>,
    /// One inner vector per data row.
    pub values: Vec<Vec<Literal>>,
}
