//! Turns rows of text tokens into a PostgreSQL `INSERT` statement.
//!
//! The literal formatter decides, per token, whether it is emitted bare
//! (numbers, `TRUE`/`FALSE`/`NULL`) or as an escaped `E'...'` string. The
//! insert builder and renderer stitch formatted rows into one statement.

pub mod ast;
pub mod build;
pub mod error;
pub mod literal;
pub mod macros;
pub mod render;
pub mod validate;

pub use build::insert::{InsertBuilder, build_insert_statement};
pub use literal::{classify, escape, format_row, format_token};
pub use render::join_list;
pub use validate::validate_rows;
