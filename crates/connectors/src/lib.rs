//! Row sources and statement sinks around the SQL formatter: reading
//! delimited files, printing statements, running them on PostgreSQL.

pub mod error;
pub mod file;
pub mod sink;
pub mod sql;
