use crate::error::QueryBuildError;

/// Checks that header and rows can form a valid statement: at least one
/// column, at least one data row, and every row as wide as the header.
///
/// `build_insert_statement` never calls this; it is the caller's choice.
pub fn validate_rows<S, R, T>(columns: &[S], rows: &[R]) -> Result<(), QueryBuildError>
where
    S: AsRef<str>,
    R: AsRef<[T]>,
    T: AsRef<str>,
{
    if columns.is_empty() {
        return Err(QueryBuildError::NoColumns);
    }
    if rows.is_empty() {
        return Err(QueryBuildError::NoRows);
    }

    let expected = columns.len();
    for (i, row) in rows.iter().enumerate() {
        let found = row.as_ref().len();
        if found != expected {
            return Err(QueryBuildError::ArityMismatch {
                row: i + 1,
                expected,
                found,
            });
        }
    }

    Ok(())
}
