use std::path::Path;

/// Table name for a file: its base name with the last extension removed.
///
/// `data/people.csv` becomes `people`, `archive.tar.csv` becomes
/// `archive.tar`, and a dotfile such as `.hidden` keeps its full name.
pub fn table_name<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_strips_directory_and_extension() {
        assert_eq!(table_name("data/people.csv"), "people");
        assert_eq!(table_name("/tmp/exports/orders.tsv"), "orders");
        assert_eq!(table_name("people"), "people");
    }

    #[test]
    fn test_table_name_keeps_inner_dots() {
        assert_eq!(table_name("archive.tar.csv"), "archive.tar");
        assert_eq!(table_name(".hidden"), ".hidden");
    }

    #[test]
    fn test_table_name_of_empty_path() {
        assert_eq!(table_name(""), "");
    }
}
