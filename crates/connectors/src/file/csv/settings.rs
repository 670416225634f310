use crate::file::csv::error::FileError;

pub const DEFAULT_DELIMITER: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvSettings {
    delimiter: char,
}

impl CsvSettings {
    /// The csv reader works on bytes, so only ASCII delimiters are accepted.
    pub fn new(delimiter: char) -> Result<Self, FileError> {
        if !delimiter.is_ascii() {
            return Err(FileError::InvalidDelimiter(delimiter));
        }
        Ok(CsvSettings { delimiter })
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub(crate) fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}

impl Default for CsvSettings {
    fn default() -> Self {
        CsvSettings {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiter() {
        assert_eq!(CsvSettings::default().delimiter(), ',');
        assert_eq!(CsvSettings::default().delimiter_byte(), b',');
    }

    #[test]
    fn test_custom_delimiter() {
        let settings = CsvSettings::new(';').unwrap();
        assert_eq!(settings.delimiter_byte(), b';');
        assert_eq!(CsvSettings::new('\t').unwrap().delimiter_byte(), b'\t');
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let err = CsvSettings::new('§').unwrap_err();
        assert!(matches!(err, FileError::InvalidDelimiter('§')));
    }
}
