//! CSV import
//!
//! Splits CSV text into rows of trimmed cells. Quoted fields may contain
//! commas, newlines and doubled quotes. A quote that does not open a cell is
//! kept as a literal character.

/// CSV importer - splits text into rows of cells
pub struct CSVImporter {
    /// Field delimiter
    pub delimiter: char,
}

impl Default for CSVImporter {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CSVImporter {
    /// Create a new CSV importer with the given delimiter
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Parse `text` into rows.
    ///
    /// The text is trimmed first, every cell is trimmed, and blank lines are
    /// skipped.
    pub fn parse(&self, text: &str) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = text.trim().chars().peekable();

        while let Some(ch) = chars.next() {
            if in_quotes {
                if ch == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    field.push(ch);
                }
            } else if ch == '"' && field.trim().is_empty() {
                field.clear();
                in_quotes = true;
            } else if ch == self.delimiter {
                row.push(field.trim().to_string());
                field.clear();
            } else if ch == '\n' || ch == '\r' {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(field.trim().to_string());
                field.clear();
                Self::finish_row(&mut rows, std::mem::take(&mut row));
            } else {
                field.push(ch);
            }
        }

        row.push(field.trim().to_string());
        Self::finish_row(&mut rows, row);
        rows
    }

    fn finish_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
        let blank = row.len() == 1 && row[0].is_empty();
        if !blank {
            rows.push(row);
        }
    }
}
