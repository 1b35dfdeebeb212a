//! CSV output format for per-dialog tallies

/// CSV record for a single dialog
#[derive(Debug, Clone)]
pub struct CsvDialogRow {
    pub corpus: String,
    pub dialog: String,
    pub queries: usize,
    pub unique_modifiers: usize,
}

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput {
    rows: Vec<CsvDialogRow>,
}

impl CsvOutput {
    /// Create a new CSV output formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dialog row to the output
    pub fn add_row(&mut self, row: CsvDialogRow) {
        self.rows.push(row);
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_row(row: &CsvDialogRow) -> String {
        [
            Self::escape_field(&row.corpus),
            Self::escape_field(&row.dialog),
            row.queries.to_string(),
            row.unique_modifiers.to_string(),
        ]
        .join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::from("corpus,dialog,queries,unique_modifiers\n");
        for row in &self.rows {
            output.push_str(&Self::format_row(row));
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_header() {
        let output = CsvOutput::new();
        assert_eq!(output.to_csv(), "corpus,dialog,queries,unique_modifiers\n");
    }

    #[test]
    fn test_csv_escape_field_simple() {
        assert_eq!(CsvOutput::escape_field("hello"), "hello");
    }

    #[test]
    fn test_csv_escape_field_with_comma() {
        assert_eq!(CsvOutput::escape_field("hello,world"), "\"hello,world\"");
    }

    #[test]
    fn test_csv_escape_field_with_quote() {
        assert_eq!(CsvOutput::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_format_row() {
        let row = CsvDialogRow {
            corpus: "dialogy1.txt".to_string(),
            dialog: "A-1".to_string(),
            queries: 12,
            unique_modifiers: 3,
        };
        assert_eq!(CsvOutput::format_row(&row), "dialogy1.txt,A-1,12,3");
    }

    #[test]
    fn test_csv_format_row_escapes_dialog_id() {
        let row = CsvDialogRow {
            corpus: "c.txt".to_string(),
            dialog: "id,with,commas".to_string(),
            queries: 1,
            unique_modifiers: 0,
        };
        assert_eq!(
            CsvOutput::format_row(&row),
            "c.txt,\"id,with,commas\",1,0"
        );
    }

    #[test]
    fn test_csv_to_csv_output() {
        let mut output = CsvOutput::new();
        output.add_row(CsvDialogRow {
            corpus: "c.txt".to_string(),
            dialog: "A".to_string(),
            queries: 5,
            unique_modifiers: 2,
        });
        output.add_row(CsvDialogRow {
            corpus: "c.txt".to_string(),
            dialog: "B".to_string(),
            queries: 3,
            unique_modifiers: 0,
        });

        let csv = output.to_csv();
        assert!(csv.starts_with("corpus,dialog,queries,unique_modifiers\n"));
        assert!(csv.contains("c.txt,A,5,2\n"));
        assert!(csv.contains("c.txt,B,3,0\n"));
    }
}
