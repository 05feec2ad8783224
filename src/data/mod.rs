pub mod output;
pub mod parse;

/// Parsed source file: one header row and any number of data rows.
///
/// Every row holds exactly `headers.len()` raw text values, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}
