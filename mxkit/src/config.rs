//! Rendering configuration for ASCII tables

/// Configuration for table rendering
///
/// The default renders the classic layout: every value right-aligned in a
/// column one character wider than the widest value, `-` borders and `|`
/// separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Extra width added to the widest value to get the column width
    pub padding: usize,
    /// Character repeated for the top and bottom borders
    pub border: char,
    /// Character placed before the first column and after every column
    pub separator: char,
}

impl TableConfig {
    /// Set the padding added to the widest value
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Set the border character
    pub fn with_border(mut self, border: char) -> Self {
        self.border = border;
        self
    }

    /// Set the column separator character
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Column width for values at most `max_width` characters wide
    pub fn column_width(&self, max_width: usize) -> usize {
        max_width + self.padding
    }

    /// Length of the border line for `columns` columns of `column_width`
    ///
    /// Every cell takes the column width plus a space and a separator, and
    /// the row opens with one more separator.
    pub fn border_len(&self, columns: usize, column_width: usize) -> usize {
        columns * (column_width + 2) + 1
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            padding: 1,
            border: '-',
            separator: '|',
        }
    }
}
