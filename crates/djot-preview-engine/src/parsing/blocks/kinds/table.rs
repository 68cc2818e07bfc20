use crate::tree::Alignment;

/// Pipe table rows and the separator row that follows the header.
pub struct Table;

impl Table {
    pub const PIPE: u8 = b'|';

    /// A row starts with `|`.
    pub fn is_row(rest: &str) -> bool {
        rest.trim_start().as_bytes().first() == Some(&Self::PIPE)
    }

    /// Splits a row into raw cell texts on unescaped pipes.
    ///
    /// Escaped pipes stay escaped; the inline scanner resolves them.
    pub fn split_row(rest: &str) -> Vec<String> {
        let row = rest.trim();
        let row = row.strip_prefix('|').unwrap_or(row);

        let mut cells = vec![];
        let mut cell = String::new();
        let mut escaped = false;
        for ch in row.chars() {
            if escaped {
                cell.push(ch);
                escaped = false;
                continue;
            }
            match ch {
                '\\' => {
                    cell.push(ch);
                    escaped = true;
                }
                '|' => cells.push(std::mem::take(&mut cell).trim().to_string()),
                _ => cell.push(ch),
            }
        }
        // A trailing pipe closes the last cell; otherwise the remainder is one.
        if !cell.trim().is_empty() || cells.is_empty() {
            cells.push(cell.trim().to_string());
        }
        cells
    }

    /// Parses a separator row such as `|---|:-:|--:|` into column alignments.
    pub fn separator(rest: &str) -> Option<Vec<Alignment>> {
        if !Self::is_row(rest) {
            return None;
        }
        Self::split_row(rest)
            .iter()
            .map(|cell| Self::alignment(cell))
            .collect()
    }

    fn alignment(cell: &str) -> Option<Alignment> {
        let left = cell.starts_with(':');
        let right = cell.len() > 1 && cell.ends_with(':');
        let dashes = cell.trim_start_matches(':').trim_end_matches(':');
        if dashes.is_empty() || !dashes.bytes().all(|b| b == b'-') {
            return None;
        }
        Some(match (left, right) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        })
    }

    /// Pads or truncates `cells` to `width`.
    pub fn normalize<T: Default>(mut cells: Vec<T>, width: usize) -> Vec<T> {
        cells.resize_with(width, T::default);
        cells
    }
}
