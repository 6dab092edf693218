use serde::Serialize;

/// Column alignment declared by a table's delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

/// Pipe table block type.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    pub fn is_row(line: &str) -> bool {
        line.contains(Self::PIPE)
    }

    /// Splits a row into trimmed cells. Outer pipes are optional and `\|`
    /// stays inside its cell.
    pub fn split_row(line: &str) -> Vec<String> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = if t.ends_with(Self::PIPE) && !t.ends_with("\\|") {
            &t[..t.len() - 1]
        } else {
            t
        };

        let mut cells = vec![];
        let mut cell = String::new();
        let mut chars = t.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\\' if chars.peek() == Some(&Self::PIPE) => {
                    cell.push(Self::PIPE);
                    chars.next();
                }
                Self::PIPE => cells.push(std::mem::take(&mut cell).trim().to_string()),
                _ => cell.push(c),
            }
        }
        cells.push(cell.trim().to_string());
        cells
    }

    /// Parses a delimiter row (`|---|:--:|`) into per-column alignments.
    pub fn delimiter_row(line: &str) -> Option<Vec<Alignment>> {
        if !Self::is_row(line) {
            return None;
        }
        Self::split_row(line)
            .iter()
            .map(|cell| Self::alignment(cell))
            .collect()
    }

    fn alignment(cell: &str) -> Option<Alignment> {
        let left = cell.starts_with(':');
        let right = cell.ends_with(':') && cell.len() > 1;
        let dashes = cell.trim_start_matches(':').trim_end_matches(':');
        if dashes.is_empty() || !dashes.chars().all(|c| c == '-') {
            return None;
        }
        Some(match (left, right) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        })
    }

    /// Normalizes a body row to the header width: short rows are padded with
    /// empty cells, long rows are truncated. Returns how many cells were
    /// dropped so the caller can report it.
    pub fn normalize_row(mut cells: Vec<String>, width: usize) -> (Vec<String>, usize) {
        let dropped = cells.len().saturating_sub(width);
        cells.resize(width, String::new());
        (cells, dropped)
    }
}
