//! Plain-text multiplication tables.
//!
//! Shared by group Cayley tables and Cayley-Dickson basis tables so both
//! print with the same box characters:
//!
//! ```text
//! 0 │ 1
//! ─ • ─
//! 1 │ 0
//! ```

/// Symbols used when element labels are too wide to print directly.
///
/// The identity always takes the first symbol.
pub const DEFAULT_SYMBOLS: &str = "eabcdfghijklmnopqrstuvwxyz";

/// Widest label printed verbatim before falling back to symbols.
pub const MAX_LABEL_WIDTH: usize = 3;

/// Returned instead of a table when there are more elements than symbols.
pub const TOO_LARGE: &str = "This Group is too large to represent as a Cayley table!";

const HORIZONTAL: char = '─';
const VERTICAL: char = '│';
const CROSSING: char = '•';

/// Renders a grid of pre-formatted cells.
///
/// Every cell is left-aligned and padded to the widest cell.
pub fn render_grid(rows: &[Vec<String>]) -> String {
    let width = rows
        .iter()
        .flatten()
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(0);
    let columns = rows.first().map_or(0, Vec::len);

    let col_sep = format!(" {VERTICAL} ");
    let crossing = format!(" {CROSSING} ");
    let rule = vec![HORIZONTAL.to_string().repeat(width); columns].join(crossing.as_str());
    let row_sep = format!("\n{rule}\n");

    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| pad(cell, width))
                .collect::<Vec<_>>()
                .join(col_sep.as_str())
        })
        .collect::<Vec<_>>()
        .join(row_sep.as_str())
}

/// Renders the Cayley table of a finite operation.
///
/// `labels` lists the elements in presentation order, identity first.
/// `product(a, b)` returns the label index of `a·b`. Row `b`, column `a`
/// holds `a·b`.
///
/// Labels wider than [`MAX_LABEL_WIDTH`] are replaced by letters from
/// `symbols`, with a `symbol: label` legend above the table.
pub fn render_cayley<F>(labels: &[String], symbols: &str, product: F) -> String
where
    F: Fn(usize, usize) -> usize,
{
    let max_len = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    let cell_labels: Vec<String> = if max_len > MAX_LABEL_WIDTH {
        let symbols: Vec<char> = symbols.chars().collect();
        if labels.len() > symbols.len() {
            return TOO_LARGE.to_string();
        }
        let legend: Vec<String> = labels
            .iter()
            .zip(&symbols)
            .map(|(label, symbol)| format!("{symbol}: {label}"))
            .collect();
        out.push_str(&legend.join("\n"));
        out.push_str("\n\n");
        symbols[..labels.len()].iter().map(char::to_string).collect()
    } else {
        labels.to_vec()
    };

    let n = labels.len();
    let rows: Vec<Vec<String>> = (0..n)
        .map(|b| (0..n).map(|a| cell_labels[product(a, b)].clone()).collect())
        .collect();
    out.push_str(&render_grid(&rows));
    out
}

fn pad(cell: &str, width: usize) -> String {
    format!("{cell:<width$}")
}
