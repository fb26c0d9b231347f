//! Markdown table helpers

/// Escape text for a Markdown table cell
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '|' | '`' | '*' | '_' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap a value in a code span
pub fn code(text: &str) -> String {
    format!("`{text}`")
}

/// Render a table with every column padded to its widest cell
pub fn format_table<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> Vec<String> {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.as_ref().chars().count())
                .fold(header.chars().count(), usize::max)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(&widths, headers));
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    lines.push(format!("|{}|", separator.join("|")));
    for row in rows {
        let cells: Vec<&str> = row.iter().map(|cell| cell.as_ref()).collect();
        lines.push(render_row(&widths, &cells));
    }
    lines
}

fn render_row(widths: &[usize], cells: &[&str]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &width)| format!("{:<width$}", cells.get(i).copied().unwrap_or("")))
        .collect();
    format!("| {} |", padded.join(" | "))
}
