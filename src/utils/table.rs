//! Table rendering utilities for CLI outputs.

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&str>) -> Self {
        Self {
            headers: headers.into_iter().map(String::from).collect(),
            rows: Vec::new(),
            footer: None,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Footer rows are rendered below a separator line.
    pub fn set_footer(&mut self, footer: Vec<String>) {
        self.footer = Some(footer);
    }

    /// Column widths derived from header, rows and footer content.
    fn col_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();

        let all_rows = self.rows.iter().chain(self.footer.iter());
        for row in all_rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len());
                }
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.col_widths();
        let mut out = String::new();

        render_line(&mut out, &self.headers, &widths);
        render_separator(&mut out, &widths);

        for row in &self.rows {
            render_line(&mut out, row, &widths);
        }

        if let Some(footer) = &self.footer {
            render_separator(&mut out, &widths);
            render_line(&mut out, footer, &widths);
        }

        out
    }
}

fn render_line(out: &mut String, row: &[String], widths: &[usize]) {
    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        out.push_str(&format!("{:<width$}  ", cell, width = width));
    }
    out.push('\n');
}

fn render_separator(out: &mut String, widths: &[usize]) {
    for width in widths {
        out.push_str(&"-".repeat(*width));
        out.push_str("  ");
    }
    out.push('\n');
}
