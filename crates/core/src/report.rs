//! Report rendering
//!
//! Renders benchmark results as a box-drawn table:
//!
//! ```text
//!                       Data of length 13
//! ┌───────────────┬─────────────────┬──────────────────┬────────────────────┐
//! │ Standard name │ Compressed size │ Compression time │ Decompression time │
//! ├───────────────┼─────────────────┼──────────────────┼────────────────────┤
//! │ gzip          │ 33              │ 0.021            │ 0.007              │
//! └───────────────┴─────────────────┴──────────────────┴────────────────────┘
//! ```

use crate::comparator::BenchmarkResult;
use console::{measure_text_width, pad_str, Alignment};
use std::fmt;

/// Column headers, in display order
pub const HEADERS: [&str; 4] = [
    "Standard name",
    "Compressed size",
    "Compression time",
    "Decompression time",
];

/// Widest a standard name may render before it wraps onto another line
pub const MAX_NAME_WIDTH: usize = 60;

/// Results of one comparison together with the input size
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Byte length of the benchmarked input
    pub input_len: usize,
    /// One row per standard, in registry order
    pub results: Vec<BenchmarkResult>,
}

impl Report {
    /// Create a report
    pub fn new(input_len: usize, results: Vec<BenchmarkResult>) -> Self {
        Self { input_len, results }
    }

    /// Table title
    pub fn title(&self) -> String {
        format!("Data of length {}", self.input_len)
    }

    /// Cell text for every table line; long names continue on extra lines
    fn rows(&self) -> Vec<[String; 4]> {
        let mut rows = Vec::with_capacity(self.results.len());
        for result in &self.results {
            let mut name_lines = wrap_name(&result.name).into_iter();
            rows.push([
                name_lines.next().unwrap_or_default(),
                result.compressed_size.to_string(),
                result.compression_time_ms.to_string(),
                result.decompression_time_ms.to_string(),
            ]);
            rows.extend(name_lines.map(|line| [line, String::new(), String::new(), String::new()]));
        }
        rows
    }

    /// Render the table as a string (no trailing newline)
    pub fn render(&self) -> String {
        let rows = self.rows();

        let mut widths = HEADERS.map(measure_text_width);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(measure_text_width(cell));
            }
        }

        let border = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}", left, segments.join(mid), right)
        };
        let line = |cells: &[String]| {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, width)| format!(" {} ", pad_str(cell, *width, Alignment::Left, None)))
                .collect();
            format!("│{}│", padded.join("│"))
        };

        let table_width = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
        let title = self.title();

        let mut out = Vec::with_capacity(rows.len() + 5);
        out.push(
            pad_str(&title, table_width, Alignment::Center, None)
                .trim_end()
                .to_string(),
        );
        out.push(border("┌", "┬", "┐"));
        out.push(line(&HEADERS.map(String::from)));
        out.push(border("├", "┼", "┤"));
        for row in &rows {
            out.push(line(row));
        }
        out.push(border("└", "┴", "┘"));

        out.join("\n")
    }
}

/// Break `name` into lines at most [`MAX_NAME_WIDTH`] wide, at spaces when possible
fn wrap_name(name: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in name.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if measure_text_width(&candidate) <= MAX_NAME_WIDTH {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for ch in word.chars() {
            current.push(ch);
            if measure_text_width(&current) > MAX_NAME_WIDTH {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(ch);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
