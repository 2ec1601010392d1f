//! Terminal histogram of rounds-per-session.
//!
//! Rounds run down the vertical axis, frequency across, one row per round
//! count. Only when a row limit is set and exceeded are neighbouring buckets
//! summed into rows of equal width; the underlying histogram is untouched.

use std::io::{self, Write};

use crate::stats::Histogram;

const BAR: char = '█';
const GRID: char = '┆';
const GRID_LINES: usize = 4;

pub struct PlotOptions {
    /// `None` draws every unit bucket.
    pub max_rows: Option<usize>,
    pub width: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            max_rows: None,
            width: 50,
        }
    }
}

/// A display row: inclusive range of rounds and the sessions that fell in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub first: u32,
    pub last: u32,
    pub count: u32,
}

pub fn rows(histogram: &Histogram, max_rows: Option<usize>) -> Vec<Row> {
    let buckets = histogram.counts.len();
    if buckets == 0 {
        return Vec::new();
    }
    let group = max_rows.map_or(1, |limit| buckets.div_ceil(limit.max(1)));
    histogram
        .counts
        .chunks(group)
        .enumerate()
        .map(|(i, chunk)| {
            let first = (i * group) as u32 + 1;
            Row {
                first,
                last: first + chunk.len() as u32 - 1,
                count: chunk.iter().sum(),
            }
        })
        .collect()
}

pub fn render<W: Write>(
    histogram: &Histogram,
    title: &str,
    options: &PlotOptions,
    out: &mut W,
) -> io::Result<()> {
    let rows = rows(histogram, options.max_rows);
    let width = options.width.max(GRID_LINES);
    let peak = rows.iter().map(|r| r.count).max().unwrap_or(0);
    let label = |row: &Row| {
        if row.first == row.last {
            row.first.to_string()
        } else {
            format!("{}-{}", row.first, row.last)
        }
    };
    let gutter = rows
        .iter()
        .map(|row| label(row).len())
        .max()
        .unwrap_or(0)
        .max("Rounds".len());

    writeln!(out, "{title}")?;
    writeln!(out, "{:>gutter$} │", "Rounds")?;
    for row in &rows {
        let filled = if peak == 0 {
            0
        } else {
            ((row.count as f64 / peak as f64) * width as f64).round() as usize
        };
        let line: String = (1..=width)
            .map(|col| {
                if col <= filled {
                    BAR
                } else if col % (width / GRID_LINES) == 0 {
                    GRID
                } else {
                    ' '
                }
            })
            .collect();
        writeln!(out, "{:>gutter$} │{} {}", label(row), line, row.count)?;
    }
    let axis: String = (1..=width)
        .map(|col| if col % (width / GRID_LINES) == 0 { '┴' } else { '─' })
        .collect();
    writeln!(out, "{:>gutter$} └{}", "", axis)?;
    writeln!(out, "{:>gutter$}  0{:>w$}", "", peak, w = width - 1)?;
    writeln!(out, "{:>gutter$}  {:^width$}", "", "Frequency")?;
    Ok(())
}
