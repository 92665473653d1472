//! Terminal rendering helpers shared by the command handlers

use std::io::{self, Write};

use chrono::{Local, TimeZone};
use unicode_width::UnicodeWidthStr;

/// Gap between table columns
const COLUMN_GAP: usize = 3;

pub const DATE: &str = "%Y-%m-%d";
pub const DATE_TIME: &str = "%Y-%m-%d %H:%M";
pub const DATE_TIME_SECONDS: &str = "%Y-%m-%d %H:%M:%S";

/// Rule printed above and below detail headers
pub const HEAVY_RULE: &str =
    "================================================================================";
pub const LIGHT_RULE: &str =
    "--------------------------------------------------------------------------------";

/// Column-aligned text table with a dashed rule under the header.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.rows
            .push(cells.into_iter().map(|c| c.to_string()).collect());
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.width());
                } else {
                    widths.push(cell.width());
                }
            }
        }

        let rule: Vec<String> = self.headers.iter().map(|h| "-".repeat(h.width())).collect();

        write_line(out, &self.headers, &widths)?;
        write_line(out, &rule, &widths)?;
        for row in &self.rows {
            write_line(out, row, &widths)?;
        }
        Ok(())
    }
}

fn write_line<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        line.push_str(cell);
        if i + 1 < cells.len() {
            let pad = widths[i].saturating_sub(cell.width()) + COLUMN_GAP;
            line.extend(std::iter::repeat(' ').take(pad));
        }
    }
    writeln!(out, "{}", line)
}

/// Shorten `s` to at most `max` characters, ending in "..." when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut cut: String = s.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

/// Unix seconds rendered in the local timezone.
pub fn timestamp(ts: i64, fmt: &str) -> String {
    timestamp_in(&Local, ts, fmt)
}

fn timestamp_in<Tz>(tz: &Tz, ts: i64, fmt: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_opt(ts, 0).single() {
        Some(dt) => dt.format(fmt).to_string(),
        None => ts.to_string(),
    }
}

/// Byte count as bytes, KB or MB.
pub fn human_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes > MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes > KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Comma separated id list, e.g. "1, 2, 3".
pub fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
