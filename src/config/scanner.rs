use std::str::FromStr;

use crate::error::{NetworkError, Result};

/// Cursor over config text mixing whitespace-separated numbers with
/// line-oriented, comma-separated lists.
///
/// `next_token` skips whitespace across line breaks; `next_line` returns the
/// remainder of the current line and moves to the start of the next one.
pub struct TextScanner<'a> {
    lines: Vec<&'a str>,
    line: usize,
    col: usize,
}

impl<'a> TextScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        TextScanner { lines: text.lines().collect(), line: 0, col: 0 }
    }

    /// 1-based number of the line the cursor is on, for error messages.
    pub fn line_no(&self) -> usize {
        (self.line + 1).min(self.lines.len().max(1))
    }

    pub fn next_token(&mut self) -> Option<(usize, &'a str)> {
        while self.line < self.lines.len() {
            let current: &'a str = self.lines[self.line];
            let rest = &current[self.col..];
            let trimmed = rest.trim_start();
            if trimmed.is_empty() {
                self.line += 1;
                self.col = 0;
                continue;
            }
            let start = self.col + (rest.len() - trimmed.len());
            let len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
            self.col = start + len;
            return Some((self.line + 1, &trimmed[..len]));
        }
        None
    }

    pub fn parse_next<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let (line, token) = self
            .next_token()
            .ok_or_else(|| NetworkError::parse(self.line_no(), format!("missing {what}")))?;
        token
            .parse()
            .map_err(|e| NetworkError::parse(line, format!("bad {what} `{token}`: {e}")))
    }

    pub fn next_line(&mut self) -> Option<(usize, &'a str)> {
        if self.line >= self.lines.len() {
            return None;
        }
        let current: &'a str = self.lines[self.line];
        let line = &current[self.col..];
        let line_no = self.line + 1;
        self.line += 1;
        self.col = 0;
        Some((line_no, line))
    }

    /// Drops whatever is left on the current line, if anything.
    pub fn finish_line(&mut self) {
        if self.col > 0 {
            self.line += 1;
            self.col = 0;
        }
    }

    /// Remaining non-blank lines, trimmed.
    pub fn remaining_lines(&mut self) -> Vec<(usize, &'a str)> {
        let mut out = Vec::new();
        while let Some((line_no, line)) = self.next_line() {
            let line = line.trim();
            if !line.is_empty() {
                out.push((line_no, line));
            }
        }
        out
    }
}

/// Parses a comma-separated list; a single trailing comma is tolerated.
pub fn parse_csv<T>(line_no: usize, line: &str, what: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let line = line.trim();
    let line = line.strip_suffix(',').unwrap_or(line);
    if line.is_empty() {
        return Ok(Vec::new());
    }
    line.split(',')
        .map(|field| {
            let field = field.trim();
            field
                .parse()
                .map_err(|e| NetworkError::parse(line_no, format!("bad {what} `{field}`: {e}")))
        })
        .collect()
}
