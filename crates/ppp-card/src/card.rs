//! Passcard layout.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Default number of passcodes per row.
pub const DEFAULT_COLUMNS: usize = 7;

/// Default card title.
pub const DEFAULT_TITLE: &str = "PPP Passcard";

/// Columns are labelled `A` through `Z`.
const MAX_COLUMNS: usize = 26;

/// Layout options for a passcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardConfig {
    /// Passcodes per row. Cards with fewer codes shrink to fit.
    pub columns: usize,
    /// Page number shown right-aligned on the title line.
    pub page: Option<u128>,
    /// Title line text.
    pub title: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        CardConfig {
            columns: DEFAULT_COLUMNS,
            page: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// An ordered list of passcodes laid out in rows.
#[derive(Debug, Clone)]
pub struct Passcard<'a> {
    codes: &'a [String],
    columns: usize,
    page: Option<u128>,
    title: &'a str,
}

impl<'a> Passcard<'a> {
    /// Lay out `codes` according to `config`.
    ///
    /// # Returns
    /// `Ok(Passcard)`, or an error if the configured column count is zero or
    /// exceeds the available column letters.
    pub fn new(codes: &'a [String], config: &'a CardConfig) -> Result<Self, CardError> {
        if config.columns == 0 {
            return Err(CardError::NoColumns);
        }
        if config.columns > MAX_COLUMNS {
            return Err(CardError::TooManyColumns {
                max: MAX_COLUMNS,
                got: config.columns,
            });
        }
        Ok(Passcard {
            codes,
            columns: config.columns.min(codes.len()),
            page: config.page,
            title: &config.title,
        })
    }

    /// Effective number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Width of the dashed rule in characters.
    pub fn width(&self) -> usize {
        4 * (self.columns + 1) + self.columns
    }

    /// Iterate over the rows of passcodes.
    pub fn rows(&self) -> impl Iterator<Item = &'a [String]> {
        // chunks() panics on zero; an empty card has no rows to yield anyway.
        self.codes.chunks(self.columns.max(1))
    }

    /// Look up a passcode by its 1-based row number and column letter.
    pub fn code_at(&self, row: usize, column: char) -> Option<&'a str> {
        let col = (column.to_ascii_uppercase() as usize).checked_sub('A' as usize)?;
        if row == 0 || col >= self.columns {
            return None;
        }
        self.codes
            .get((row - 1) * self.columns + col)
            .map(String::as_str)
    }

    /// Render the card as text, one line per row, ending in a newline.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_to(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let rule = "-".repeat(self.width());

        out.write_str(self.title)?;
        if let Some(page) = self.page {
            let page = page.to_string();
            let pad = self
                .width()
                .saturating_sub(self.title.chars().count() + 2 + page.len());
            write!(out, " {} {}", " ".repeat(pad), page)?;
        }
        out.write_char('\n')?;
        writeln!(out, "{rule}")?;

        out.write_str("     ")?;
        for letter in ('A'..='Z').take(self.columns) {
            write!(out, "  {letter}  ")?;
        }
        out.write_char('\n')?;

        let mut rows = self.rows().peekable();
        if rows.peek().is_none() {
            writeln!(out, "{:2}: ", 1)?;
        }
        for (i, row) in rows.enumerate() {
            write!(out, "{:2}: ", i + 1)?;
            for code in row {
                write!(out, " {code}")?;
            }
            out.write_char('\n')?;
        }

        writeln!(out, "{rule}")
    }
}

impl fmt::Display for Passcard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
