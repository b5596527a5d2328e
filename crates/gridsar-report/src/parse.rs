//! Parsing the engine's delimited action log.
//!
//! The log is semicolon-delimited with `'` as the quote character; a
//! quoted field may contain the delimiter and represents a literal quote
//! as a doubled one. The first row is the header.
//!
//! Two independent access paths exist on purpose and are both tested
//! against the same fixtures: [`LogRow::from_fields`] reads the columns
//! the aggregation loop needs by fixed position, and [`HeaderMap::record`]
//! builds a name-to-value record used for the final row's totals.

use std::collections::BTreeMap;

use crate::error::ReportError;

/// Field delimiter of the action log.
pub const DELIMITER: char = ';';

/// Quote character of the action log.
pub const QUOTE: char = '\'';

/// Lowest column count a data row may have: the fixed-position columns
/// run up to index 9 (the tick number).
const MIN_COLUMNS: usize = 10;

/// Split one log line into its fields.
///
/// A field starting with the quote character runs until the closing
/// quote; inside, a doubled quote is a literal one and delimiters do not
/// split.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    current.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == QUOTE && current.is_empty() {
            in_quotes = true;
        } else if c == DELIMITER {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);
    fields
}

/// The header row, kept for name-based field access.
#[derive(Debug, Clone)]
pub struct HeaderMap {
    columns: Vec<String>,
}

impl HeaderMap {
    /// Wrap a split header row.
    pub const fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Number of header columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the header is empty.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Build a column-name to value record for one row.
    ///
    /// Pairs columns positionally; the caller guarantees the row has the
    /// header's field count (enforced by the aggregation loop).
    pub fn record<'a>(&'a self, fields: &'a [String]) -> BTreeMap<&'a str, &'a str> {
        self.columns
            .iter()
            .zip(fields.iter())
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }
}

/// The fixed-position columns of one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    /// Column 2: the autonomous agent's action name (empty for none).
    pub agent_action: String,
    /// Column 3: the autonomous agent's action target.
    pub agent_target: String,
    /// Column 4: the human agent's action name (empty for none).
    pub human_action: String,
    /// Column 5: the human agent's action target.
    pub human_target: String,
    /// Column 6: messages the human sent this tick.
    pub human_messages: u64,
    /// Column 7: messages the agent sent this tick.
    pub agent_messages: u64,
    /// Column 9: the tick number.
    pub tick: u64,
}

impl LogRow {
    /// Read the fixed-position columns from a split row.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Parse`] if the row has fewer than
    /// [`MIN_COLUMNS`] fields or a numeric column does not parse.
    pub fn from_fields(fields: &[String], line: usize) -> Result<Self, ReportError> {
        if fields.len() < MIN_COLUMNS {
            return Err(ReportError::Parse {
                line,
                message: format!(
                    "expected at least {MIN_COLUMNS} columns, found {}",
                    fields.len()
                ),
            });
        }
        Ok(Self {
            agent_action: field(fields, 2),
            agent_target: field(fields, 3),
            human_action: field(fields, 4),
            human_target: field(fields, 5),
            human_messages: numeric(fields, 6, line)?,
            agent_messages: numeric(fields, 7, line)?,
            tick: numeric(fields, 9, line)?,
        })
    }
}

fn field(fields: &[String], index: usize) -> String {
    fields.get(index).cloned().unwrap_or_default()
}

fn numeric(fields: &[String], index: usize, line: usize) -> Result<u64, ReportError> {
    let raw = fields.get(index).map_or("", String::as_str);
    raw.parse().map_err(|err| ReportError::Parse {
        line,
        message: format!("column {index} is not numeric ({err}): {raw:?}"),
    })
}
