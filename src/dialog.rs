//! Dialog transcript parsing
//!
//! A corpus file holds dialog blocks separated by blank lines. Each block
//! opens with an id terminated by '>'; the rest is one query per line in
//! "<time>\t<text>" form. The first query of a block is the dialog prompt.

use crate::timeline::MinuteOfDay;
use thiserror::Error;

/// Errors for corpus parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("dialog block {index} has no '>' id terminator")]
    MissingId { index: usize },

    #[error("dialog {id}: no query lines after the id")]
    NoQueries { id: String },

    #[error("dialog {id}: query line {line} has no tab separator")]
    MissingTab { id: String, line: usize },

    #[error("dialog {id}: query line {line} has an invalid time {time:?}")]
    InvalidTime {
        id: String,
        line: usize,
        time: String,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// A single timed query within a dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub time: MinuteOfDay,
    pub text: String,
}

/// One parsed dialog: id, ordered queries, and the unique-modifier tally
/// filled in by the scan pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub id: String,
    pub queries: Vec<Query>,
    pub unique_modifiers: usize,
}

impl Dialog {
    /// Number of queries, the prompt included
    pub fn query_count(&self) -> usize {
        self.queries.len()
    }
}

/// Parse a whole corpus into dialogs.
///
/// The input is expected to already have its trailing newline stripped
/// (see `corpus::read_to_string`).
pub fn parse_corpus(text: &str) -> Result<Vec<Dialog>> {
    text.split("\n\n")
        .enumerate()
        .map(|(index, block)| parse_block(index, block))
        .collect()
}

fn parse_block(index: usize, block: &str) -> Result<Dialog> {
    let (id, tail) = block
        .split_once('>')
        .ok_or(ParseError::MissingId { index })?;
    let id = id.to_string();

    let tail = tail.trim_matches('\n');
    if tail.is_empty() {
        return Err(ParseError::NoQueries { id });
    }

    let mut queries = Vec::new();
    for (offset, line) in tail.split('\n').enumerate() {
        let line_no = offset + 1;
        let (time, text) = line.split_once('\t').ok_or_else(|| ParseError::MissingTab {
            id: id.clone(),
            line: line_no,
        })?;
        let time = MinuteOfDay::parse(time).map_err(|_| ParseError::InvalidTime {
            id: id.clone(),
            line: line_no,
            time: time.to_string(),
        })?;
        queries.push(Query {
            time,
            text: text.to_string(),
        });
    }

    Ok(Dialog {
        id,
        queries,
        unique_modifiers: 0,
    })
}
