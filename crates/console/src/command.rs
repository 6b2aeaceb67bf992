//! Console input: line tokenizing and command parsing.

use clap::{Parser, Subcommand};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unterminated quote")]
    UnterminatedQuote,
}

/// Split a line on whitespace; double quotes group words and `\"` escapes a
/// quote inside them.
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            '\\' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(TokenizeError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// One console line.
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct ConsoleLine {
    #[command(subcommand)]
    pub command: ConsoleCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ConsoleCommand {
    /// Show the filtered and sorted item table
    #[command(alias = "ls")]
    List,

    /// Add a new item
    Add {
        name: String,
        category: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
    },

    /// Edit an item; fields left out keep their current value
    Edit {
        /// Full id or trailing digits shown in the ID column
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        quantity: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,
    },

    /// Delete an item
    #[command(alias = "rm")]
    Delete {
        /// Full id or trailing digits shown in the ID column
        id: String,
    },

    /// Filter by category ("all" shows everything)
    Category { name: String },

    /// List the selectable categories
    Categories,

    /// Toggle the quantity sort between low-to-high and high-to-low
    Sort,

    /// Print the current view as JSON
    Export,

    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

/// Parsing result for one line.
#[derive(Debug)]
pub enum Parsed {
    Blank,
    Command(ConsoleCommand),
    /// Help text or a usage error, already rendered by clap.
    Message(String),
}

pub fn parse_line(line: &str) -> Result<Parsed, TokenizeError> {
    let tokens = tokenize(line)?;
    if tokens.is_empty() {
        return Ok(Parsed::Blank);
    }
    Ok(match ConsoleLine::try_parse_from(tokens) {
        Ok(parsed) => Parsed::Command(parsed.command),
        Err(err) => Parsed::Message(err.render().to_string()),
    })
}
