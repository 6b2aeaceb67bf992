//! `stockroom-console`
//!
//! Interactive text front end over one in-memory [`InventoryStore`]. Reads a
//! command per line, applies it to the store and prints the derived view.
//!
//! [`InventoryStore`]: stockroom_inventory::InventoryStore

pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use command::{ConsoleCommand, Parsed, parse_line};
pub use config::{CliArgs, IdStrategy};
pub use session::{Outcome, Session, SessionError};

use std::io::{BufRead, Write};

/// Drive `session` from `input` until EOF or `quit`, writing to `output`.
pub fn run<G, R, W>(session: &mut Session<G>, input: R, mut output: W) -> anyhow::Result<()>
where
    G: stockroom_core::IdGenerator,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", session.render())?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(Parsed::Blank) => {}
            Ok(Parsed::Message(text)) => write!(output, "{text}")?,
            Ok(Parsed::Command(command)) => match session.execute(command) {
                Ok(Outcome::Print(text)) => write!(output, "{text}")?,
                Ok(Outcome::Quit) => return Ok(()),
                Err(err) => {
                    tracing::warn!(error = %err, "command rejected");
                    writeln!(output, "error: {err}")?;
                }
            },
            Err(err) => writeln!(output, "error: {err}")?,
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}
