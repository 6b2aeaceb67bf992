use anyhow::Context;
use clap::Parser;

use stockroom_console::{CliArgs, Session};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    stockroom_observability::init(args.log_format);

    let store = args.build_store();
    tracing::info!(ids = ?args.ids, items = store.len(), "starting inventory console");

    let mut session = Session::new(store);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    stockroom_console::run(&mut session, stdin.lock(), stdout.lock())
        .context("console I/O failed")?;

    tracing::info!(items = session.store().len(), "console closed");
    Ok(())
}
