//! Start-up configuration: command-line flags with environment fallbacks.

use clap::Parser;

use stockroom_core::{IdGenerator, RandomIds, SequentialIds};
use stockroom_inventory::InventoryStore;
use stockroom_observability::LogFormat;

/// How new item ids are minted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum IdStrategy {
    /// Time-ordered random UUIDs.
    #[default]
    Random,
    /// Counter starting at 1 (reproducible sessions).
    Sequential,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Random => Box::new(RandomIds),
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
        }
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "stockroom", about = "Interactive in-memory inventory manager", version)]
pub struct CliArgs {
    #[arg(
        long,
        env = "STOCKROOM_IDS",
        value_enum,
        default_value_t = IdStrategy::Random,
        value_name = "STRATEGY",
        help = "How new item ids are generated"
    )]
    pub ids: IdStrategy,

    #[arg(
        long,
        env = "STOCKROOM_EMPTY",
        help = "Start with an empty inventory instead of the sample items"
    )]
    pub empty: bool,

    #[arg(
        long,
        env = "STOCKROOM_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty,
        value_name = "FORMAT",
        help = "Log output format on stderr (filter with RUST_LOG)"
    )]
    pub log_format: LogFormat,
}

impl CliArgs {
    /// Build the store the session starts from.
    pub fn build_store(&self) -> InventoryStore<Box<dyn IdGenerator>> {
        let ids = self.ids.generator();
        if self.empty {
            InventoryStore::with_generator(ids)
        } else {
            InventoryStore::seeded_with(ids)
        }
    }
}
