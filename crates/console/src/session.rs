//! Console session: owns the store and applies one command at a time.

use thiserror::Error;

use stockroom_core::{DomainError, IdGenerator};
use stockroom_inventory::{CategoryFilter, InventoryStore, Item, ItemForm, ValidationError};

use crate::command::ConsoleCommand;
use crate::render;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("no item matches {0:?}")]
    UnknownItem(String),

    #[error("{0}")]
    Domain(DomainError),

    #[error("unknown category {0:?}; run `categories` to see the choices")]
    UnknownCategory(String),

    #[error("failed to encode view: {0}")]
    Export(#[from] serde_json::Error),
}

/// What the console loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

/// Single-writer owner of the inventory for one interactive run.
pub struct Session<G = Box<dyn IdGenerator>> {
    store: InventoryStore<G>,
}

impl<G: IdGenerator> Session<G> {
    pub fn new(store: InventoryStore<G>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &InventoryStore<G> {
        &self.store
    }

    /// Current view as a table.
    pub fn render(&self) -> String {
        render::table(self.store.params(), self.store.view())
    }

    pub fn execute(&mut self, command: ConsoleCommand) -> Result<Outcome, SessionError> {
        let output = match command {
            ConsoleCommand::List => self.render(),
            ConsoleCommand::Add {
                name,
                category,
                quantity,
                price,
            } => {
                let draft = ItemForm::new(name, category, quantity, price).parse()?;
                let added = self.store.add(draft);
                let line = format!("Added {} ({})\n", added.name(), added.id_typed().short());
                line + &self.render()
            }
            ConsoleCommand::Edit {
                id,
                name,
                category,
                quantity,
                price,
            } => {
                let current = self.lookup(&id)?.clone();
                let mut form = ItemForm::from_item(&current);
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(category) = category {
                    form.category = category;
                }
                if let Some(quantity) = quantity {
                    form.quantity = quantity;
                }
                if let Some(price) = price {
                    form.price = price;
                }
                let draft = form.parse()?;
                self.store.update(Item::new(current.id_typed(), draft));
                format!("Saved changes to {}\n", current.id_typed().short()) + &self.render()
            }
            ConsoleCommand::Delete { id } => {
                let target = self.lookup(&id)?.id_typed();
                let removed = self.store.remove(&target);
                let name = removed.as_ref().map(Item::name).unwrap_or_default();
                format!("Deleted {name}\n") + &self.render()
            }
            ConsoleCommand::Category { name } => {
                let wanted = CategoryFilter::from_roster(&name);
                if !self.store.categories().contains(&wanted) {
                    return Err(SessionError::UnknownCategory(name));
                }
                self.store.select_category(wanted);
                self.render()
            }
            ConsoleCommand::Categories => {
                render::roster(&self.store.categories(), &self.store.params().category)
            }
            ConsoleCommand::Sort => {
                self.store.toggle_sort();
                self.render()
            }
            ConsoleCommand::Export => {
                let mut json = serde_json::to_string_pretty(self.store.view())?;
                json.push('\n');
                json
            }
            ConsoleCommand::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Print(output))
    }

    fn lookup(&self, handle: &str) -> Result<&Item, SessionError> {
        self.store.resolve(handle).map_err(|e| match e {
            DomainError::NotFound => SessionError::UnknownItem(handle.to_string()),
            other => SessionError::Domain(other),
        })
    }
}
