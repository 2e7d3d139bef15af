use tracing::warn;

use crate::catalog::Catalog;
use crate::command::{Command, ListFormat, Outcome};
use crate::error::{Error, Result};

/// Runs commands against a single catalog.
#[derive(Debug, Default)]
pub struct Session {
    pub catalog: Catalog,
}

impl Session {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add { name, id, price } => {
                if self.catalog.contains(id) {
                    warn!(id, "inserting a record whose id is already in the catalog");
                }
                self.catalog.insert(name.clone(), id, price);
                Ok(Outcome::Message(format!("Added {} ({}).", name, id)))
            }

            Command::Find { id } => {
                let record = self.catalog.get(id).ok_or_else(|| not_found_id(id))?;
                Ok(Outcome::Message(format!("Found: {}", record)))
            }

            Command::RemoveById { id } => {
                if !self.catalog.remove_by_id(id) {
                    return Err(not_found_id(id));
                }
                Ok(Outcome::Message(format!("Removed food id {}.", id)))
            }

            Command::RemoveByName { name } => {
                let before = self.catalog.len();
                if !self.catalog.remove_by_name(&name) {
                    return Err(Error::NotFound(format!("food name {}", name)));
                }
                let removed = before - self.catalog.len();
                Ok(Outcome::Message(format!(
                    "Removed {} record(s) named {}.",
                    removed, name
                )))
            }

            Command::Rename { id, name } => {
                if !self.catalog.rename_by_id(id, name.clone()) {
                    return Err(not_found_id(id));
                }
                Ok(Outcome::Message(format!("Renamed food id {} to {}.", id, name)))
            }

            Command::Reprice { id, price } => {
                if !self.catalog.reprice_by_id(id, price) {
                    return Err(not_found_id(id));
                }
                Ok(Outcome::Message(format!("Repriced food id {} to {}.", id, price)))
            }

            Command::List { format } => {
                let records: Vec<_> = self.catalog.iter().cloned().collect();
                match format {
                    ListFormat::Table => Ok(Outcome::Listing(records)),
                    ListFormat::Json => Ok(Outcome::Message(serde_json::to_string_pretty(
                        &records,
                    )?)),
                }
            }

            Command::Clear => {
                let released = self.catalog.clear();
                Ok(Outcome::Message(format!("Cleared {} record(s).", released)))
            }
        }
    }

    /// Tears the catalog down, returning how many records it still held.
    pub fn finish(self) -> usize {
        self.catalog.teardown()
    }
}

fn not_found_id(id: i32) -> Error {
    Error::NotFound(format!("food id {}", id))
}
