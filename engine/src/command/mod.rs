pub mod parser;

use crate::storage::record::Record;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        name: String,
        id: i32,
        price: f64,
    },
    Find {
        id: i32,
    },
    RemoveById {
        id: i32,
    },
    // Removes every record with this name, not just the first.
    RemoveByName {
        name: String,
    },
    Rename {
        id: i32,
        name: String,
    },
    Reprice {
        id: i32,
        price: f64,
    },
    List {
        format: ListFormat,
    },
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Message(String),
    // Owned snapshot in chain order.
    Listing(Vec<Record>),
}
