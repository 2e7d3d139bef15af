pub mod catalog;
pub mod command;
pub mod engine;
pub mod error;
pub mod storage;

#[cfg(test)]
mod tests;
