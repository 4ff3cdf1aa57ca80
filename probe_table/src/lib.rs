#![deny(clippy::disallowed_methods)]

use thiserror::Error;

#[cfg(feature = "arbitrary")]
pub mod arbitrary;
mod config;
mod hash;
mod status;
mod table;

#[cfg(test)]
mod proptest;

pub use config::{HashKind, Probing, TableConfig, DEFAULT_HASH_DIGITS, DEFAULT_TABLE_SIZE};
pub use status::{SlotState, StatusReport};
pub use table::ProbingHashTable;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("no empty slot reachable within the probe bound")]
    TableFull,
    #[error("an equal element is already in the table")]
    DuplicateKey,
    #[error("element not found")]
    NotFound,
    #[error("table size is 0")]
    ZeroTableSize,
    #[error("number of hash digits is 0")]
    ZeroHashDigits,
}
