//! Feeder patrol CLI library.
//!
//! Terminal styling and plan rendering used by the `feederpatrol` binary.

pub mod output;
pub mod terminal;
