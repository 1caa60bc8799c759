//! Account records and the transition rules applied to them.
//!
//! Handlers in `instructions` only load accounts, run the guard and move
//! tokens; every rule about what a record may become lives here so the
//! host-side tests exercise the same code the program runs.

pub mod dao_config;
pub mod proposal;
pub mod reviewer;
pub mod vote;

pub use dao_config::*;
pub use proposal::*;
pub use reviewer::*;
pub use vote::*;
