pub mod dao;
pub mod proposal;
pub mod reviewer;
pub mod tipping;
pub mod vote;

pub use dao::*;
pub use proposal::*;
pub use reviewer::*;
pub use tipping::*;
pub use vote::*;
