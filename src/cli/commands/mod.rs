//! Command implementations

mod arith;
mod init;
mod measure;
mod show;

pub use arith::{add, neg, sub, sum};
pub use init::init;
pub use measure::{center, distance, eq};
pub use show::show;
