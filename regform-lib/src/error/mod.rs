//! Error types

mod schema;
mod sink;
mod storage;
mod submit;

pub use schema::*;
pub use sink::*;
pub use storage::*;
pub use submit::*;
