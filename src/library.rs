//! Notation library: file discovery, ABC header parsing and catalog building.

mod abc;
mod catalog;
mod model;
mod scan;

pub use catalog::{BuiltCatalog, build};
pub use model::*;
pub use scan::collect;
