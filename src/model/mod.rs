//! Plain data types shared by the catalog, the basket actor, the planner and the
//! executor.

pub mod basket;
pub mod plan;
pub mod product;
pub mod result;

pub use basket::*;
pub use plan::*;
pub use product::*;
pub use result::*;
