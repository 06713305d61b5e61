// Domain value objects
pub mod budget;
pub mod category;
pub mod identifiers;

pub use budget::*;
pub use category::*;
pub use identifiers::*;
