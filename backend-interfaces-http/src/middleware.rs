pub mod auth;
pub mod forms;

pub use auth::*;
pub use forms::*;
