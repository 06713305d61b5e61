// Domain entities

pub mod event;
pub mod requests;
pub mod runtime_config;

pub use event::*;
pub use requests::*;
pub use runtime_config::*;
