pub mod event_file;

pub use event_file::*;
