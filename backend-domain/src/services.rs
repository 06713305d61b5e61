// Domain services

pub mod event_book;

pub use event_book::*;
