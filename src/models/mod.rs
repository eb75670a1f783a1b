//! Data models for the phone book.

pub mod entry;

pub use entry::Entry;
