//! Type-safe wrappers for command-line arguments.

pub mod date;

pub use date::GameDate;
