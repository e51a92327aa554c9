//! A tiny interactive course-catalog browser.
//!
//! This crate loads academic course records from a comma-delimited text file
//! into an in-memory catalog, then answers two read-only queries over it:
//! list every course in identifier order, or look up a single course together
//! with its prerequisite identifiers. A fixed numeric menu drives both. It is
//! intentionally small and easy to read; the dataset is assumed to fit
//! comfortably in memory, so every query is a plain linear pass.
//!
//! The main entry point is [`Interpreter`], which owns the catalog for the
//! lifetime of the session and executes menu commands created by a set of
//! pluggable factories. The public modules [`catalog`] and [`command`] expose
//! the record types and the traits for implementing your own menu commands.

pub mod catalog;
pub mod command;
pub mod error;
mod interpreter;
pub mod loader;
pub mod logger;
mod menu;

pub use catalog::{Catalog, Course};
pub use error::CatalogError;

/// Just a convenient re-export of the interactive menu runner.
///
/// See [`Interpreter`] for the high-level API.
pub use interpreter::Interpreter;
