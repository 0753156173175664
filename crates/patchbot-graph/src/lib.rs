//! Description graph for LV2 packages.
//!
//! Loads an entry description file and every local file it pulls in through
//! `rdfs:seeAlso` into one [`TripleStore`], and answers the fixed query
//! shapes the metadata model needs through [`FieldResolver`].

pub mod error;
pub mod loader;
pub mod resolver;
pub mod store;
pub mod term;
pub mod vocab;

pub use error::{Error, Result};
pub use loader::GraphLoader;
pub use resolver::FieldResolver;
pub use store::{Pattern, TripleStore};
pub use term::{Term, Triple};
