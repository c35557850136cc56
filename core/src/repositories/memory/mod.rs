//! In-process store implementing every repository trait.
//!
//! Backs the unit and HTTP tests, and runs the service when no database
//! is configured. All four collections share one lock so that cross-entity
//! checks (employee existence, name joins) see a consistent snapshot.

mod store;

pub use store::InMemoryStore;

#[cfg(test)]
mod tests;
