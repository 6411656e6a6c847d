//! Bidirectional sync between a journal's SQLite database and a markdown wiki.
//!
//! - [`db`]: records, sessions and queries over the journal database
//! - [`wiki`]: page model, entity pages and the change-detecting writer
//! - [`sync`]: descriptor-driven export and import engines plus batch runs
//! - [`config`]: database and wiki path resolution
//! - [`cli`]: the `jwiki` command line

pub mod cli;
pub mod config;
pub mod db;
pub mod sync;
pub mod wiki;

#[cfg(test)]
mod test_support;
