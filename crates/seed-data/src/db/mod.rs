//! Database integration for seeding the dashboard.
//!
//! The [`Seeder`] creates missing tables and inserts the fixture rows in a
//! single transaction. [`seed_database`] adds the soft skip used when no
//! connection string is configured.

mod schema;
mod seeder;

pub use seeder::{SeedError, SeedOutcome, SeedSummary, Seeder, seed_database};
