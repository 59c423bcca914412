//! Placeholder data seeding for the dashboard.
//!
//! This crate owns the dashboard's four tables (users, customers, invoices,
//! revenue): their row types, the create-if-absent DDL, the demo fixtures and
//! the transactional [`Seeder`](db::Seeder) that inserts them.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let pool = DatabaseConfig::from_env().connect_lazy()?;
//! match seed_database(pool).await? {
//!     SeedOutcome::Skipped => println!("no database configured"),
//!     SeedOutcome::Seeded(summary) => println!("{summary:?}"),
//! }
//! ```

pub mod config;
pub mod db;
pub mod fixtures;
pub mod models;
pub mod password;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::DatabaseConfig;
    pub use crate::db::{SeedError, SeedOutcome, SeedSummary, Seeder, seed_database};
    pub use crate::fixtures::Fixtures;
    pub use crate::models::{Customer, Invoice, InvoiceStatus, Revenue, User};
    pub use crate::password::{hash_password, verify_password};
}
