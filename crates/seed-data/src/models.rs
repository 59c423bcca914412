//! Row types for the four dashboard tables.

use time::Date;
use uuid::Uuid;

/// A dashboard login. `password` holds the plaintext fixture value; it is
/// hashed by the seeder before it reaches the database.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// An invoice without an id; the database generates one on insert.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub customer_id: Uuid,
    /// Amount in cents.
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revenue {
    /// Short month name, at most 4 characters (`Jan`, `Feb`, ...).
    pub month: String,
    pub revenue: i32,
}
