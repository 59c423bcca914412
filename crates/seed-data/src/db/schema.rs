//! Create-if-absent DDL for the dashboard tables.
//!
//! Every statement is idempotent. Existing tables are never altered.

use sqlx::PgConnection;

pub(crate) const CREATE_UUID_EXTENSION: &str = r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#;

pub(crate) const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
"#;

pub(crate) const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        image_url VARCHAR(255) NOT NULL
    )
"#;

pub(crate) const CREATE_INVOICES: &str = r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        customer_id UUID NOT NULL,
        amount INT NOT NULL,
        status VARCHAR(255) NOT NULL,
        date DATE NOT NULL
    )
"#;

pub(crate) const CREATE_REVENUE: &str = r#"
    CREATE TABLE IF NOT EXISTS revenue (
        month VARCHAR(4) NOT NULL UNIQUE,
        revenue INT NOT NULL
    )
"#;

/// Runs one DDL statement on the given connection.
pub(crate) async fn ensure(conn: &mut PgConnection, ddl: &str) -> Result<(), sqlx::Error> {
    sqlx::query(ddl).execute(conn).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_create_if_absent() {
        for ddl in [CREATE_USERS, CREATE_CUSTOMERS, CREATE_INVOICES, CREATE_REVENUE] {
            assert!(ddl.contains("CREATE TABLE IF NOT EXISTS"));
            assert!(!ddl.contains("DROP"));
        }
        assert!(CREATE_UUID_EXTENSION.contains("IF NOT EXISTS"));
    }

    #[test]
    fn test_generated_ids_use_extension() {
        for ddl in [CREATE_USERS, CREATE_CUSTOMERS, CREATE_INVOICES] {
            assert!(ddl.contains("DEFAULT uuid_generate_v4() PRIMARY KEY"));
        }
    }
}
