//! Placeholder records inserted by the seeder.

use time::{Date, macros::date};
use uuid::{Uuid, uuid};

use crate::models::{Customer, Invoice, InvoiceStatus, Revenue, User};

const EVIL_RABBIT: Uuid = uuid!("d6e15727-9fe1-4961-8c5b-ea44a9bd81aa");
const DELBA_DE_OLIVEIRA: Uuid = uuid!("3958dc9e-712f-4377-85e9-fec4b6a6442a");
const LEE_ROBINSON: Uuid = uuid!("3958dc9e-742f-4377-85e9-fec4b6a6442a");
const MICHAEL_NOVOTNY: Uuid = uuid!("76d65c26-f784-44a2-ac19-586678f7c2f2");
const AMY_BURNS: Uuid = uuid!("cc27c14a-0acf-4f4a-a6c9-d45682c144b9");
const BALAZS_ORBAN: Uuid = uuid!("13d07535-c59e-4157-a011-f8d2ef4e0cbb");

/// The complete data set for one seed run.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub customers: Vec<Customer>,
    pub invoices: Vec<Invoice>,
    pub revenue: Vec<Revenue>,
}

impl Fixtures {
    /// The demo data set the dashboard ships with.
    pub fn placeholder() -> Self {
        Self {
            users: placeholder_users(),
            customers: placeholder_customers(),
            invoices: placeholder_invoices(),
            revenue: placeholder_revenue(),
        }
    }
}

fn placeholder_users() -> Vec<User> {
    vec![User {
        id: uuid!("410544b2-4001-4271-9855-fec4b6a6442a"),
        name: "User".to_string(),
        email: "user@nextmail.com".to_string(),
        password: "123456".to_string(),
    }]
}

fn placeholder_customers() -> Vec<Customer> {
    [
        (EVIL_RABBIT, "Evil Rabbit", "evil@rabbit.com", "evil-rabbit"),
        (
            DELBA_DE_OLIVEIRA,
            "Delba de Oliveira",
            "delba@oliveira.com",
            "delba-de-oliveira",
        ),
        (LEE_ROBINSON, "Lee Robinson", "lee@robinson.com", "lee-robinson"),
        (
            MICHAEL_NOVOTNY,
            "Michael Novotny",
            "michael@novotny.com",
            "michael-novotny",
        ),
        (AMY_BURNS, "Amy Burns", "amy@burns.com", "amy-burns"),
        (BALAZS_ORBAN, "Balazs Orban", "balazs@orban.com", "balazs-orban"),
    ]
    .into_iter()
    .map(|(id, name, email, slug)| Customer {
        id,
        name: name.to_string(),
        email: email.to_string(),
        image_url: format!("/customers/{slug}.png"),
    })
    .collect()
}

fn placeholder_invoices() -> Vec<Invoice> {
    use InvoiceStatus::{Paid, Pending};

    let rows: [(Uuid, i32, InvoiceStatus, Date); 13] = [
        (EVIL_RABBIT, 15795, Pending, date!(2022 - 12 - 06)),
        (DELBA_DE_OLIVEIRA, 20348, Pending, date!(2022 - 11 - 14)),
        (AMY_BURNS, 3040, Paid, date!(2022 - 10 - 29)),
        (MICHAEL_NOVOTNY, 44800, Paid, date!(2023 - 09 - 10)),
        (BALAZS_ORBAN, 34577, Pending, date!(2023 - 08 - 05)),
        (LEE_ROBINSON, 54246, Pending, date!(2023 - 07 - 16)),
        (EVIL_RABBIT, 666, Pending, date!(2023 - 06 - 27)),
        (MICHAEL_NOVOTNY, 32545, Paid, date!(2023 - 06 - 09)),
        (AMY_BURNS, 1250, Paid, date!(2023 - 06 - 17)),
        (BALAZS_ORBAN, 8546, Paid, date!(2023 - 06 - 07)),
        (DELBA_DE_OLIVEIRA, 500, Paid, date!(2023 - 08 - 19)),
        (BALAZS_ORBAN, 8945, Paid, date!(2023 - 06 - 03)),
        (LEE_ROBINSON, 1000, Paid, date!(2022 - 06 - 05)),
    ];

    rows.into_iter()
        .map(|(customer_id, amount, status, date)| Invoice {
            customer_id,
            amount,
            status,
            date,
        })
        .collect()
}

fn placeholder_revenue() -> Vec<Revenue> {
    [
        ("Jan", 2000),
        ("Feb", 1800),
        ("Mar", 2200),
        ("Apr", 2500),
        ("May", 2300),
        ("Jun", 3200),
        ("Jul", 3500),
        ("Aug", 3700),
        ("Sep", 2500),
        ("Oct", 2800),
        ("Nov", 3000),
        ("Dec", 4800),
    ]
    .into_iter()
    .map(|(month, revenue)| Revenue {
        month: month.to_string(),
        revenue,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_placeholder_sizes() {
        let fixtures = Fixtures::placeholder();

        assert_eq!(fixtures.users.len(), 1);
        assert_eq!(fixtures.customers.len(), 6);
        assert_eq!(fixtures.invoices.len(), 13);
        assert_eq!(fixtures.revenue.len(), 12);
    }

    #[test]
    fn test_invoices_reference_known_customers() {
        let fixtures = Fixtures::placeholder();
        let customer_ids: HashSet<_> = fixtures.customers.iter().map(|c| c.id).collect();

        for invoice in &fixtures.invoices {
            assert!(
                customer_ids.contains(&invoice.customer_id),
                "invoice references unknown customer {}",
                invoice.customer_id
            );
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let fixtures = Fixtures::placeholder();

        let user_ids: HashSet<_> = fixtures.users.iter().map(|u| u.id).collect();
        assert_eq!(user_ids.len(), fixtures.users.len());

        let emails: HashSet<_> = fixtures.users.iter().map(|u| &u.email).collect();
        assert_eq!(emails.len(), fixtures.users.len());

        let customer_ids: HashSet<_> = fixtures.customers.iter().map(|c| c.id).collect();
        assert_eq!(customer_ids.len(), fixtures.customers.len());

        let months: HashSet<_> = fixtures.revenue.iter().map(|r| &r.month).collect();
        assert_eq!(months.len(), fixtures.revenue.len());
    }

    #[test]
    fn test_invoice_natural_keys_are_unique() {
        // Invoices are deduplicated on (customer_id, amount, status, date).
        let fixtures = Fixtures::placeholder();
        let keys: HashSet<_> = fixtures
            .invoices
            .iter()
            .map(|i| (i.customer_id, i.amount, i.status, i.date))
            .collect();
        assert_eq!(keys.len(), fixtures.invoices.len());
    }

    #[test]
    fn test_revenue_months_fit_column() {
        for row in Fixtures::placeholder().revenue {
            assert!(row.month.len() <= 4, "month {} too long", row.month);
        }
    }

    #[test]
    fn test_customer_images_use_slug() {
        let fixtures = Fixtures::placeholder();
        let amy = fixtures
            .customers
            .iter()
            .find(|c| c.id == AMY_BURNS)
            .unwrap();
        assert_eq!(amy.image_url, "/customers/amy-burns.png");
    }
}
