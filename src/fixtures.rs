//! Sample catalogue and accounts used to populate a test database.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleProduct {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub quantity: i32,
    pub shipping: bool,
    pub category: &'static str,
}

impl SampleProduct {
    pub fn price_minor_units(&self) -> i64 {
        (self.price * 100.0).round() as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleUser {
    pub name: &'static str,
    pub email: &'static str,
    /// Plain text; hashed when seeded.
    pub password: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub answer: &'static str,
    pub role: i16,
}

impl SampleUser {
    pub fn is_admin(&self) -> bool {
        self.role == 1
    }
}

pub const SAMPLE_PRODUCTS: &[SampleProduct] = &[
    SampleProduct {
        name: "Smartphone",
        slug: "smartphone",
        description: "A high-end smartphone",
        price: 999.99,
        quantity: 50,
        shipping: true,
        category: "electronics",
    },
    SampleProduct {
        name: "Laptop",
        slug: "laptop",
        description: "A powerful laptop",
        price: 1499.99,
        quantity: 30,
        shipping: true,
        category: "electronics",
    },
    SampleProduct {
        name: "T-shirt",
        slug: "t-shirt",
        description: "A comfortable cotton t-shirt",
        price: 19.99,
        quantity: 100,
        shipping: true,
        category: "clothing",
    },
    SampleProduct {
        name: "Jeans",
        slug: "jeans",
        description: "Classic denim jeans",
        price: 49.99,
        quantity: 75,
        shipping: true,
        category: "clothing",
    },
    SampleProduct {
        name: "Bestselling Novel",
        slug: "bestselling-novel",
        description: "A bestselling novel",
        price: 14.99,
        quantity: 200,
        shipping: true,
        category: "book",
    },
];

pub const SAMPLE_USERS: &[SampleUser] = &[
    SampleUser {
        name: "John Doe",
        email: "john@example.com",
        password: "hashedpassword123",
        phone: "1234567890",
        address: "123 Main St, Sample City, Sample State, 12345, Sample Country",
        answer: "blue",
        role: 0,
    },
    SampleUser {
        name: "Jane Smith",
        email: "jane@example.com",
        password: "hashedpassword456",
        phone: "0987654321",
        address: "456 Oak Ave, Another City, Another State, 67890, Another Country",
        answer: "green",
        role: 0,
    },
    SampleUser {
        name: "Alice Johnson",
        email: "alice@example.com",
        password: "hashedpassword789",
        phone: "9876543210",
        address: "789 Pine St, Third City, Third State, 54321, Third Country",
        answer: "red",
        role: 1,
    },
    SampleUser {
        name: "Bob Williams",
        email: "bob@example.com",
        password: "hashedpassword321",
        phone: "8765432109",
        address: "321 Birch Blvd, Fourth City, Fourth State, 98765, Fourth Country",
        answer: "yellow",
        role: 0,
    },
    SampleUser {
        name: "Charlie Brown",
        email: "charlie@example.com",
        password: "hashedpassword654",
        phone: "7654321098",
        address: "654 Cedar St, Fifth City, Fifth State, 87654, Fifth Country",
        answer: "purple",
        role: 0,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn slugs_and_emails_are_unique() {
        let slugs: HashSet<_> = SAMPLE_PRODUCTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), SAMPLE_PRODUCTS.len());
        let emails: HashSet<_> = SAMPLE_USERS.iter().map(|u| u.email).collect();
        assert_eq!(emails.len(), SAMPLE_USERS.len());
    }

    #[test]
    fn exactly_one_admin() {
        let admins: Vec<_> = SAMPLE_USERS.iter().filter(|u| u.is_admin()).map(|u| u.name).collect();
        assert_eq!(admins, vec!["Alice Johnson"]);
    }

    #[test]
    fn prices_convert_to_minor_units() {
        let jeans = SAMPLE_PRODUCTS.iter().find(|p| p.slug == "jeans").unwrap();
        assert_eq!(jeans.price_minor_units(), 4999);
        let laptop = SAMPLE_PRODUCTS.iter().find(|p| p.slug == "laptop").unwrap();
        assert_eq!(laptop.price_minor_units(), 149_999);
    }
}
