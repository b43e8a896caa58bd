// tests/support/builders.rs
use chrono::Utc;
use rust_decimal::Decimal;

use imprint_core::domain::pricing::{
    Book, BookAuthor, Country, Currency, Money, SellingContext, User,
};

pub fn eur(cents: i64) -> Money {
    Money::new(Decimal::new(cents, 2), Currency::new("EUR").unwrap())
}

pub struct SellingContextBuilder {
    username: String,
    country: String,
    book_title: String,
}

impl Default for SellingContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SellingContextBuilder {
    pub fn new() -> Self {
        Self {
            username: "lars".into(),
            country: "Netherlands".into(),
            book_title: "Domain Modeling Made Functional".into(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn build(self) -> SellingContext {
        SellingContext {
            user: User {
                email: format!("{}@example.com", self.username),
                username: self.username,
                member_since: Utc::now(),
            },
            country: Country { name: self.country },
            book: Book {
                title: self.book_title,
                author: BookAuthor {
                    name: "Scott Wlaschin".into(),
                },
            },
        }
    }
}
