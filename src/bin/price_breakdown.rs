use anyhow::Result;
use imprint_core::config::AppConfig;
use imprint_core::domain::pricing::{
    Book, BookAuthor, Country, Currency, Discount, EmptyDiscount, FixedDiscount, Money,
    PriceService, SellingContext, User,
};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    if let Err(err) = run() {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

/// Price a 20.00 EUR book through a no-op slot and a fixed 5.00 EUR
/// discount, printing the breakdown and the amount left to pay.
fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let eur = Currency::new("EUR")?;
    let original = Money::new(Decimal::new(2000, 2), eur.clone());

    let discounts: Vec<Arc<dyn Discount>> = vec![
        EmptyDiscount::shared(),
        Arc::new(FixedDiscount::new(Money::new(Decimal::new(500, 2), eur))),
    ];

    let context = SellingContext {
        user: User {
            username: "lars".into(),
            email: "lars@example.com".into(),
            member_since: Utc::now(),
        },
        country: Country {
            name: "Netherlands".into(),
        },
        book: Book {
            title: "Domain Modeling Made Functional".into(),
            author: BookAuthor {
                name: "Scott Wlaschin".into(),
            },
        },
    };

    let service = PriceService::new(discounts, config.discount_basis());

    for line in service.price_lines(&original, &context)? {
        println!("{:<20} {}", line.label, line.amount);
    }
    println!("{:<20} {}", "To pay", service.amount_due(&original, &context)?);

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
