pub mod context;
pub mod discount;
pub mod money;
pub mod service;

pub use context::{Book, BookAuthor, Country, SellingContext, User};
pub use discount::{Discount, DiscountApplication, EmptyDiscount, FixedDiscount};
pub use money::{Currency, Money};
pub use service::{DiscountBasis, PriceLine, PriceService};
