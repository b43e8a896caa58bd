use crate::domain::pricing::context::SellingContext;
use crate::domain::pricing::money::Money;
use std::sync::Arc;

/// The computed effect of one discount on a given price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountApplication {
    pub label: String,
    pub amount: Money,
}

/// A discount strategy: given a price, yield zero or more applications.
///
/// `applicable` lets a strategy opt out of a selling context by
/// returning a substitute (typically `EmptyDiscount`); the shipped
/// variants always return themselves.
pub trait Discount: Send + Sync {
    fn applications(&self, price: &Money) -> Box<dyn Iterator<Item = DiscountApplication> + '_>;

    fn applicable(self: Arc<Self>, context: &SellingContext) -> Arc<dyn Discount>;
}

/// Contributes nothing, whatever the price. Doubles as the no-op
/// placeholder slot in a discount list.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyDiscount;

impl EmptyDiscount {
    pub fn shared() -> Arc<dyn Discount> {
        Arc::new(Self)
    }
}

impl Discount for EmptyDiscount {
    fn applications(&self, _price: &Money) -> Box<dyn Iterator<Item = DiscountApplication> + '_> {
        Box::new(std::iter::empty())
    }

    fn applicable(self: Arc<Self>, _context: &SellingContext) -> Arc<dyn Discount> {
        self
    }
}

/// Flat subtraction of a fixed amount, independent of the input price.
#[derive(Debug, Clone)]
pub struct FixedDiscount {
    amount: Money,
}

impl FixedDiscount {
    pub fn new(amount: Money) -> Self {
        Self { amount }
    }
}

impl Discount for FixedDiscount {
    fn applications(&self, _price: &Money) -> Box<dyn Iterator<Item = DiscountApplication> + '_> {
        let application = DiscountApplication {
            label: format!("{:.2} euro off.", self.amount.amount()),
            amount: self.amount.clone(),
        };
        Box::new(std::iter::once(application))
    }

    fn applicable(self: Arc<Self>, _context: &SellingContext) -> Arc<dyn Discount> {
        self
    }
}
