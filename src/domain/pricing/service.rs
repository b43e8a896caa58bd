use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pricing::context::SellingContext;
use crate::domain::pricing::discount::Discount;
use crate::domain::pricing::money::Money;
use std::str::FromStr;
use std::sync::Arc;

/// One row in a price breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLine {
    pub label: String,
    pub amount: Money,
}

/// Which price each discount sees: the running total after the
/// discounts before it, or always the unreduced original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscountBasis {
    #[default]
    RunningTotal,
    OriginalPrice,
}

impl FromStr for DiscountBasis {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running-total" => Ok(Self::RunningTotal),
            "original-price" => Ok(Self::OriginalPrice),
            other => Err(DomainError::Validation(format!(
                "unknown discount basis: {other}"
            ))),
        }
    }
}

/// Composes an original price with a list of discount strategies into
/// an ordered price breakdown.
pub struct PriceService {
    discounts: Vec<Arc<dyn Discount>>,
    basis: DiscountBasis,
}

impl PriceService {
    pub fn new(discounts: Vec<Arc<dyn Discount>>, basis: DiscountBasis) -> Self {
        Self { discounts, basis }
    }

    /// The breakdown starts with "Original price" at the original
    /// amount, followed by one line per discount application in
    /// discount declaration order. No total line is appended.
    pub fn price_lines(
        &self,
        original: &Money,
        context: &SellingContext,
    ) -> DomainResult<Vec<PriceLine>> {
        let mut lines = vec![PriceLine {
            label: "Original price".into(),
            amount: original.clone(),
        }];
        let mut running = original.clone();

        for discount in &self.discounts {
            let discount = Arc::clone(discount).applicable(context);
            let basis = match self.basis {
                DiscountBasis::RunningTotal => running.clone(),
                DiscountBasis::OriginalPrice => original.clone(),
            };
            for application in discount.applications(&basis) {
                running = running.subtract(&application.amount)?;
                lines.push(PriceLine {
                    label: application.label,
                    amount: application.amount,
                });
            }
        }

        Ok(lines)
    }

    /// Original price minus every discount application.
    pub fn amount_due(
        &self,
        original: &Money,
        context: &SellingContext,
    ) -> DomainResult<Money> {
        let lines = self.price_lines(original, context)?;
        let mut due = original.clone();
        for line in lines.iter().skip(1) {
            due = due.subtract(&line.amount)?;
        }
        Ok(due)
    }
}
