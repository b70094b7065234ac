//! Strategy pattern: the payment behavior is chosen at call time, and a
//! cart with no strategy configured refuses to check out.
//!
//! Run with: cargo run --bin strategy_checkout

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("no payment strategy configured")]
    MissingStrategy,
}

/// What a completed checkout records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub method: &'static str,
    pub amount: u32,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paid {} via {}", self.amount, self.method)
    }
}

pub trait PaymentStrategy {
    fn pay(&self, amount: u32) -> Receipt;
}

pub struct CashPayment;

impl PaymentStrategy for CashPayment {
    fn pay(&self, amount: u32) -> Receipt {
        Receipt {
            method: "cash",
            amount,
        }
    }
}

pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: u32) -> Receipt {
        Receipt {
            method: "credit card",
            amount,
        }
    }
}

#[derive(Default)]
pub struct ShoppingCart {
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        ShoppingCart { strategy: None }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn checkout(&self, amount: u32) -> Result<Receipt, CheckoutError> {
        let strategy = self.strategy.as_ref().ok_or(CheckoutError::MissingStrategy)?;
        Ok(strategy.pay(amount))
    }
}

fn main() {
    let mut cart = ShoppingCart::new();

    if let Err(err) = cart.checkout(100) {
        println!("checkout failed: {err}");
    }

    cart.set_strategy(Box::new(CashPayment));
    match cart.checkout(100) {
        Ok(receipt) => println!("{receipt}"),
        Err(err) => println!("checkout failed: {err}"),
    }

    cart.set_strategy(Box::new(CreditCardPayment));
    match cart.checkout(1000) {
        Ok(receipt) => println!("{receipt}"),
        Err(err) => println!("checkout failed: {err}"),
    }
}
