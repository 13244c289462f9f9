//! Strategy: a context that delegates payment to a behavior chosen when the
//! context is created.

use tracing::debug;

pub trait PaymentStrategy {
    fn name(&self) -> &str;

    fn pay(&self, amount: u32) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardPayment;

#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalPayment;

impl PaymentStrategy for CreditCardPayment {
    fn name(&self) -> &str {
        "Credit Card"
    }

    fn pay(&self, amount: u32) -> String {
        format!("Paid {amount} using {}", self.name())
    }
}

impl PaymentStrategy for PayPalPayment {
    fn name(&self) -> &str {
        "PayPal"
    }

    fn pay(&self, amount: u32) -> String {
        format!("Paid {amount} using {}", self.name())
    }
}

/// Adapts a closure into a strategy, see [`from_fn`].
#[derive(Clone)]
pub struct FnStrategy<F> {
    name: &'static str,
    pay: F,
}

impl<F> PaymentStrategy for FnStrategy<F>
where
    F: Fn(u32) -> String,
{
    fn name(&self) -> &str {
        self.name
    }

    fn pay(&self, amount: u32) -> String {
        (self.pay)(amount)
    }
}

pub fn from_fn<F>(name: &'static str, pay: F) -> FnStrategy<F>
where
    F: Fn(u32) -> String,
{
    FnStrategy { name, pay }
}

impl<S: PaymentStrategy + ?Sized> PaymentStrategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn pay(&self, amount: u32) -> String {
        (**self).pay(amount)
    }
}

/// Holds exactly one strategy and forwards every payment to it.
#[derive(Debug, Clone)]
pub struct PaymentContext<S> {
    strategy: S,
}

impl<S: PaymentStrategy> PaymentContext<S> {
    pub fn new(strategy: S) -> Self {
        PaymentContext { strategy }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn pay(&self, amount: u32) -> String {
        debug!(strategy = self.strategy.name(), amount, "delegating payment");
        self.strategy.pay(amount)
    }
}
