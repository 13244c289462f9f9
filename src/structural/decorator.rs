//! Decorator: wrappers that expose the same `Coffee` interface as the value
//! they wrap, forward to it, and add to the result.
//!
//! Wrappers compose statically (`Sugar<Milk<SimpleCoffee>>`) or through
//! `Box<dyn Coffee>` when the chain is decided at run time.

pub trait Coffee {
    /// Total price. Totals are `u64` and saturate at `u64::MAX`, so no chain
    /// of wrappers can overflow.
    fn cost(&self) -> u64;

    fn description(&self) -> String;
}

impl<C: Coffee + ?Sized> Coffee for Box<C> {
    fn cost(&self) -> u64 {
        (**self).cost()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<C: Coffee + ?Sized> Coffee for &C {
    fn cost(&self) -> u64 {
        (**self).cost()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleCoffee;

impl SimpleCoffee {
    pub const COST: u64 = 5;
}

impl Coffee for SimpleCoffee {
    fn cost(&self) -> u64 {
        Self::COST
    }

    fn description(&self) -> String {
        "Simple coffee".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Milk<C> {
    inner: C,
}

impl<C: Coffee> Milk<C> {
    pub const COST: u64 = 2;

    pub fn new(inner: C) -> Self {
        Milk { inner }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Coffee> Coffee for Milk<C> {
    fn cost(&self) -> u64 {
        self.inner.cost().saturating_add(Self::COST)
    }

    fn description(&self) -> String {
        format!("{}, milk", self.inner.description())
    }
}

#[derive(Debug, Clone)]
pub struct Sugar<C> {
    inner: C,
}

impl<C: Coffee> Sugar<C> {
    pub const COST: u64 = 1;

    pub fn new(inner: C) -> Self {
        Sugar { inner }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Coffee> Coffee for Sugar<C> {
    fn cost(&self) -> u64 {
        self.inner.cost().saturating_add(Self::COST)
    }

    fn description(&self) -> String {
        format!("{}, sugar", self.inner.description())
    }
}

/// An ingredient with its own name and price.
#[derive(Debug, Clone)]
pub struct Extra<C> {
    inner: C,
    name: String,
    amount: u32,
}

impl<C: Coffee> Extra<C> {
    pub fn new(inner: C, name: impl Into<String>, amount: u32) -> Self {
        Extra {
            inner,
            name: name.into(),
            amount,
        }
    }
}

impl<C: Coffee> Coffee for Extra<C> {
    fn cost(&self) -> u64 {
        self.inner.cost().saturating_add(u64::from(self.amount))
    }

    fn description(&self) -> String {
        format!("{}, {}", self.inner.description(), self.name)
    }
}

/// Fluent wrapping: `SimpleCoffee.with_milk().with_sugar()`.
pub trait CoffeeExt: Coffee + Sized {
    fn with_milk(self) -> Milk<Self> {
        Milk::new(self)
    }

    fn with_sugar(self) -> Sugar<Self> {
        Sugar::new(self)
    }

    fn with_extra(self, name: impl Into<String>, amount: u32) -> Extra<Self> {
        Extra::new(self, name, amount)
    }
}

impl<C: Coffee> CoffeeExt for C {}
