//! Open/closed via the specification pattern.
//!
//! `ProductFilter` never changes. New filtering rules are new
//! `Specification` types, and existing ones combine with `&` or `.and()`.

use std::ops::BitAnd;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Product {
            name: name.into(),
            color,
            size,
        }
    }
}

pub trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;
}

#[derive(Debug, Clone, Copy)]
pub struct ColorSpecification(pub Color);

#[derive(Debug, Clone, Copy)]
pub struct SizeSpecification(pub Size);

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.0
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.0
    }
}

/// Satisfied when both parts are.
#[derive(Debug, Clone, Copy)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        AndSpecification { first, second }
    }
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

pub trait SpecificationExt<T>: Specification<T> + Sized {
    fn and<S: Specification<T>>(self, other: S) -> AndSpecification<Self, S> {
        AndSpecification::new(self, other)
    }
}

impl<T, S: Specification<T>> SpecificationExt<T> for S {}

macro_rules! impl_bitand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<S> BitAnd<S> for $ty {
                type Output = AndSpecification<Self, S>;

                fn bitand(self, rhs: S) -> Self::Output {
                    AndSpecification::new(self, rhs)
                }
            }
        )*
    };
}

impl_bitand!(ColorSpecification, SizeSpecification);

impl<A, B, S> BitAnd<S> for AndSpecification<A, B> {
    type Output = AndSpecification<Self, S>;

    fn bitand(self, rhs: S) -> Self::Output {
        AndSpecification::new(self, rhs)
    }
}

pub trait Filter<T> {
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter;

impl Filter<Product> for ProductFilter {
    fn filter<'a>(
        &self,
        items: &'a [Product],
        spec: &dyn Specification<Product>,
    ) -> Vec<&'a Product> {
        items.iter().filter(|item| spec.is_satisfied(item)).collect()
    }
}
