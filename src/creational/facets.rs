//! Faceted builder: one entry point, several specialised sub-builders.
//!
//! `PersonBuilder` hands the same `Person` to an address facet (`lives`) or
//! an employment facet (`works`). Each facet can switch to the other, so a
//! single chain fills in both aspects:
//!
//! ```
//! use gamma_patterns::creational::facets::PersonBuilder;
//!
//! let person = PersonBuilder::new()
//!     .lives()
//!     .at("123 London Road")
//!     .in_city("London")
//!     .with_postcode("SW12BC")
//!     .works()
//!     .at("Fabrikam")
//!     .as_a("Engineer")
//!     .earning(123_000)
//!     .build();
//!
//! assert_eq!(person.city.as_deref(), Some("London"));
//! ```

use std::fmt;

use super::builder::or_none;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    // address
    pub street_address: Option<String>,
    pub postcode: Option<String>,
    pub city: Option<String>,
    // employment
    pub company_name: Option<String>,
    pub position: Option<String>,
    pub annual_income: Option<u64>,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Address: {}, {}, {}",
            or_none(&self.street_address),
            or_none(&self.postcode),
            or_none(&self.city)
        )?;
        write!(
            f,
            "Employed at {} as a {} earning {}",
            or_none(&self.company_name),
            or_none(&self.position),
            or_none(&self.annual_income)
        )
    }
}

#[derive(Debug, Default)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new() -> Self {
        PersonBuilder::default()
    }

    /// Continue building an existing person.
    pub fn from_person(person: Person) -> Self {
        PersonBuilder { person }
    }

    pub fn lives(self) -> PersonAddressBuilder {
        PersonAddressBuilder { inner: self }
    }

    pub fn works(self) -> PersonJobBuilder {
        PersonJobBuilder { inner: self }
    }

    pub fn build(self) -> Person {
        self.person
    }
}

#[derive(Debug)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct PersonAddressBuilder {
    inner: PersonBuilder,
}

impl PersonAddressBuilder {
    pub fn at(mut self, street_address: impl Into<String>) -> Self {
        self.inner.person.street_address = Some(street_address.into());
        self
    }

    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.inner.person.postcode = Some(postcode.into());
        self
    }

    pub fn in_city(mut self, city: impl Into<String>) -> Self {
        self.inner.person.city = Some(city.into());
        self
    }

    pub fn works(self) -> PersonJobBuilder {
        self.inner.works()
    }

    pub fn build(self) -> Person {
        self.inner.build()
    }
}

#[derive(Debug)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct PersonJobBuilder {
    inner: PersonBuilder,
}

impl PersonJobBuilder {
    pub fn at(mut self, company_name: impl Into<String>) -> Self {
        self.inner.person.company_name = Some(company_name.into());
        self
    }

    pub fn as_a(mut self, position: impl Into<String>) -> Self {
        self.inner.person.position = Some(position.into());
        self
    }

    pub fn earning(mut self, annual_income: u64) -> Self {
        self.inner.person.annual_income = Some(annual_income);
        self
    }

    pub fn lives(self) -> PersonAddressBuilder {
        self.inner.lives()
    }

    pub fn build(self) -> Person {
        self.inner.build()
    }
}
