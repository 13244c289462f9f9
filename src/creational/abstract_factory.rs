//! Abstract factory: a family of drink factories behind one trait.

use std::fmt;

use tracing::{debug, warn};

use crate::error::{PatternError, Result};

pub trait HotDrink {
    fn consume(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Tea;

#[derive(Debug, Clone, Copy, Default)]
pub struct Coffee;

impl HotDrink for Tea {
    fn consume(&self) -> String {
        "This tea is nice but I'd prefer it with milk".to_string()
    }
}

impl HotDrink for Coffee {
    fn consume(&self) -> String {
        "This coffee is delicious".to_string()
    }
}

/// A freshly made drink plus the steps taken to make it.
pub struct Prepared {
    pub steps: String,
    pub drink: Box<dyn HotDrink>,
}

impl fmt::Debug for Prepared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prepared")
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

pub trait HotDrinkFactory {
    fn prepare(&self, amount: u32) -> Prepared;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TeaFactory;

#[derive(Debug, Clone, Copy, Default)]
pub struct CoffeeFactory;

impl HotDrinkFactory for TeaFactory {
    fn prepare(&self, amount: u32) -> Prepared {
        Prepared {
            steps: format!("Put in tea bag, boil water, pour {amount}ml, enjoy!"),
            drink: Box::new(Tea),
        }
    }
}

impl HotDrinkFactory for CoffeeFactory {
    fn prepare(&self, amount: u32) -> Prepared {
        Prepared {
            steps: format!("Grind some beans, boil water, pour {amount}ml, enjoy!"),
            drink: Box::new(Coffee),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailableDrink {
    Coffee,
    Tea,
}

impl AvailableDrink {
    pub const ALL: [AvailableDrink; 2] = [AvailableDrink::Coffee, AvailableDrink::Tea];

    pub fn factory(self) -> Box<dyn HotDrinkFactory> {
        match self {
            AvailableDrink::Coffee => Box::new(CoffeeFactory),
            AvailableDrink::Tea => Box::new(TeaFactory),
        }
    }
}

impl fmt::Display for AvailableDrink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailableDrink::Coffee => f.write_str("Coffee"),
            AvailableDrink::Tea => f.write_str("Tea"),
        }
    }
}

/// Holds one factory per [`AvailableDrink`], in declaration order.
pub struct HotDrinkMachine {
    factories: Vec<(AvailableDrink, Box<dyn HotDrinkFactory>)>,
}

impl HotDrinkMachine {
    pub fn new() -> Self {
        let factories = AvailableDrink::ALL
            .into_iter()
            .map(|drink| (drink, drink.factory()))
            .collect();
        HotDrinkMachine { factories }
    }

    pub fn menu(&self) -> Vec<String> {
        self.factories
            .iter()
            .enumerate()
            .map(|(idx, (drink, _))| format!("{idx}: {drink}"))
            .collect()
    }

    pub fn make_drink(&self, index: usize, amount: u32) -> Result<Prepared> {
        let (drink, factory) =
            self.factories
                .get(index)
                .ok_or(PatternError::DrinkIndexOutOfRange {
                    index,
                    available: self.factories.len(),
                })?;
        debug!(%drink, amount, "preparing drink");
        Ok(factory.prepare(amount))
    }
}

impl Default for HotDrinkMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// The non-extensible alternative: one function that knows every drink.
pub fn make_drink(kind: &str) -> Result<Prepared> {
    match kind.to_ascii_lowercase().as_str() {
        "tea" => Ok(TeaFactory.prepare(200)),
        "coffee" => Ok(CoffeeFactory.prepare(50)),
        _ => {
            warn!(kind, "no factory for drink");
            Err(PatternError::UnknownDrink(kind.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_drinks_in_order() {
        let machine = HotDrinkMachine::new();
        assert_eq!(machine.menu(), vec!["0: Coffee", "1: Tea"]);
    }

    #[test]
    fn test_machine_uses_selected_factory() {
        let machine = HotDrinkMachine::new();

        let tea = machine.make_drink(1, 250).unwrap();
        assert_eq!(tea.steps, "Put in tea bag, boil water, pour 250ml, enjoy!");
        assert_eq!(tea.drink.consume(), "This tea is nice but I'd prefer it with milk");

        let coffee = machine.make_drink(0, 30).unwrap();
        assert_eq!(coffee.drink.consume(), "This coffee is delicious");
    }

    #[test]
    fn test_machine_rejects_bad_index() {
        let machine = HotDrinkMachine::new();
        let err = machine.make_drink(7, 100).unwrap_err();
        assert!(matches!(
            err,
            PatternError::DrinkIndexOutOfRange {
                index: 7,
                available: 2
            }
        ));
    }

    #[test]
    fn test_make_drink_by_name() {
        let tea = make_drink("Tea").unwrap();
        assert!(tea.steps.contains("200ml"));

        let coffee = make_drink("coffee").unwrap();
        assert!(coffee.steps.contains("50ml"));

        assert!(matches!(
            make_drink("cocoa"),
            Err(PatternError::UnknownDrink(kind)) if kind == "cocoa"
        ));
    }
}
