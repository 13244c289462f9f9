//! Builder: piecewise construction of a `Computer`.

use std::fmt;

/// Renders an unset part as `None`.
pub(crate) fn or_none(value: &Option<impl fmt::Display>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "None".to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Computer {
    cpu: Option<String>,
    ram: Option<String>,
    storage: Option<String>,
}

impl Computer {
    pub fn builder() -> ComputerBuilder {
        ComputerBuilder::new()
    }

    pub fn cpu(&self) -> Option<&str> {
        self.cpu.as_deref()
    }

    pub fn ram(&self) -> Option<&str> {
        self.ram.as_deref()
    }

    pub fn storage(&self) -> Option<&str> {
        self.storage.as_deref()
    }

    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU: {}, RAM: {}, Storage: {}",
            or_none(&self.cpu),
            or_none(&self.ram),
            or_none(&self.storage)
        )
    }
}

/// Consuming builder: every setter takes `self` and hands it back, so parts
/// can be set in any order and a later call overwrites an earlier one.
#[derive(Debug, Default)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct ComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        ComputerBuilder::default()
    }

    pub fn cpu(mut self, cpu: impl Into<String>) -> Self {
        self.computer.cpu = Some(cpu.into());
        self
    }

    pub fn ram(mut self, ram: impl Into<String>) -> Self {
        self.computer.ram = Some(ram.into());
        self
    }

    pub fn storage(mut self, storage: impl Into<String>) -> Self {
        self.computer.storage = Some(storage.into());
        self
    }

    pub fn build(self) -> Computer {
        self.computer
    }
}
