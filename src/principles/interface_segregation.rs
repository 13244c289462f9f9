//! Interface segregation: a fat `Machine` trait forces devices to stub out
//! operations they cannot perform. Granular traits let each device implement
//! only what it supports.

use crate::error::{PatternError, Result};

pub trait Machine {
    fn print(&self, document: &str) -> Result<String>;
    fn fax(&self, document: &str) -> Result<String>;
    fn scan(&self, document: &str) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MultiFunctionPrinter;

impl Machine for MultiFunctionPrinter {
    fn print(&self, document: &str) -> Result<String> {
        Ok(format!("Printing: {document}"))
    }

    fn fax(&self, document: &str) -> Result<String> {
        Ok(format!("Faxing: {document}"))
    }

    fn scan(&self, document: &str) -> Result<String> {
        Ok(format!("Scanning: {document}"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OldFashionedPrinter;

impl OldFashionedPrinter {
    const NAME: &'static str = "OldFashionedPrinter";
}

impl Machine for OldFashionedPrinter {
    fn print(&self, document: &str) -> Result<String> {
        Ok(format!("Printing (old-fashioned): {document}"))
    }

    fn fax(&self, _document: &str) -> Result<String> {
        Err(PatternError::unsupported(Self::NAME, "fax"))
    }

    fn scan(&self, _document: &str) -> Result<String> {
        Err(PatternError::unsupported(Self::NAME, "scan"))
    }
}

pub trait Printer {
    fn print(&self, document: &str) -> String;
}

pub trait Scanner {
    fn scan(&self, document: &str) -> String;
}

pub trait Fax {
    fn fax(&self, document: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MyPrinter;

impl Printer for MyPrinter {
    fn print(&self, document: &str) -> String {
        format!("Printing: {document}")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Photocopier;

impl Printer for Photocopier {
    fn print(&self, document: &str) -> String {
        format!("Photocopier printing: {document}")
    }
}

impl Scanner for Photocopier {
    fn scan(&self, document: &str) -> String {
        format!("Photocopier scanning: {document}")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FaxMachine;

impl Fax for FaxMachine {
    fn fax(&self, document: &str) -> String {
        format!("Faxing: {document}")
    }
}

/// Copying needs both capabilities, and nothing more.
pub fn copy<D: Printer + Scanner>(device: &D, document: &str) -> [String; 2] {
    [device.scan(document), device.print(document)]
}
