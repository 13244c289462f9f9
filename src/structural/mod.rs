//! Structural patterns: composing types into larger structures, usually by
//! wrapping a value behind the same interface it already exposes.

pub mod decorator;
