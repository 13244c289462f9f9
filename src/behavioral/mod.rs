//! Behavioral patterns: how independent units interact and hand off work.

pub mod strategy;
