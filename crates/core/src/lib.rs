//! Core business logic for Culinaria.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! All domain types, attribution rules, and calculations live here.
//!
//! # Modules
//!
//! - `academic` - Cycles, modules, groups and teacher assignments
//! - `procurement` - Orders, catalog pricing and realized spend
//! - `sales` - Sales ledger records
//! - `expense` - Expense attribution reports and their cache
//! - `budget` - Event budgets and variance analysis

pub mod academic;
pub mod budget;
pub mod expense;
pub mod procurement;
pub mod sales;
