//! Core invoicing types, identification validation and totals.
//!
//! This module provides cédula/RUC validation, the discount and IVA totals
//! engine, and the form-level data types the rest of the crate builds on.

mod builder;
mod error;
mod identification;
pub mod input;
mod numbering;
pub mod provinces;
mod totals;
mod types;

pub use builder::*;
pub use error::*;
pub use identification::*;
pub use numbering::*;
pub use provinces::{is_known_province, province_name};
pub use totals::*;
pub use types::*;
