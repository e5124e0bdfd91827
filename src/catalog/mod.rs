//! The financial product catalog
//!
//! [`FinancialProduct`] is the record listed by the catalog's list view. It
//! can only be built with non-blank text fields and valid dates; raw form or
//! API input arrives as a [`ProductDraft`] and is converted with `TryFrom`.

pub mod product;

pub use product::{FinancialProduct, ProductDraft};
