//! Shared test harness for data provider testing
//!
//! Provides product fixtures, a provider whose calls can be made to fail, and
//! the `data_provider_tests!` conformance suite.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod provider_harness;
//! use provider_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod data_provider_tests;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use catalog::prelude::*;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// A valid product with the given id and name
pub fn product(id: &str, name: &str) -> FinancialProduct {
    FinancialProduct::new(
        id,
        name,
        format!("{} description", name),
        format!("https://logos.example.com/{}.png", id),
        date(2025, 1, 1),
        date(2026, 1, 1),
    )
    .expect("valid fixture product")
}

/// A product with explicit description and release date
pub fn product_with(
    id: &str,
    name: &str,
    description: &str,
    release: NaiveDate,
) -> FinancialProduct {
    FinancialProduct::new(id, name, description, "logo.png", release, date(2030, 1, 1))
        .expect("valid fixture product")
}

/// `Product 1` .. `Product n` with ids `p-1` .. `p-n`
pub fn numbered_products(n: usize) -> Vec<FinancialProduct> {
    (1..=n)
        .map(|i| product(&format!("p-{}", i), &format!("Product {}", i)))
        .collect()
}

pub fn draft(id: &str, name: &str) -> ProductDraft {
    ProductDraft {
        id: id.to_string(),
        name: name.to_string(),
        description: "Drafted product".to_string(),
        logo: "logo.png".to_string(),
        date_release: "2025-06-01".to_string(),
        date_revision: "2026-06-01".to_string(),
    }
}

pub fn names(items: &[FinancialProduct]) -> Vec<&str> {
    items.iter().map(|p| p.name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// FlakyProvider: in-memory provider with switchable failures
// ---------------------------------------------------------------------------

/// Wraps an in-memory provider; while offline every call fails with the
/// configured message. Each call's name is recorded.
#[derive(Default)]
pub struct FlakyProvider {
    pub inner: InMemoryDataProvider<FinancialProduct>,
    offline: AtomicBool,
    message: Mutex<String>,
    calls: Mutex<Vec<String>>,
}

impl FlakyProvider {
    pub fn with_items(items: Vec<FinancialProduct>) -> Self {
        Self {
            inner: InMemoryDataProvider::with_items(items),
            ..Self::default()
        }
    }

    pub fn go_offline(&self, message: &str) {
        *self.message.lock().unwrap() = message.to_string();
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn go_online(&self) {
        self.offline.store(false, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn enter(&self, call: &str) -> Result<()> {
        self.calls.lock().unwrap().push(call.to_string());
        if self.offline.load(Ordering::SeqCst) {
            Err(anyhow!("{}", self.message.lock().unwrap()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DataProvider<FinancialProduct> for FlakyProvider {
    async fn get_all(&self) -> Result<Vec<FinancialProduct>> {
        self.enter("get_all")?;
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: &str) -> Result<FinancialProduct> {
        self.enter("get_by_id")?;
        self.inner.get_by_id(id).await
    }

    async fn create(&self, entity: FinancialProduct) -> Result<()> {
        self.enter("create")?;
        self.inner.create(entity).await
    }

    async fn update(&self, entity: FinancialProduct) -> Result<()> {
        self.enter("update")?;
        self.inner.update(entity).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.enter("delete")?;
        self.inner.delete(id).await
    }
}
