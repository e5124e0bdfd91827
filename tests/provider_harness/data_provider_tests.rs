//! Macro-generated test suite for `DataProvider<FinancialProduct>` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod provider_harness;
//!
//! use provider_harness::*;
//!
//! data_provider_tests!(InMemoryDataProvider::<FinancialProduct>::new());
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_and_get` — create then retrieve, verify all fields
//! - `test_get_nonexistent` — unknown id is an error
//! - `test_get_all_empty` — empty store returns empty vec
//! - `test_get_all_multiple` — five creates, all five listed in order
//! - `test_update_existing` — mutate name, verify persisted
//! - `test_update_nonexistent` — update unknown id returns Err
//! - `test_delete_existing` — delete then get fails
//! - `test_delete_nonexistent` — delete unknown id returns Err
//!
//! ## Edge Cases
//! - `test_create_duplicate_id` — second create with the same id fails
//! - `test_concurrent_access` — parallel creates from spawned tasks

/// Generate a full `DataProvider<FinancialProduct>` conformance test suite.
///
/// `$factory` is re-evaluated for each test. For the concurrent access test
/// the provider must also be `Clone + 'static` with shared state.
#[macro_export]
macro_rules! data_provider_tests {
    ($factory:expr) => {
        mod data_provider_contract_tests {
            use super::*;
            use catalog::core::error::CatalogError;

            // ==================================================================
            // CRUD — Create & Get
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get() {
                let provider = $factory;
                let entity = product("fund-1", "Mutual fund");

                provider.create(entity.clone()).await.unwrap();

                let retrieved = provider.get_by_id("fund-1").await.unwrap();
                assert_eq!(retrieved, entity);
                assert_eq!(retrieved.id(), "fund-1");
                assert_eq!(retrieved.name, "Mutual fund");
                assert_eq!(retrieved.date_release, date(2025, 1, 1));
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let provider = $factory;

                let err = provider.get_by_id("missing").await.unwrap_err();
                assert!(matches!(
                    err.downcast_ref::<CatalogError>(),
                    Some(CatalogError::NotFound { .. })
                ));
            }

            // ==================================================================
            // CRUD — Get all
            // ==================================================================

            #[tokio::test]
            async fn test_get_all_empty() {
                let provider = $factory;
                assert!(provider.get_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_get_all_multiple() {
                let provider = $factory;
                let batch = numbered_products(5);

                for entity in batch.clone() {
                    provider.create(entity).await.unwrap();
                }

                let all = provider.get_all().await.unwrap();
                assert_eq!(all, batch, "get_all should list creates in order");
            }

            // ==================================================================
            // CRUD — Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_existing() {
                let provider = $factory;
                let mut entity = product("acc-1", "Savings account");
                provider.create(entity.clone()).await.unwrap();

                entity.name = "Premium savings account".to_string();
                entity.date_revision = date(2027, 5, 1);
                provider.update(entity.clone()).await.unwrap();

                let retrieved = provider.get_by_id("acc-1").await.unwrap();
                assert_eq!(retrieved.name, "Premium savings account");
                assert_eq!(retrieved.date_revision, date(2027, 5, 1));
                assert_eq!(provider.get_all().await.unwrap().len(), 1);
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let provider = $factory;
                let result = provider.update(product("ghost", "Ghost product")).await;
                assert!(result.is_err(), "Updating an unknown id should fail");
                assert!(provider.get_all().await.unwrap().is_empty());
            }

            // ==================================================================
            // CRUD — Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let provider = $factory;
                provider.create(product("del-1", "To delete")).await.unwrap();

                provider.delete("del-1").await.unwrap();

                assert!(provider.get_by_id("del-1").await.is_err());
                assert!(provider.get_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let provider = $factory;
                assert!(provider.delete("missing").await.is_err());
            }

            // ==================================================================
            // Edge cases
            // ==================================================================

            #[tokio::test]
            async fn test_create_duplicate_id() {
                let provider = $factory;
                provider.create(product("dup", "First")).await.unwrap();

                let err = provider.create(product("dup", "Second")).await.unwrap_err();
                assert!(matches!(
                    err.downcast_ref::<CatalogError>(),
                    Some(CatalogError::AlreadyExists { .. })
                ));
                assert_eq!(provider.get_by_id("dup").await.unwrap().name, "First");
            }

            #[tokio::test]
            async fn test_concurrent_access() {
                let provider = $factory;
                let mut handles = Vec::new();

                for i in 0..10 {
                    let provider = provider.clone();
                    handles.push(tokio::spawn(async move {
                        provider
                            .create(product(&format!("c-{}", i), &format!("Concurrent {}", i)))
                            .await
                    }));
                }

                for handle in handles {
                    handle.await.unwrap().unwrap();
                }

                assert_eq!(provider.get_all().await.unwrap().len(), 10);
            }
        }
    };
}
