//! Macro-generated test suite for `ResourceStore<TestBook>` contract validation.
//!
//! The `resource_store_tests!` macro generates a test module that validates
//! any `ResourceStore<TestBook>` implementation against the full contract:
//! the five CRUD operations, absence reporting through the return channel,
//! identity preservation, id allocation, and concurrent creates.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use restkit::storage::InMemoryResourceStore;
//!
//! resource_store_tests!(InMemoryResourceStore::<TestBook>::new());
//! ```

/// Generate a full `ResourceStore<TestBook>` conformance test suite.
///
/// `$factory` must be an expression evaluating to an instance implementing
/// `ResourceStore<TestBook> + Clone + 'static`. It is re-evaluated for each
/// test to ensure isolation.
#[macro_export]
macro_rules! resource_store_tests {
    ($factory:expr) => {
        mod resource_store_contract_tests {
            use super::*;
            use restkit::core::resource::Resource;
            use restkit::core::store::ResourceStore;

            #[tokio::test]
            async fn test_create_then_get_roundtrip() {
                let store = $factory;

                let created = store.create(book("Dune", "Herbert", 1965)).await.unwrap();
                assert!(created.id() > 0, "create must assign a positive id");

                let fetched = store.get(created.id()).await.unwrap();
                assert_eq!(fetched, Some(created));
            }

            #[tokio::test]
            async fn test_create_returns_entity_with_assigned_id() {
                let store = $factory;

                let mut payload = book("Dune", "Herbert", 1965);
                payload.id = 9999; // client-supplied ids are discarded

                let created = store.create(payload).await.unwrap();
                assert_ne!(created.id(), 9999);
                assert_eq!(created.title, "Dune");
            }

            #[tokio::test]
            async fn test_get_absent_reports_none_without_fault() {
                let store = $factory;
                assert_eq!(store.get(123_456).await.unwrap(), None);
            }

            #[tokio::test]
            async fn test_list_empty_store() {
                let store = $factory;
                assert!(store.list().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_returns_all_in_insertion_order() {
                let store = $factory;

                for (title, year) in [("A", 2000), ("B", 2001), ("C", 2002)] {
                    store.create(book(title, "X", year)).await.unwrap();
                }

                let titles: Vec<_> = store
                    .list()
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|b| b.title)
                    .collect();
                assert_eq!(titles, vec!["A", "B", "C"]);
            }

            #[tokio::test]
            async fn test_update_replaces_fields_and_preserves_identity() {
                let store = $factory;
                let created = store.create(book("Dune", "Herbert", 1965)).await.unwrap();

                let mut replacement = book("Dune Messiah", "Herbert", 1969);
                replacement.id = created.id();

                let updated = store
                    .update(created.id(), replacement)
                    .await
                    .unwrap()
                    .expect("existing id must be updatable");
                assert_eq!(updated.id(), created.id());
                assert_eq!(updated.title, "Dune Messiah");
                assert_eq!(updated.year, 1969);

                let fetched = store.get(created.id()).await.unwrap().unwrap();
                assert_eq!(fetched.title, "Dune Messiah");
            }

            #[tokio::test]
            async fn test_update_never_alters_identity_field() {
                let store = $factory;
                let created = store.create(book("Dune", "Herbert", 1965)).await.unwrap();

                let mut replacement = book("Renamed", "Herbert", 1965);
                replacement.id = created.id() + 1000; // stored identity must win

                let updated = store.update(created.id(), replacement).await.unwrap().unwrap();
                assert_eq!(updated.id(), created.id());
            }

            #[tokio::test]
            async fn test_update_absent_reports_none() {
                let store = $factory;
                let result = store.update(123_456, book("Ghost", "Nobody", 0)).await.unwrap();
                assert!(result.is_none());
            }

            #[tokio::test]
            async fn test_delete_reports_whether_removal_occurred() {
                let store = $factory;
                let created = store.create(book("Dune", "Herbert", 1965)).await.unwrap();

                assert!(store.delete(created.id()).await.unwrap());
                assert_eq!(store.get(created.id()).await.unwrap(), None);
            }

            #[tokio::test]
            async fn test_delete_is_idempotent_in_effect() {
                let store = $factory;
                let created = store.create(book("Dune", "Herbert", 1965)).await.unwrap();
                let keeper = store.create(book("Emma", "Austen", 1815)).await.unwrap();

                assert!(store.delete(created.id()).await.unwrap());
                assert!(!store.delete(created.id()).await.unwrap());

                // the second delete left the rest of the store untouched
                let remaining = store.list().await.unwrap();
                assert_eq!(remaining.len(), 1);
                assert_eq!(remaining[0].id(), keeper.id());
            }

            #[tokio::test]
            async fn test_delete_absent_reports_false_without_fault() {
                let store = $factory;
                assert!(!store.delete(123_456).await.unwrap());
            }

            #[tokio::test]
            async fn test_ids_are_not_reused_after_delete() {
                let store = $factory;

                let first = store.create(book("A", "X", 2000)).await.unwrap();
                assert!(store.delete(first.id()).await.unwrap());

                let second = store.create(book("B", "X", 2001)).await.unwrap();
                assert_ne!(second.id(), first.id());
                assert!(second.id() > first.id());
            }

            #[tokio::test]
            async fn test_concurrent_creates_assign_distinct_ids() {
                let store = $factory;

                let mut handles = Vec::new();
                for i in 0..16 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        store
                            .create(book(&format!("book-{i}"), "X", 2000 + i))
                            .await
                            .unwrap()
                            .id()
                    }));
                }

                let mut ids = Vec::new();
                for handle in handles {
                    ids.push(handle.await.unwrap());
                }
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), 16, "every concurrent create must win a distinct id");
            }
        }
    };
}
