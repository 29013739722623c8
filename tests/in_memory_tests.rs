//! Integration tests for InMemoryResourceStore using the storage test harness.
//!
//! This file invokes `resource_store_tests!` to validate that
//! InMemoryResourceStore fully conforms to the ResourceStore<T> contract.

#[macro_use]
mod storage_harness;

use restkit::storage::InMemoryResourceStore;
use storage_harness::*;

resource_store_tests!(InMemoryResourceStore::<TestBook>::new());
