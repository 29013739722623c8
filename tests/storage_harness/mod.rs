//! Shared test harness for storage backend testing
//!
//! Provides `TestBook`, a small resource type used by the generic
//! `resource_store_tests!` contract suite, plus helpers for creating
//! test data.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

pub mod resource_store_tests;

restkit::resource!(TestBook, "book", "books", {
    title: String,
    author: String,
    year: i32,
});

/// Build a book payload with id 0 (store-assigned on create)
pub fn book(title: &str, author: &str, year: i32) -> TestBook {
    TestBook {
        id: 0,
        title: title.to_string(),
        author: author.to_string(),
        year,
    }
}
