#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # savora-entities
//!
//! Reusable, agnostic domain entities for Savora.
//!
//! Plain data types without any I/O. Use cases and state
//! transitions live in `savora-core`.

pub mod city;
pub mod id;
pub mod page;
pub mod reservation;
pub mod restaurant;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
