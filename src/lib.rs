#![deny(missing_docs)]

//! Ordered containers backed by an unbalanced binary search tree, in particular
//! [`collections::BstMap`], [`collections::BstSet`] and [`collections::BstMultiset`].
//!
//! The tree keeps a sentinel node one past the largest element and never
//! rebalances, so operations are O(height): O(log n) for well-mixed insertion
//! orders, O(n) in the worst case (sorted insertion). In exchange the engine
//! supports moving nodes between containers without copying their entries
//! ( see [`collections::BstMap::merge`] and friends ).

//!# Features
//!
//! This crate supports the following cargo features:
//! - `serde` : enables serialisation of [`collections::BstMap`], [`collections::BstSet`]
//!   and [`collections::BstMultiset`] via serde crate.

/// Containers.
pub mod collections;
