pub mod bst_map;

pub use bst_map::BstMap;

pub mod bst_set;

pub use bst_set::BstSet;

pub mod bst_multiset;

pub use bst_multiset::BstMultiset;

mod tree;
