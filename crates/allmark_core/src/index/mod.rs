//! Tag index over repository items.
//!
//! # Responsibility
//! - Maintain the reverse mapping from tags to the items that carry them.
//!
//! # Invariants
//! - No tag is retained once its last item has been removed.

pub mod item_list;
pub mod tag_map;
