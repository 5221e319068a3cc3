//! Cross-collection name joiner.
//!
//! List views enrich raw rows with display names from a reference table.
//! The reference table is loaded in full, indexed by id, and the primary
//! rows are walked once -- O(N + M) per request, nothing cached between
//! requests. Dangling or absent foreign keys resolve to a deterministic
//! `"Unknown <Entity>"` placeholder instead of failing the request.

use std::collections::HashMap;

use crate::types::DbId;

/// Entity label used for fruit name fallbacks.
pub const ENTITY_FRUIT: &str = "Fruit";

/// Entity label used for location name fallbacks.
pub const ENTITY_LOCATION: &str = "Location";

/// Build an id → name index from a reference table.
pub fn name_index<I>(rows: I) -> HashMap<DbId, String>
where
    I: IntoIterator<Item = (DbId, String)>,
{
    rows.into_iter().collect()
}

/// Resolve a foreign key to a display name.
///
/// A `None` key and a key missing from the index both resolve to
/// `"Unknown <entity>"`.
pub fn resolve_name(index: &HashMap<DbId, String>, id: Option<DbId>, entity: &str) -> String {
    id.and_then(|id| index.get(&id))
        .cloned()
        .unwrap_or_else(|| format!("Unknown {entity}"))
}
