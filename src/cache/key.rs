//! Key Canonicalization Module
//!
//! Converts arbitrary serializable key values into deterministic string
//! identifiers used as the actual map keys.

use serde::Serialize;

use crate::error::Result;

// == Canonicalize ==
/// Derives the canonical string form of a key.
///
/// Two structurally equal keys always produce byte-identical output; this is
/// the cache's notion of key equality. The conversion is pure: no side
/// effects, identical output across calls.
///
/// Keys containing unordered collections (e.g. `HashMap`) have no stable
/// serialized form; use ordered shapes such as structs, tuples or `BTreeMap`.
///
/// # Errors
/// Returns [`CacheError::KeySerialization`](crate::error::CacheError) when
/// the key's `Serialize` implementation fails.
pub fn canonicalize<K>(key: &K) -> Result<String>
where
    K: Serialize + ?Sized,
{
    Ok(serde_json::to_string(key)?)
}
