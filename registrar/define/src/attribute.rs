//! String key/value attributes attached to modules and routes.

use serde::{Deserialize, Serialize};

/// A single `name = value` attribute.
///
/// Attribute lists are ordered; the generator preserves declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    /// Creates an attribute from anything string-like.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
