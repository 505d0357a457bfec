//! Item definitions
//!
//! The public item type, kept separate from any backend's own item type.

/// A value to store in the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Cache key
    pub key: String,

    /// Raw value bytes
    pub value: Vec<u8>,

    /// Expiration in seconds (0 = never expires)
    pub expiration: i32,
}

impl Item {
    /// Create an item that never expires
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            expiration: 0,
        }
    }

    /// Set the expiration (in seconds)
    pub fn with_expiration(mut self, seconds: i32) -> Self {
        self.expiration = seconds;
        self
    }
}
