use std::collections::HashMap;

/// Provides storage for values that a [`Template`][crate::Template] can be
/// filled with.
///
/// A `Store` is read only from the engine's point of view; it is never
/// retained beyond a single fill call.
pub struct Store {
    data: HashMap<String, String>,
}

impl Store {
    /// Create a new Store.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Insert the value into the Store.
    #[inline]
    pub fn insert<S, T>(&mut self, key: S, value: T)
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.data.insert(key.into(), value.into());
    }

    /// Insert the value into the Store.
    ///
    /// Returns the Store, so additional methods may be chained.
    #[inline]
    pub fn with<S, T>(mut self, key: S, value: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.insert(key, value);
        self
    }

    /// Get the value of the given key, if any.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(|value| value.as_str())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, String>> for Store {
    fn from(data: HashMap<String, String>) -> Self {
        Self { data }
    }
}
