//! Keyed dispatch with an optional fallback.

use indexmap::IndexMap;

use crate::error::DataError;

type Handler<'a, T> = Box<dyn Fn(&str) -> T + 'a>;

/// Switch-like table of string keys to handlers.
///
/// ```
/// use nucleus_data::Flick;
///
/// let flick = Flick::new()
///     .on("ping", |_| "pong".to_string())
///     .otherwise(|key| format!("unknown: {key}"));
/// assert_eq!(flick.go("ping").unwrap(), "pong");
/// assert_eq!(flick.go("other").unwrap(), "unknown: other");
/// ```
pub struct Flick<'a, T> {
    handlers: IndexMap<String, Handler<'a, T>>,
    fallback: Option<Handler<'a, T>>,
}

impl<'a, T> Flick<'a, T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: IndexMap::new(),
            fallback: None,
        }
    }

    /// Register a handler; a later registration for the same key replaces it.
    pub fn on(mut self, key: impl Into<String>, handler: impl Fn(&str) -> T + 'a) -> Self {
        self.handlers.insert(key.into(), Box::new(handler));
        self
    }

    pub fn otherwise(mut self, handler: impl Fn(&str) -> T + 'a) -> Self {
        self.fallback = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn handles(&self, key: &str) -> bool {
        self.handlers.contains_key(key) || self.fallback.is_some()
    }

    /// Run the handler for `key`, the fallback, or fail with the offending key.
    pub fn go(&self, key: &str) -> Result<T, DataError> {
        if let Some(handler) = self.handlers.get(key) {
            return Ok(handler(key));
        }
        match &self.fallback {
            Some(fallback) => Ok(fallback(key)),
            None => {
                tracing::debug!(key, "no handler registered");
                Err(DataError::UnknownKey {
                    key: key.to_string(),
                })
            }
        }
    }
}

impl<T> Default for Flick<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}
