//! Registry configuration.

use crate::InterfaceRegistry;

/// Builder for [`InterfaceRegistry`].
///
/// ```
/// use nativebridge_registry::RegistryConfig;
///
/// let registry = RegistryConfig::new()
///     .with_capacity(32)
///     .warn_on_collision(true)
///     .build();
/// assert!(registry.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    pub(crate) capacity: usize,
    pub(crate) warn_on_collision: bool,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the name map for `capacity` interfaces.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Log name collisions at `warn` instead of `debug`.
    ///
    /// Collisions are still resolved last-write-wins.
    pub fn warn_on_collision(mut self, enabled: bool) -> Self {
        self.warn_on_collision = enabled;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn warns_on_collision(&self) -> bool {
        self.warn_on_collision
    }

    pub fn build(self) -> InterfaceRegistry {
        InterfaceRegistry::with_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RegistryConfig::new();
        assert_eq!(config.capacity(), 0);
        assert!(!config.warns_on_collision());
    }

    #[test]
    fn builder_chain() {
        let config = RegistryConfig::new().with_capacity(8).warn_on_collision(true);
        assert_eq!(config.capacity(), 8);
        assert!(config.warns_on_collision());
        assert_eq!(config.clone().build().config(), &config);
    }
}
