//! Host-owned on/off switch observed by animators
//!
//! A `Binding` is a shared boolean cell. The host flips it, then asks the
//! animator to `sync()` so the change is picked up as an edge.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone)]
pub struct Binding {
    value: Arc<AtomicBool>,
    writable: bool,
}

impl Default for Binding {
    fn default() -> Self {
        Self::constant(true)
    }
}

impl Binding {
    /// Create a writable binding
    pub fn new(value: bool) -> Self {
        Self {
            value: Arc::new(AtomicBool::new(value)),
            writable: true,
        }
    }

    /// Create a binding that ignores writes
    pub fn constant(value: bool) -> Self {
        Self {
            value: Arc::new(AtomicBool::new(value)),
            writable: false,
        }
    }

    pub fn get(&self) -> bool {
        self.value.load(Ordering::Acquire)
    }

    pub fn set(&self, value: bool) {
        if !self.writable {
            tracing::trace!("Ignoring write to constant binding");
            return;
        }
        self.value.store(value, Ordering::Release);
    }

    /// Flip the value, returning the new one
    pub fn toggle(&self) -> bool {
        let next = !self.get();
        self.set(next);
        self.get()
    }

    pub fn is_constant(&self) -> bool {
        !self.writable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_value() {
        let host = Binding::new(false);
        let observed = host.clone();
        host.set(true);
        assert!(observed.get());
        assert!(!host.toggle());
        assert!(!observed.get());
    }

    #[test]
    fn test_constant_ignores_writes() {
        let binding = Binding::default();
        assert!(binding.is_constant());
        binding.set(false);
        assert!(binding.get());
        assert!(binding.toggle(), "toggle on a constant keeps the value");
    }
}
