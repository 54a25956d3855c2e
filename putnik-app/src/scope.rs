//! Abandon-on-teardown guards for view-bound fetches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Ties an in-flight fetch to the lifetime of the view that wants its
/// result.
///
/// Tearing a view down abandons the scope; a fetch that completes
/// afterwards has its result discarded through [`ViewScope::admit`].
/// This is a discard flag, nothing more; it does not cancel the
/// underlying request.
///
/// # Examples
/// ```
/// use putnik_app::ViewScope;
///
/// let scope = ViewScope::new();
/// assert_eq!(scope.admit(1), Some(1));
/// scope.abandon();
/// assert_eq!(scope.admit(2), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    abandoned: Arc<AtomicBool>,
}

impl ViewScope {
    /// Create a live scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the scope abandoned. Clones share the flag, so abandoning
    /// any handle abandons them all.
    pub fn abandon(&self) {
        self.abandoned.store(true, Ordering::Relaxed);
    }

    /// Whether the scope has been abandoned.
    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        self.abandoned.load(Ordering::Relaxed)
    }

    /// Pass a fetch result through, unless the scope was abandoned in
    /// the meantime.
    #[must_use]
    pub fn admit<T>(&self, value: T) -> Option<T> {
        (!self.is_abandoned()).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_abandon_flag() {
        let scope = ViewScope::new();
        let handle = scope.clone();
        handle.abandon();
        assert!(scope.is_abandoned());
        assert_eq!(scope.admit("result"), None);
    }
}
