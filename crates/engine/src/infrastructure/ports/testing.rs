//! Testability port for injecting randomness.

use uuid::Uuid;

// =============================================================================
// Testability Ports
// =============================================================================

/// Source of randomness shared by concurrent requests.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform draw in `[0, 1)`.
    fn roll_unit(&self) -> f64;
    fn gen_uuid(&self) -> Uuid;
}
