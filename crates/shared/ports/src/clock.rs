use zenith_core::Timestamp;

/// Port for wall-clock time
///
/// This allows the virtual clock to use different time sources:
/// - Real system time in production
/// - Manually driven time for deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
