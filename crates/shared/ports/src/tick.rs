use async_trait::async_trait;

/// Port for frame pacing
///
/// Both the live clock timer and the slew animation loop wait on a tick source
/// instead of a concrete timer, so tests can substitute a manually fired one.
#[async_trait]
pub trait TickSource: Send {
    /// Wait for the next tick
    ///
    /// Returns `false` once the source is exhausted; callers stop looping then.
    async fn tick(&mut self) -> bool;
}
