//! Progress notification port
//!
//! Defines the interface for reporting progress during a validation run.

/// Callback for progress updates during panel execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, log stream, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the first wave is dispatched
    fn on_run_start(&self, total_specialists: usize, total_waves: usize);

    /// Called when a wave starts
    fn on_wave_start(&self, wave: usize, specialists: usize);

    /// Called when a specialist's record is finalized within a wave
    fn on_specialist_complete(&self, specialist_id: &str, fallback: bool);

    /// Called when a wave completes
    fn on_wave_complete(&self, wave: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_run_start(&self, _total_specialists: usize, _total_waves: usize) {}
    fn on_wave_start(&self, _wave: usize, _specialists: usize) {}
    fn on_specialist_complete(&self, _specialist_id: &str, _fallback: bool) {}
    fn on_wave_complete(&self, _wave: usize) {}
}
