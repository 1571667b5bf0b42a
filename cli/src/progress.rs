//! Console progress reporting
//!
//! Writes to stderr so the report on stdout stays pipeable.

use panel_application::ProgressNotifier;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct ProgressReporter {
    total_specialists: AtomicUsize,
    total_waves: AtomicUsize,
    completed: AtomicUsize,
    fallbacks: AtomicUsize,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            total_specialists: AtomicUsize::new(0),
            total_waves: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_run_start(&self, total_specialists: usize, total_waves: usize) {
        self.total_specialists
            .store(total_specialists, Ordering::SeqCst);
        self.total_waves.store(total_waves, Ordering::SeqCst);
        eprintln!("Dispatching {total_specialists} specialists across {total_waves} waves");
    }

    fn on_wave_start(&self, wave: usize, specialists: usize) {
        eprintln!(
            "Wave {}/{}: {} specialists",
            wave + 1,
            self.total_waves.load(Ordering::SeqCst),
            specialists
        );
    }

    fn on_specialist_complete(&self, _specialist_id: &str, fallback: bool) {
        self.completed.fetch_add(1, Ordering::SeqCst);
        if fallback {
            self.fallbacks.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn on_wave_complete(&self, _wave: usize) {
        let completed = self.completed.load(Ordering::SeqCst);
        let total = self.total_specialists.load(Ordering::SeqCst);
        let fallbacks = self.fallbacks.load(Ordering::SeqCst);
        if fallbacks > 0 {
            eprintln!("  {completed}/{total} done ({fallbacks} fallback)");
        } else {
            eprintln!("  {completed}/{total} done");
        }
    }
}
