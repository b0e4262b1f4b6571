//! Scan progress notification interface.
//!
//! The core reports progress through this capability instead of depending
//! on any concrete presentation. Implementations are invoked synchronously
//! from the scan's executing thread, many times per scan; the scanner
//! never inspects their return values or waits on side effects, so an
//! implementation that needs to touch a UI must marshal that work itself.

/// Receiver for scan progress and status notifications.
pub trait ScanObserver {
    /// Numeric progress: `current_step` of `total_steps`, with a message.
    fn on_progress(&self, current_step: usize, total_steps: usize, message: &str);

    /// Plain status message.
    fn on_status(&self, message: &str);
}

/// Observer that discards all notifications.
pub struct NullObserver;

impl ScanObserver for NullObserver {
    fn on_progress(&self, _current_step: usize, _total_steps: usize, _message: &str) {}

    fn on_status(&self, _message: &str) {}
}


#[cfg(test)]
mod tests {
    use super::*;
    use testing::RecordingObserver;

    #[test]
    fn null_observer_accepts_notifications() {
        let observer = NullObserver;
        observer.on_progress(1, 10, "working");
        observer.on_status("still working");
    }

    #[test]
    fn recording_observer_captures_in_order() {
        let observer = RecordingObserver::default();
        observer.on_progress(1, 2, "first");
        observer.on_progress(2, 2, "second");
        observer.on_status("done");

        let progress = observer.progress.lock().unwrap();
        assert_eq!(progress.len(), 2);
        assert_eq!(progress[0].0, 1);
        assert_eq!(progress[1].2, "second");
        assert_eq!(observer.statuses.lock().unwrap().as_slice(), ["done"]);
    }
}
