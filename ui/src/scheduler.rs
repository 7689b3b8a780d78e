//! Debounced hand-off from the editor buffer to the preview

use formsmith_core::debounce::Debouncer;
use gloo_timers::callback::Timeout;

/// Holds the latest unrendered text and the browser timer that will release it.
///
/// Dropping a [`Timeout`] cancels it, so replacing `timer` is all it takes to
/// restart the quiet period on every keystroke.
pub struct PreviewScheduler {
    debouncer: Debouncer<String>,
    timer: Option<Timeout>,
}

impl PreviewScheduler {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            debouncer: Debouncer::new(delay_ms),
            timer: None,
        }
    }

    pub fn set_delay(&mut self, delay_ms: u64) {
        self.debouncer.set_delay(delay_ms);
    }

    /// Queue `text` for the preview.
    ///
    /// With a zero delay the text comes straight back for immediate use.
    /// Otherwise `on_due` runs once the editor has been quiet long enough and
    /// should call [`PreviewScheduler::fire`].
    pub fn schedule(&mut self, text: String, on_due: impl FnOnce() + 'static) -> Option<String> {
        let delay = self.debouncer.delay_ms();
        if delay == 0 {
            // nothing queued under an earlier, longer delay may land after this
            self.debouncer.cancel();
            self.timer = None;
            return Some(text);
        }

        self.debouncer.push(js_sys::Date::now() as u64, text);

        let millis = u32::try_from(delay).unwrap_or(u32::MAX);
        self.timer = Some(Timeout::new(millis, on_due));
        None
    }

    /// Release the pending text. Must not touch `timer`: this runs inside its callback.
    pub fn fire(&mut self) -> Option<String> {
        self.debouncer.flush()
    }
}
