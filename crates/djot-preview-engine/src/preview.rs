//! # Live Preview
//!
//! Debounced re-rendering for an editor preview. Edits are coalesced in a
//! single-slot [`PendingEdit`]: only the latest text is kept, and it is
//! handed out once the source has been quiet for the debounce interval.
//! A [`PreviewSession`] serves the full preview page once, then fragment
//! updates for the page's content region.
//!
//! Time is passed in explicitly, so callers own the clock and no thread or
//! timer lives here.

use std::{
    sync::{Mutex, PoisonError},
    time::{Duration, Instant},
};

use crate::{
    convert::Converter,
    export::{Theme, preview_shell_with_css},
};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Default)]
struct Slot {
    text: Option<String>,
    last_submit: Option<Instant>,
}

/// Latest-input cell. A newer submit replaces any text not yet taken.
#[derive(Debug)]
pub struct PendingEdit {
    slot: Mutex<Slot>,
    interval: Duration,
}

impl PendingEdit {
    pub fn new(interval: Duration) -> Self {
        Self {
            slot: Mutex::new(Slot::default()),
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stores `text`, replacing any pending text, and restarts the interval.
    pub fn submit(&self, text: impl Into<String>, now: Instant) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.text.is_some() {
            log::trace!("pending edit superseded");
        }
        slot.text = Some(text.into());
        slot.last_submit = Some(now);
    }

    /// Takes the pending text if the interval has elapsed since the last
    /// submit. The slot is empty afterwards, so each text is taken once.
    pub fn take_ready(&self, now: Instant) -> Option<String> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        let submitted = slot.last_submit?;
        if now.saturating_duration_since(submitted) < self.interval {
            return None;
        }
        slot.last_submit = None;
        slot.text.take()
    }

    pub fn is_pending(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .text
            .is_some()
    }
}

impl Default for PendingEdit {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

/// What to send to an open preview page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewUpdate {
    /// Replacement HTML for the content region, passed to `updateContent`.
    Fragment(String),
}

#[derive(Debug)]
pub struct PreviewSession {
    converter: Converter,
    theme: Theme,
    pending: PendingEdit,
    extra_css: Option<String>,
}

impl PreviewSession {
    pub fn new(converter: Converter, theme: Theme, interval: Duration) -> Self {
        Self {
            converter,
            theme,
            pending: PendingEdit::new(interval),
            extra_css: None,
        }
    }

    /// Adds a stylesheet after the built-in one in the shell.
    pub fn with_extra_css(mut self, css: Option<String>) -> Self {
        self.extra_css = css;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Takes effect on the next [`open`](Self::open); an open page switches
    /// with its `setTheme` function.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// The complete preview page for `source`.
    pub fn open(&self, source: &str) -> String {
        let conversion = self.converter.convert(source);
        if let Some(err) = &conversion.error {
            log::warn!("preview opened with fallback output: {err}");
        }
        preview_shell_with_css(&conversion.html, self.theme, self.extra_css.as_deref())
    }

    /// Queues `source` for the next ready [`tick`](Self::tick).
    pub fn edit(&self, source: impl Into<String>, now: Instant) {
        self.pending.submit(source, now);
    }

    /// Converts the latest queued source once the debounce interval has
    /// passed since the last edit.
    pub fn tick(&self, now: Instant) -> Option<PreviewUpdate> {
        let source = self.pending.take_ready(now)?;
        log::debug!("re-rendering preview ({} bytes)", source.len());
        Some(PreviewUpdate::Fragment(self.converter.to_html(&source)))
    }

    pub fn has_pending_edit(&self) -> bool {
        self.pending.is_pending()
    }
}
