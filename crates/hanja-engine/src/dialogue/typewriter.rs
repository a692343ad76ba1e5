//! Typewriter reveal: discloses a string one character per interval.
//!
//! Driven by the game tick rather than by timers. A reveal run is identified
//! by a [`RevealHandle`]; at most one reveal is ever pending, and cancelling
//! drops it synchronously, so a stale reveal can never land after
//! [`Typewriter::force_complete`].

use serde::Deserialize;

/// Identifies one reveal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealHandle(u32);

/// Progress reported by the typewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    /// `chars` characters of the text are now visible.
    Revealed { handle: RevealHandle, chars: usize },
    /// The whole text is visible. Emitted exactly once per run.
    Completed { handle: RevealHandle },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Milliseconds between two revealed characters (default: 50).
    pub interval_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self { interval_ms: 50 }
    }
}

impl TypewriterConfig {
    pub fn interval_secs(&self) -> f32 {
        self.interval_ms as f32 / 1000.0
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingReveal {
    handle: RevealHandle,
    /// Seconds until the next character shows.
    remaining: f32,
}

#[derive(Debug, Default)]
pub struct Typewriter {
    text: String,
    /// Byte offset just past the last revealed character.
    revealed_end: usize,
    revealed_chars: usize,
    interval: f32,
    pending: Option<PendingReveal>,
    next_handle: u32,
}

impl Typewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin revealing `text`, one character every `interval` seconds.
    ///
    /// Any run in progress is cancelled first. An empty text completes
    /// immediately without reveal events.
    pub fn start(&mut self, text: &str, interval: f32, out: &mut Vec<RevealEvent>) -> RevealHandle {
        self.pending = None;
        self.next_handle = self.next_handle.wrapping_add(1);
        let handle = RevealHandle(self.next_handle);

        self.text.clear();
        self.text.push_str(text);
        self.revealed_end = 0;
        self.revealed_chars = 0;
        self.interval = interval.max(0.0);

        if text.is_empty() {
            out.push(RevealEvent::Completed { handle });
        } else {
            self.pending = Some(PendingReveal { handle, remaining: self.interval });
        }
        handle
    }

    /// Advance the clock by `dt` seconds, revealing every character whose
    /// time has come, in order.
    pub fn tick(&mut self, dt: f32, out: &mut Vec<RevealEvent>) {
        let Some(mut pending) = self.pending else {
            return;
        };

        pending.remaining -= dt.max(0.0);
        while pending.remaining <= 0.0 {
            self.reveal_next();
            out.push(RevealEvent::Revealed {
                handle: pending.handle,
                chars: self.revealed_chars,
            });

            if self.revealed_end >= self.text.len() {
                self.pending = None;
                out.push(RevealEvent::Completed { handle: pending.handle });
                return;
            }
            pending.remaining += self.interval;
        }
        self.pending = Some(pending);
    }

    /// Stop future reveals for `handle`. No-op once the run has finished or
    /// been replaced.
    pub fn cancel(&mut self, handle: RevealHandle) {
        if self.pending.is_some_and(|p| p.handle == handle) {
            self.pending = None;
        }
    }

    /// Cancel pending reveals and show the whole text at once.
    ///
    /// Emits one `Revealed` with the full length, then `Completed`. Does
    /// nothing if `handle` is not an unfinished run.
    pub fn force_complete(&mut self, handle: RevealHandle, out: &mut Vec<RevealEvent>) {
        if !self.pending.is_some_and(|p| p.handle == handle) {
            return;
        }
        self.cancel(handle);

        self.revealed_end = self.text.len();
        self.revealed_chars = self.text.chars().count();
        out.push(RevealEvent::Revealed { handle, chars: self.revealed_chars });
        out.push(RevealEvent::Completed { handle });
    }

    /// The visible prefix.
    pub fn revealed(&self) -> &str {
        &self.text[..self.revealed_end]
    }

    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    fn reveal_next(&mut self) {
        if let Some(c) = self.text[self.revealed_end..].chars().next() {
            self.revealed_end += c.len_utf8();
            self.revealed_chars += 1;
        }
    }
}
