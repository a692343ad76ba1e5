//! Dialogue session: walks a [`LineSet`] through the typewriter, one line
//! per advance, with optional narration per line.
//!
//! Advance semantics:
//! - while a line is typing, `advance` finishes it instantly and stays on it;
//! - once the line is fully shown, `advance` moves to the next line;
//! - advancing past the last line ends the session.

use crate::audio::{AudioBackend, AudioHandle};
use crate::dialogue::lines::LineSet;
use crate::dialogue::typewriter::{RevealEvent, RevealHandle, Typewriter};

/// What the session reports to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueEvent {
    /// Line `index` of `set` started typing.
    LineStarted { set: String, index: usize },
    /// Line `index` is fully shown; the "next" indicator may appear.
    LineRevealed { index: usize },
    /// The set ran out of lines, or the session was skipped.
    Finished { set: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogueError {
    #[error("dialogue '{active}' is still running")]
    SessionActive { active: String },
}

#[derive(Debug, Default)]
pub struct DialogueSession {
    typewriter: Typewriter,
    /// Seconds per revealed character.
    interval: f32,
    set: Option<LineSet>,
    index: usize,
    reveal: Option<RevealHandle>,
    /// The one clip this session may have playing.
    voice: Option<AudioHandle>,
    reveal_events: Vec<RevealEvent>,
}

impl DialogueSession {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            ..Default::default()
        }
    }

    /// Change the reveal speed. Takes effect from the next line.
    pub fn set_interval(&mut self, interval: f32) {
        self.interval = interval;
    }

    /// Start `set` at line 0.
    ///
    /// Opening while another set is running is rejected; finish or skip it first.
    pub fn open(
        &mut self,
        set: LineSet,
        audio: &mut dyn AudioBackend,
        out: &mut Vec<DialogueEvent>,
    ) -> Result<(), DialogueError> {
        if let Some(active) = &self.set {
            return Err(DialogueError::SessionActive {
                active: active.name().to_string(),
            });
        }

        log::debug!("dialogue '{}' opened ({} lines)", set.name(), set.len());
        self.set = Some(set);
        self.show_line(0, audio, out);
        Ok(())
    }

    /// The player asked to move on.
    pub fn advance(&mut self, audio: &mut dyn AudioBackend, out: &mut Vec<DialogueEvent>) {
        if self.set.is_none() {
            return;
        }

        if let Some(handle) = self.reveal.filter(|_| self.typewriter.is_typing()) {
            self.typewriter.force_complete(handle, &mut self.reveal_events);
            self.drain_reveals(out);
        } else {
            self.show_line(self.index + 1, audio, out);
        }
    }

    /// Drive the typewriter by `dt` seconds.
    pub fn tick(&mut self, dt: f32, out: &mut Vec<DialogueEvent>) {
        if self.set.is_none() {
            return;
        }
        self.typewriter.tick(dt, &mut self.reveal_events);
        self.drain_reveals(out);
    }

    /// Close the session now, bypassing remaining lines.
    pub fn skip(&mut self, audio: &mut dyn AudioBackend, out: &mut Vec<DialogueEvent>) {
        if self.set.is_some() {
            self.finish(audio, out);
        }
    }

    pub fn is_active(&self) -> bool {
        self.set.is_some()
    }

    pub fn is_typing(&self) -> bool {
        self.is_active() && self.typewriter.is_typing()
    }

    /// Name of the running set.
    pub fn active_set(&self) -> Option<&str> {
        self.set.as_ref().map(LineSet::name)
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Text currently shown for the current line.
    pub fn displayed_text(&self) -> &str {
        if self.is_active() {
            self.typewriter.revealed()
        } else {
            ""
        }
    }

    fn show_line(&mut self, index: usize, audio: &mut dyn AudioBackend, out: &mut Vec<DialogueEvent>) {
        let Some(set) = self.set.as_ref() else {
            return;
        };
        let Some(line) = set.line(index) else {
            self.finish(audio, out);
            return;
        };

        let set_name = set.name().to_string();
        let clip = set.clip(index).map(str::to_string);
        let line = line.to_string();

        self.stop_voice(audio);
        self.index = index;
        out.push(DialogueEvent::LineStarted { set: set_name, index });

        if let Some(clip) = clip {
            match audio.play(&clip) {
                Ok(handle) => self.voice = Some(handle),
                Err(err) => log::warn!("narration '{clip}' skipped: {err}"),
            }
        }

        self.reveal = Some(self.typewriter.start(&line, self.interval, &mut self.reveal_events));
        self.drain_reveals(out);
    }

    fn finish(&mut self, audio: &mut dyn AudioBackend, out: &mut Vec<DialogueEvent>) {
        if let Some(handle) = self.reveal.take() {
            self.typewriter.cancel(handle);
        }
        self.reveal_events.clear();
        self.stop_voice(audio);

        if let Some(set) = self.set.take() {
            log::debug!("dialogue '{}' finished", set.name());
            out.push(DialogueEvent::Finished { set: set.name().to_string() });
        }
        self.index = 0;
    }

    fn stop_voice(&mut self, audio: &mut dyn AudioBackend) {
        if let Some(handle) = self.voice.take() {
            audio.stop(handle);
        }
    }

    fn drain_reveals(&mut self, out: &mut Vec<DialogueEvent>) {
        for event in self.reveal_events.drain(..) {
            if let RevealEvent::Completed { handle } = event {
                if Some(handle) == self.reveal {
                    out.push(DialogueEvent::LineRevealed { index: self.index });
                }
            }
        }
    }
}
