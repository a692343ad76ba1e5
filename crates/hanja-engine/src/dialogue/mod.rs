//! Dialogue subsystem: typewriter reveal, line sets, and the session that
//! sequences them.

pub mod lines;
pub mod session;
pub mod typewriter;

pub use lines::{LineSet, Voice};
pub use session::{DialogueError, DialogueEvent, DialogueSession};
pub use typewriter::{RevealEvent, RevealHandle, Typewriter, TypewriterConfig};
