//! `HtmlAudioElement` playback as an [`AudioBackend`].

use std::collections::HashMap;

use hanja_engine::{AssetManifest, AudioBackend, AudioHandle, PlaybackError};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Plays manifest sounds through detached `<audio>` elements.
///
/// `play()` returns a promise that rejects under autoplay policy. The
/// rejection arrives after `play` has returned, so it is only logged.
#[derive(Default)]
pub struct HtmlAudio {
    clips: HashMap<String, (String, f32)>,
    playing: HashMap<AudioHandle, HtmlAudioElement>,
    next: u32,
}

impl HtmlAudio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioBackend for HtmlAudio {
    /// Register every sound from the manifest, replacing earlier ones.
    fn load_manifest(&mut self, manifest: &AssetManifest) {
        self.clips = manifest
            .sounds
            .iter()
            .map(|(id, desc)| (id.clone(), (desc.path.clone(), desc.volume.clamp(0.0, 1.0))))
            .collect();
        log::info!("audio: {} clips registered", self.clips.len());
    }

    fn play(&mut self, clip: &str) -> Result<AudioHandle, PlaybackError> {
        let (path, volume) = self
            .clips
            .get(clip)
            .ok_or_else(|| PlaybackError::UnknownClip(clip.to_string()))?;

        let element = HtmlAudioElement::new_with_src(path)
            .map_err(|e| PlaybackError::Backend(format!("{e:?}")))?;
        element.set_volume(*volume as f64);
        let started = element
            .play()
            .map_err(|e| PlaybackError::Backend(format!("{e:?}")))?;
        let clip_id = clip.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(started).await {
                log::warn!("{}", rejected(&clip_id, &format!("{err:?}")));
            }
        });

        self.next = self.next.wrapping_add(1);
        let handle = AudioHandle(self.next);
        self.playing.insert(handle, element);
        Ok(handle)
    }

    fn stop(&mut self, handle: AudioHandle) {
        if let Some(element) = self.playing.remove(&handle) {
            if let Err(err) = element.pause() {
                log::warn!("audio: pause failed: {err:?}");
            }
            element.set_current_time(0.0);
        }
    }
}

/// Error for a clip whose playback promise rejected.
fn rejected(clip: &str, reason: &str) -> PlaybackError {
    PlaybackError::Backend(format!("'{clip}' did not start: {reason}"))
}
