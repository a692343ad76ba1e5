/// Whether a line set comes with narration, and which clip goes with which line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Voice {
    #[default]
    Silent,
    /// Clip ids parallel to the lines. May be shorter than the line list;
    /// `None` or a missing entry means that line has no clip.
    Clips(Vec<Option<String>>),
}

/// An ordered, immutable run of dialogue lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSet {
    name: String,
    lines: Vec<String>,
    voice: Voice,
}

impl LineSet {
    pub fn new<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            lines: lines.into_iter().map(Into::into).collect(),
            voice: Voice::Silent,
        }
    }

    pub fn with_voice(mut self, voice: Voice) -> Self {
        self.voice = voice;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Narration clip for `index`, if any.
    pub fn clip(&self, index: usize) -> Option<&str> {
        match &self.voice {
            Voice::Silent => None,
            Voice::Clips(clips) => clips.get(index)?.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
