use crate::{constants::messages, convert::PreviewBitmap};

/// What the preview pane currently shows.
#[derive(Debug, Clone)]
pub enum PreviewContent {
    Placeholder(&'static str),
    Error(String),
    Bitmap(PreviewBitmap),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionKind {
    Info,
    Error,
}

/// The dynamic half of the window. Holds exactly one piece of content; every
/// assignment drops whatever was shown before.
#[derive(Debug)]
pub struct PreviewSurface {
    content: PreviewContent,
    caption: Option<(CaptionKind, String)>,
    // bumped on each content change so the GUI knows to re-upload its texture
    generation: u64,
}

impl Default for PreviewSurface {
    fn default() -> Self {
        Self {
            content: PreviewContent::Placeholder(messages::NO_FILE),
            caption: None,
            generation: 0,
        }
    }
}

impl PreviewSurface {
    pub fn content(&self) -> &PreviewContent {
        &self.content
    }

    pub fn caption(&self) -> Option<(CaptionKind, &str)> {
        self.caption.as_ref().map(|(kind, text)| (*kind, text.as_str()))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn show_error(&mut self, msg: impl Into<String>) {
        self.replace(PreviewContent::Error(msg.into()));
    }

    pub fn render_preview(&mut self, bitmap: PreviewBitmap) {
        self.replace(PreviewContent::Bitmap(bitmap));
    }

    /// Sets the line under the content without touching the content itself.
    pub fn set_caption(&mut self, kind: CaptionKind, text: impl Into<String>) {
        self.caption = Some((kind, text.into()));
    }

    /// Text form of the surface, used by the headless mode.
    pub fn describe(&self) -> String {
        let body = match &self.content {
            PreviewContent::Placeholder(text) => (*text).to_owned(),
            PreviewContent::Error(text) => text.clone(),
            PreviewContent::Bitmap(bmp) => format!("[preview {}x{}]", bmp.width(), bmp.height()),
        };
        match &self.caption {
            Some((_, caption)) => format!("{body}\n{caption}"),
            None => body,
        }
    }

    fn replace(&mut self, content: PreviewContent) {
        self.content = content;
        self.caption = None;
        self.generation += 1;
    }
}
