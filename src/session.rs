use std::path::PathBuf;

use crate::{
    config::AppConfig,
    convert,
    drop_handler::{self, SourceImagePath},
    error::ConvertError,
    preview::{CaptionKind, PreviewSurface},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Validating,
    Decoding,
    Previewing,
    Encoding,
}

/// How a drop ended. Every variant means the session is idle again.
#[derive(Debug)]
pub enum DropOutcome {
    Rejected(ConvertError),
    DecodeFailed(ConvertError),
    EncodeFailed(ConvertError),
    Complete { icon: PathBuf },
}

impl DropOutcome {
    pub fn error(&self) -> Option<&ConvertError> {
        match self {
            Self::Rejected(e) | Self::DecodeFailed(e) | Self::EncodeFailed(e) => Some(e),
            Self::Complete { .. } => None,
        }
    }
}

/// Runs drops to completion, one at a time, against a preview surface.
pub struct DropSession {
    allowed: Vec<&'static str>,
}

impl DropSession {
    pub fn new(cfg: &AppConfig) -> Self {
        Self {
            allowed: cfg.allowed_extensions(),
        }
    }

    pub fn handle_drop(&self, raw: &str, surface: &mut PreviewSurface) -> DropOutcome {
        enter(Stage::Validating);
        let src = match drop_handler::validate(&drop_handler::parse_payload(raw), &self.allowed) {
            Ok(src) => src,
            Err(e) => {
                log::warn!("drop rejected: {e}");
                surface.show_error(e.user_message());
                return DropOutcome::Rejected(e);
            }
        };
        log::info!("dropped {}", src.as_path().display());

        if let Err(e) = self.show_preview(&src, surface) {
            log_failure(&e);
            surface.show_error(e.user_message());
            return DropOutcome::DecodeFailed(e);
        }

        enter(Stage::Encoding);
        match convert::write_icon(&src) {
            Ok(icon) => {
                let name = icon.file_name().unwrap_or(icon.as_os_str());
                surface.set_caption(CaptionKind::Info, format!("Saved {}", name.to_string_lossy()));
                DropOutcome::Complete { icon }
            }
            Err(e) => {
                log_failure(&e);
                surface.set_caption(CaptionKind::Error, e.user_message());
                DropOutcome::EncodeFailed(e)
            }
        }
    }

    fn show_preview(
        &self,
        src: &SourceImagePath,
        surface: &mut PreviewSurface,
    ) -> Result<(), ConvertError> {
        enter(Stage::Decoding);
        let image = convert::decode(src)?;
        enter(Stage::Previewing);
        surface.render_preview(convert::build_preview(&image));
        Ok(())
    }
}

fn enter(stage: Stage) {
    log::debug!("drop stage: {stage:?}");
}

fn log_failure(e: &ConvertError) {
    match std::error::Error::source(e) {
        Some(cause) => log::error!("{e}: {cause}"),
        None => log::error!("{e}"),
    }
}
