// cli_app.rs
use crate::{
    config::AppConfig,
    preview::PreviewSurface,
    session::{DropOutcome, DropSession},
};

/// Headless front end: feeds one payload through the same drop session the
/// window uses and reports the resulting surface.
pub struct CliApp {
    session: DropSession,
    surface: PreviewSurface,
}

impl CliApp {
    pub fn new(cfg: &AppConfig) -> Self {
        Self {
            session: DropSession::new(cfg),
            surface: PreviewSurface::default(),
        }
    }

    /// The arguments are joined back into a raw drop payload, so more than one
    /// argument is a multi-file drop, not a batch. On success returns the
    /// report to print; on failure the error carries the surface message.
    pub fn run<I, S>(&mut self, args: I) -> anyhow::Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw = args
            .into_iter()
            .map(|a| a.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(" ");

        match self.session.handle_drop(&raw, &mut self.surface) {
            DropOutcome::Complete { icon } => Ok(format!(
                "{}\nIcon written to {}",
                self.surface.describe(),
                icon.display()
            )),
            failed => match failed.error() {
                Some(e) => Err(anyhow::anyhow!("{}", e.user_message())),
                None => Ok(self.surface.describe()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn converts_a_single_argument() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("cli.webp");
        ImageBuffer::from_pixel(24, 24, Rgba([1u8, 2, 3, 255]))
            .save_with_format(&src, image::ImageFormat::WebP)
            .unwrap();

        let mut app = CliApp::new(&AppConfig::default());
        let report = app.run([src.to_str().unwrap()]).unwrap();
        assert!(dir.path().join("cli.ico").exists());
        assert!(report.starts_with("[preview 100x100]\nSaved cli.ico\n"));
        assert!(report.ends_with("cli.ico"));
    }

    #[test]
    fn several_arguments_fail_as_multiple_files() {
        let mut app = CliApp::new(&AppConfig::default());
        let err = app.run(["a.png", "b.png"]).unwrap_err();
        assert_eq!(err.to_string(), "Please drop only one file.");
    }

    #[test]
    fn failure_message_appears_once() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("junk.png");
        std::fs::write(&src, b"junk").unwrap();

        let err = CliApp::new(&AppConfig::default())
            .run([src.to_str().unwrap()])
            .unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("Error loading image:\n"));
        assert_eq!(text.matches("Error loading image").count(), 1);
    }

    #[test]
    fn webp_rejected_when_disabled() {
        let cfg = AppConfig {
            accept_webp: false,
            ..AppConfig::default()
        };
        let err = CliApp::new(&cfg).run(["pic.webp"]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid file type"));
    }
}
