#![cfg_attr(windows, windows_subsystem = "windows")]
mod cli_app;
mod config;
mod constants;
mod convert;
mod drop_handler;
mod error;
mod gui_app;
mod preview;
mod session;
use cli_app::CliApp;
use config::AppConfig;
use constants::{WINDOW_SIZE, WINDOW_TITLE};
use eframe::{NativeOptions, egui};
use gui_app::GuiApp;

fn main() -> eframe::Result<()> {
    let loaded = AppConfig::load();
    let cfg = loaded.as_ref().cloned().unwrap_or_default();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cfg.log_level().as_str()),
    )
    .init();
    match &loaded {
        Ok(cfg) => log::debug!("config: {cfg:?}"),
        Err(e) => log::warn!("using default config: {e:#}"),
    }

    let mut args = std::env::args().skip(1).peekable();
    if args.peek().is_some_and(|arg| arg == "--cli") {
        args.next();
        match CliApp::new(&cfg).run(args) {
            Ok(report) => println!("{report}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    const ICON_DATA: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/app_icon.rgba"));

    let width = u32::from_le_bytes([ICON_DATA[0], ICON_DATA[1], ICON_DATA[2], ICON_DATA[3]]);
    let height = u32::from_le_bytes([ICON_DATA[4], ICON_DATA[5], ICON_DATA[6], ICON_DATA[7]]);
    let rgba = ICON_DATA[8..].to_vec();

    let icon = egui::IconData {
        width,
        height,
        rgba,
    };

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_SIZE)
            .with_max_inner_size(WINDOW_SIZE)
            .with_resizable(false)
            .with_drag_and_drop(true)
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(GuiApp::new(cc, cfg)) as Box<dyn eframe::App>)),
    )
}
