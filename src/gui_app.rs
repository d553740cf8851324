use eframe::{
    App as EguiApp, CreationContext,
    egui::{self, Color32, ColorImage, RichText, TextureHandle, TextureOptions},
};

use crate::{
    config::AppConfig,
    constants::{PREVIEW_SIZE, messages},
    drop_handler,
    preview::{CaptionKind, PreviewContent, PreviewSurface},
    session::DropSession,
};

const DANGER: Color32 = Color32::from_rgb(220, 50, 47);
const INFO: Color32 = Color32::from_rgb(38, 139, 210);
const PANE_WIDTH: f32 = 140.0;

pub struct GuiApp {
    session: DropSession,
    surface: PreviewSurface,
    // uploaded copy of the surface bitmap, tagged with the surface generation
    texture: Option<(u64, TextureHandle)>,
}

impl GuiApp {
    pub fn new(cc: &CreationContext, cfg: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(if cfg.dark_theme {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        Self {
            session: DropSession::new(&cfg),
            surface: PreviewSurface::default(),
            texture: None,
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        let paths: Vec<_> = dropped.iter().filter_map(|f| f.path.as_deref()).collect();
        if paths.is_empty() {
            log::warn!("drop carried no file paths ({} entries)", dropped.len());
            return;
        }

        let raw = drop_handler::payload_from_paths(paths);
        self.session.handle_drop(&raw, &mut self.surface);
    }

    fn sync_texture(&mut self, ctx: &egui::Context) {
        let generation = self.surface.generation();
        match self.surface.content() {
            PreviewContent::Bitmap(bmp) => {
                if self.texture.as_ref().is_some_and(|(g, _)| *g == generation) {
                    return;
                }
                let image = ColorImage::from_rgba_unmultiplied(
                    [bmp.width() as usize, bmp.height() as usize],
                    bmp.rgba(),
                );
                let handle = ctx.load_texture("preview", image, TextureOptions::LINEAR);
                // old handle dropped here, which frees its texture
                self.texture = Some((generation, handle));
            }
            _ => self.texture = None,
        }
    }

    fn drop_target(&self, ui: &mut egui::Ui, hovering: bool) {
        let stroke = if hovering {
            egui::Stroke::new(2.0, INFO)
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke
        };
        pane(ui, stroke, |ui| {
            ui.label(RichText::new(messages::DROP_HERE).color(INFO));
        });
    }

    fn preview(&self, ui: &mut egui::Ui) {
        let stroke = ui.visuals().widgets.noninteractive.bg_stroke;
        pane(ui, stroke, |ui| {
            match (self.surface.content(), &self.texture) {
                (PreviewContent::Bitmap(_), Some((_, tex))) => {
                    let size = egui::vec2(PREVIEW_SIZE as f32, PREVIEW_SIZE as f32);
                    ui.add(egui::Image::new((tex.id(), size)));
                }
                (PreviewContent::Error(msg), _) => {
                    ui.label(RichText::new(msg).color(DANGER));
                }
                (PreviewContent::Placeholder(text), _) => {
                    ui.label(RichText::new(*text).color(INFO));
                }
                _ => {}
            }
            if let Some((kind, text)) = self.surface.caption() {
                let color = match kind {
                    CaptionKind::Info => INFO,
                    CaptionKind::Error => DANGER,
                };
                ui.label(RichText::new(text).small().color(color));
            }
        });
    }
}

fn pane(ui: &mut egui::Ui, stroke: egui::Stroke, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style()).stroke(stroke).show(ui, |ui| {
        ui.set_width(PANE_WIDTH);
        ui.set_height(ui.available_height());
        ui.centered_and_justified(|ui| {
            ui.vertical_centered(add_contents);
        });
    });
}

impl EguiApp for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.sync_texture(ctx);

        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                self.drop_target(&mut cols[0], hovering);
                self.preview(&mut cols[1]);
            });
        });
    }
}
