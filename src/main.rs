mod paint;

use eframe::egui;
use paint::PaintApp;

const CANVAS_WIDTH: usize = 640;
const CANVAS_HEIGHT: usize = 480;
const WINDOW_WIDTH: f32 = 840.0;
const WINDOW_HEIGHT: f32 = 520.0;

fn main() -> eframe::Result<()> {
    env_logger::init();

    log::info!("starting with a {CANVAS_WIDTH}x{CANVAS_HEIGHT} canvas");

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(WINDOW_WIDTH, WINDOW_HEIGHT)),
        ..Default::default()
    };
    eframe::run_native(
        "Scrawl",
        native_options,
        Box::new(|_cc| Box::new(PaintApp::new(CANVAS_WIDTH, CANVAS_HEIGHT))),
    )
}
