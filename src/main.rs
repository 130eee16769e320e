//! Entry point for the fine-tuning dashboard.
use eframe::egui;
use tunedash::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use tunedash::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1180.0, 820.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Fine-Tuning Pipeline Dashboard",
        native_options,
        Box::new(|_cc| Ok(Box::new(EguiApp::with_configuration()))),
    )?;
    Ok(())
}
