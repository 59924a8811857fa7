use eframe::egui;

mod app;
mod cad;
mod errors;
mod filter;
mod plot;
mod time;
mod units;

use crate::app::App;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1400.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "NEO Viz",
        options,
        Box::new(|_cc| Ok(Box::new(App::default()))),
    )
}
