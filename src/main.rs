use udacitrivia::TriviaApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Udacitrivia",
        options,
        Box::new(|_cc| Ok(Box::new(TriviaApp::new()))),
    )
}
