#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use stellar_academy::AcademyApp;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stellar Academy")
            .with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Stellar Academy",
        options,
        Box::new(|cc| Ok(Box::new(AcademyApp::from_creation_context(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
