use quiz_time::QuizApp;
use quiz_time::config::QuizConfig;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = QuizConfig::from_env();
    log::info!("arrancando Quiz Time ({config:?})");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 720.0])
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Quiz Time",
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::from_creation_context(cc, config)))),
    )
}
