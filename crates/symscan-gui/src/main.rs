mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod workers;

use symscan_core::config::AppConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to default config");
            AppConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([960.0, 640.0])
            .with_title("Symscan"),
        ..Default::default()
    };

    eframe::run_native(
        "Symscan",
        options,
        Box::new(|cc| Ok(Box::new(app::SymscanApp::new(&cc.egui_ctx, config)?))),
    )
}
