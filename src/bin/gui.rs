use algorithm_gallery::{GalleryConfig, PixelsPresenterFactory, RunGuiCommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => GalleryConfig::load(path)?,
        None => GalleryConfig::default(),
    };

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), config);
    command.execute();

    Ok(())
}
