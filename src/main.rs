use algorithm_gallery::{GalleryConfig, HeadlessController, PpmFilePresenter};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading config");
            GalleryConfig::load(path)?
        }
        None => GalleryConfig::default(),
    };

    let presenter = PpmFilePresenter::new("output");
    let controller = HeadlessController::new(presenter, config, WIDTH, HEIGHT)?;

    let outcomes = controller.run_all()?;
    let completed = outcomes.iter().filter(|outcome| outcome.completed).count();
    info!(exhibits = outcomes.len(), completed, "gallery run finished");

    Ok(())
}
