pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod logging;
pub mod scheduler;
pub mod state;
pub mod storage;
pub mod view;
pub use error::{AppError, AppResult};

/// Entrypoint used by presentation hosts: sets up logging, reads
/// `config.json` and restores the gallery session.
pub fn start() -> AppResult<state::GalleryController> {
    logging::init();
    tracing::info!("starting cat gallery");

    let config = config::load_gallery_config();
    let controller = state::GalleryController::from_config(&config)?;

    tracing::info!(
        items = controller.catalog().len(),
        favorites = controller.favorites().len(),
        "startup complete"
    );
    Ok(controller)
}
