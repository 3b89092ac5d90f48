pub mod controller;
pub mod event;
pub mod model;

pub use controller::{GalleryController, DEFAULT_SEARCH_DELAY};
pub use event::{ClickTarget, GalleryAction, SearchRequest, SearchTicket};
pub use model::{StatusMessage, ViewState};
