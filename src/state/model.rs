use crate::catalog::{CatalogItem, ItemId};

/// Informational message shown above the grid. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusMessage {
    #[default]
    None,
    /// The last committed search matched nothing.
    NoResults,
    /// Nothing to show yet, e.g. an empty favorites view.
    NoneYet,
}

/// Session state owned by the controller.
///
/// `displayed_list` is derived from the catalog or the favorites set and is
/// never the source of truth for favorite status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub(super) search_text: String,
    pub(super) displayed_list: Vec<CatalogItem>,
    pub(super) is_loading: bool,
    pub(super) status_message: StatusMessage,
    pub(super) show_favorites_only: bool,
    pub(super) selected_item: Option<ItemId>,
    pub(super) is_modal_open: bool,
}

impl ViewState {
    pub(super) fn with_displayed(displayed_list: Vec<CatalogItem>) -> Self {
        Self {
            displayed_list,
            ..Self::default()
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn displayed_list(&self) -> &[CatalogItem] {
        &self.displayed_list
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn status_message(&self) -> StatusMessage {
        self.status_message
    }

    pub fn show_favorites_only(&self) -> bool {
        self.show_favorites_only
    }

    pub fn selected_item_id(&self) -> Option<ItemId> {
        self.selected_item
    }

    pub fn is_modal_open(&self) -> bool {
        self.is_modal_open
    }

    /// Background scrolling is suspended while the detail modal is up.
    pub fn scroll_locked(&self) -> bool {
        self.is_modal_open
    }
}
