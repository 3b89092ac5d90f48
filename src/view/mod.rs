mod labels;

pub use labels::{
    favorite_button_label, favorites_toggle_label, header_subtitle, search_button_label,
    section_title, status_text, GALLERY_TITLE, LOADING_TEXT, SEARCH_PLACEHOLDER, SHOW_ALL_LABEL,
};

use crate::catalog::{CatalogItem, ItemId};
use crate::state::{GalleryController, StatusMessage};

/// The selected item as the detail modal renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub item: CatalogItem,
    pub description: Option<String>,
    pub is_favorite: bool,
}

/// Everything a presentation surface needs to draw one frame.
///
/// Built from the controller; the surface never looks at
/// `show_favorites_only` to decide which list to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySnapshot {
    pub items: Vec<CatalogItem>,
    pub search_text: String,
    pub is_loading: bool,
    pub status: StatusMessage,
    pub show_favorites_only: bool,
    pub favorite_ids: Vec<ItemId>,
    pub catalog_size: usize,
    pub detail: Option<DetailView>,
    pub scroll_locked: bool,
}

impl GallerySnapshot {
    pub fn capture(controller: &GalleryController) -> Self {
        let view = controller.view();
        let detail = controller.selected_item().map(|item| DetailView {
            item: item.clone(),
            description: controller
                .catalog()
                .description(item.id)
                .map(str::to_string),
            is_favorite: controller.is_favorite(item.id),
        });

        Self {
            items: controller.effective_list().into_owned(),
            search_text: view.search_text().to_string(),
            is_loading: view.is_loading(),
            status: controller.display_status(),
            show_favorites_only: view.show_favorites_only(),
            favorite_ids: controller.favorites().ids(),
            catalog_size: controller.catalog().len(),
            detail,
            scroll_locked: view.scroll_locked(),
        }
    }

    /// The grid is drawn only once loading is over and there is something
    /// to draw.
    pub fn shows_grid(&self) -> bool {
        !self.is_loading && !self.items.is_empty()
    }

    pub fn search_enabled(&self) -> bool {
        !self.is_loading
    }

    pub fn is_modal_open(&self) -> bool {
        self.detail.is_some()
    }

    pub fn status_text(&self) -> Option<&'static str> {
        status_text(self.status)
    }

    pub fn search_button_label(&self) -> &'static str {
        search_button_label(self.is_loading)
    }

    pub fn favorites_toggle_label(&self) -> String {
        favorites_toggle_label(self.show_favorites_only, self.favorites_count())
    }

    pub fn section_title(&self) -> String {
        section_title(self.show_favorites_only, self.items.len())
    }

    pub fn header_subtitle(&self) -> String {
        header_subtitle(self.catalog_size)
    }

    pub fn favorites_count(&self) -> usize {
        self.favorite_ids.len()
    }

    /// Membership in the favorites set, independent of the advisory flag
    /// on the drawn item.
    pub fn item_favorite(&self, id: ItemId) -> bool {
        self.favorite_ids.contains(&id)
    }

    pub fn favorite_button_label(&self, id: ItemId) -> &'static str {
        favorite_button_label(self.item_favorite(id))
    }
}
