use std::borrow::Cow;
use std::time::Duration;

use crate::catalog::{Catalog, CatalogItem, ItemId};
use crate::config::GalleryConfig;
use crate::error::AppResult;
use crate::favorites::{FavoritesSet, FavoritesStore};
use crate::storage::FileKeyValueStore;

use super::event::{ClickTarget, GalleryAction, SearchRequest, SearchTicket};
use super::model::{StatusMessage, ViewState};

pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(600);

/// Single owner of the gallery session: catalog, favorites and view state.
///
/// Every action runs to completion on the calling thread. Searches are the
/// one deferred action: `search` hands back a [`SearchTicket`] and the host
/// feeds it to [`complete_search`](Self::complete_search) after the delay.
/// Only the most recently issued ticket commits.
#[derive(Debug)]
pub struct GalleryController {
    catalog: Catalog,
    favorites: FavoritesSet,
    store: FavoritesStore,
    view: ViewState,
    search_delay: Duration,
    search_generation: u64,
}

impl GalleryController {
    /// Restores favorites from `store` and shows the full catalog.
    pub fn new(catalog: Catalog, store: FavoritesStore) -> Self {
        let favorites = store.load();
        let mut controller = Self {
            catalog,
            favorites,
            store,
            view: ViewState::default(),
            search_delay: DEFAULT_SEARCH_DELAY,
            search_generation: 0,
        };
        controller.view = ViewState::with_displayed(controller.full_catalog_list());

        tracing::info!(
            items = controller.catalog.len(),
            favorites = controller.favorites.len(),
            key = controller.store.key(),
            "gallery controller ready"
        );
        controller
    }

    pub fn from_config(config: &GalleryConfig) -> AppResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin(),
        };
        let backend = match &config.data_dir {
            Some(dir) => FileKeyValueStore::with_dir(dir.clone()),
            None => FileKeyValueStore::with_default_dir()?,
        };
        let store = FavoritesStore::new(backend, config.favorites_key.clone());

        Ok(Self::new(catalog, store).with_search_delay(config.search_delay()))
    }

    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn search_delay(&self) -> Duration {
        self.search_delay
    }

    pub fn search_generation(&self) -> u64 {
        self.search_generation
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.view.search_text = text.into();
    }

    pub fn search_current(&mut self) -> SearchRequest {
        let text = self.view.search_text.clone();
        self.search(text)
    }

    /// Starts a search for `text`, superseding any search still in flight.
    ///
    /// A blank query resets to the full catalog immediately.
    pub fn search(&mut self, text: impl Into<String>) -> SearchRequest {
        self.view.search_text = text.into();
        let generation = self.next_generation();

        if self.view.search_text.trim().is_empty() {
            self.view.displayed_list = self.full_catalog_list();
            self.view.status_message = StatusMessage::None;
            self.view.is_loading = false;
            tracing::debug!(generation, "blank search; showing full catalog");
            return SearchRequest::Completed;
        }

        self.view.is_loading = true;
        let ticket = SearchTicket {
            generation,
            query: self.view.search_text.clone(),
            delay: self.search_delay,
        };
        tracing::debug!(
            generation,
            query = %ticket.query,
            delay_ms = ticket.delay.as_millis() as u64,
            "search scheduled"
        );
        SearchRequest::Pending(ticket)
    }

    /// Commits the results for `ticket` if it is still the latest search.
    /// Returns whether anything was committed.
    pub fn complete_search(&mut self, ticket: &SearchTicket) -> bool {
        if ticket.generation != self.search_generation {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.search_generation,
                "discarding superseded search"
            );
            return false;
        }

        let mut found = self.catalog.filter(&ticket.query);
        self.sync_favorite_flags(&mut found);
        self.view.status_message = if found.is_empty() {
            StatusMessage::NoResults
        } else {
            StatusMessage::None
        };
        self.view.displayed_list = found;
        self.view.is_loading = false;

        tracing::debug!(
            generation = ticket.generation,
            query = %ticket.query,
            matches = self.view.displayed_list.len(),
            "search committed"
        );
        true
    }

    pub fn show_all(&mut self) {
        self.next_generation();
        self.view.displayed_list = self.full_catalog_list();
        self.view.search_text.clear();
        self.view.status_message = StatusMessage::None;
        self.view.show_favorites_only = false;
        self.view.is_loading = false;
    }

    /// Switches between the favorites view and the unfiltered catalog.
    /// Leaving the favorites view does not reapply the search text.
    /// Any pending search and its status message are dropped in both
    /// directions.
    pub fn toggle_favorites_view(&mut self) {
        self.next_generation();
        self.view.show_favorites_only = !self.view.show_favorites_only;
        self.view.displayed_list = if self.view.show_favorites_only {
            self.favorites_as_list()
        } else {
            self.full_catalog_list()
        };
        self.view.status_message = StatusMessage::None;
        self.view.is_loading = false;
        tracing::debug!(
            favorites_only = self.view.show_favorites_only,
            "favorites view toggled"
        );
    }

    /// Adds or removes `item` from the favorites, persists the set and
    /// updates the visible copies. Returns the new membership.
    pub fn toggle_favorite(&mut self, item: &CatalogItem) -> bool {
        let is_favorite = self.favorites.toggle(item);
        self.persist_favorites();

        self.view
            .displayed_list
            .iter_mut()
            .filter(|entry| entry.id == item.id)
            .for_each(|entry| entry.is_favorite = is_favorite);

        if self
            .view
            .selected_item
            .is_some_and(|id| self.resolve_item(id).is_none())
        {
            self.close_detail();
        }

        tracing::info!(
            id = item.id,
            is_favorite,
            count = self.favorites.len(),
            "favorite toggled"
        );
        is_favorite
    }

    pub fn is_favorite(&self, id: ItemId) -> bool {
        self.favorites.contains(id)
    }

    /// Favorites in insertion order, resolved against the catalog so live
    /// attributes win over stored snapshots. Ids missing from the catalog
    /// fall back to their snapshot.
    pub fn favorites_as_list(&self) -> Vec<CatalogItem> {
        self.favorites
            .iter()
            .map(|stored| {
                self.catalog
                    .get(stored.id)
                    .unwrap_or(stored)
                    .with_favorite(true)
            })
            .collect()
    }

    /// The list the grid renders.
    pub fn effective_list(&self) -> Cow<'_, [CatalogItem]> {
        if self.view.show_favorites_only {
            Cow::Owned(self.favorites_as_list())
        } else {
            Cow::Borrowed(&self.view.displayed_list)
        }
    }

    /// Status to render, including the derived "nothing here yet" case.
    pub fn display_status(&self) -> StatusMessage {
        match self.view.status_message {
            StatusMessage::NoResults => StatusMessage::NoResults,
            _ if !self.view.is_loading && self.effective_list().is_empty() => {
                StatusMessage::NoneYet
            }
            _ => StatusMessage::None,
        }
    }

    pub fn open_detail(&mut self, item: &CatalogItem) {
        if self.resolve_item(item.id).is_none() {
            tracing::warn!(id = item.id, "detail requested for unknown item; ignoring");
            return;
        }
        self.view.selected_item = Some(item.id);
        self.view.is_modal_open = true;
        tracing::debug!(id = item.id, "detail opened");
    }

    pub fn close_detail(&mut self) {
        if self.view.is_modal_open {
            tracing::debug!(id = ?self.view.selected_item, "detail closed");
        }
        self.view.selected_item = None;
        self.view.is_modal_open = false;
    }

    pub fn click(&mut self, target: ClickTarget) {
        if self.view.is_modal_open && target == ClickTarget::Backdrop {
            self.close_detail();
        }
    }

    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.view.selected_item.and_then(|id| self.resolve_item(id))
    }

    /// Applies a gesture and returns the ticket to schedule, if any.
    pub fn dispatch(&mut self, action: GalleryAction) -> Option<SearchTicket> {
        tracing::debug!(?action, "dispatch gallery action");
        match action {
            GalleryAction::SetSearchText(text) => self.set_search_text(text),
            GalleryAction::SubmitSearch => return self.search_current().ticket(),
            GalleryAction::Search(text) => return self.search(text).ticket(),
            GalleryAction::CompleteSearch(ticket) => {
                self.complete_search(&ticket);
            }
            GalleryAction::ShowAll => self.show_all(),
            GalleryAction::ToggleFavoritesView => self.toggle_favorites_view(),
            GalleryAction::ToggleFavorite(id) => match self.resolve_item(id).cloned() {
                Some(item) => {
                    self.toggle_favorite(&item);
                }
                None => tracing::warn!(id, "favorite toggle for unknown item ignored"),
            },
            GalleryAction::OpenDetail(id) => match self.resolve_item(id).cloned() {
                Some(item) => self.open_detail(&item),
                None => tracing::warn!(id, "detail requested for unknown item; ignoring"),
            },
            GalleryAction::CloseDetail => self.close_detail(),
            GalleryAction::Click(target) => self.click(target),
        }
        None
    }

    fn resolve_item(&self, id: ItemId) -> Option<&CatalogItem> {
        self.catalog.get(id).or_else(|| self.favorites.get(id))
    }

    fn next_generation(&mut self) -> u64 {
        self.search_generation += 1;
        self.search_generation
    }

    fn full_catalog_list(&self) -> Vec<CatalogItem> {
        let mut items = self.catalog.items().to_vec();
        self.sync_favorite_flags(&mut items);
        items
    }

    fn sync_favorite_flags(&self, items: &mut [CatalogItem]) {
        for item in items {
            item.is_favorite = self.favorites.contains(item.id);
        }
    }

    fn persist_favorites(&self) {
        if let Err(err) = self.store.save(&self.favorites) {
            tracing::warn!(?err, key = self.store.key(), "failed to persist favorites");
        }
    }
}
