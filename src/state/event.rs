use std::time::Duration;

use crate::catalog::ItemId;

/// Where a pointer click landed while the detail modal is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the detail surface.
    Backdrop,
    DetailSurface,
}

/// A deferred search completion. Only the ticket carrying the latest
/// generation may commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    /// Blank query; the full catalog is already shown.
    Completed,
    /// The host must call `complete_search` with this ticket once
    /// `ticket.delay` has elapsed.
    Pending(SearchTicket),
}

impl SearchRequest {
    pub fn ticket(self) -> Option<SearchTicket> {
        match self {
            Self::Completed => None,
            Self::Pending(ticket) => Some(ticket),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

/// User gestures the presentation surface forwards to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryAction {
    SetSearchText(String),
    /// Search with the current search text (Enter key or search button).
    SubmitSearch,
    Search(String),
    CompleteSearch(SearchTicket),
    ShowAll,
    ToggleFavoritesView,
    ToggleFavorite(ItemId),
    OpenDetail(ItemId),
    CloseDetail,
    Click(ClickTarget),
}
