//! Running deferred search completions.
//!
//! [`PendingSearches`] keeps its own virtual clock, so hosts without an event
//! loop (and tests) decide exactly when each delay elapses. With the `gtk`
//! feature, [`glib_timer`] schedules completions on the glib main loop.

#[cfg(feature = "gtk")]
pub mod glib_timer;

use std::time::Duration;

use crate::state::{GalleryController, SearchRequest, SearchTicket};

#[derive(Debug, Clone)]
struct ScheduledSearch {
    due: Duration,
    ticket: SearchTicket,
}

#[derive(Debug, Default)]
pub struct PendingSearches {
    now: Duration,
    queue: Vec<ScheduledSearch>,
}

impl PendingSearches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn schedule(&mut self, ticket: SearchTicket) {
        let due = self.now.saturating_add(ticket.delay);
        tracing::trace!(generation = ticket.generation, ?due, "search completion queued");
        self.queue.push(ScheduledSearch { due, ticket });
    }

    /// Queues the ticket of a pending request. Returns whether one was queued.
    pub fn schedule_request(&mut self, request: SearchRequest) -> bool {
        match request.ticket() {
            Some(ticket) => {
                self.schedule(ticket);
                true
            }
            None => false,
        }
    }

    /// Moves the clock forward and returns every ticket now due, earliest
    /// first.
    pub fn advance(&mut self, by: Duration) -> Vec<SearchTicket> {
        self.now = self.now.saturating_add(by);
        let now = self.now;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.queue.drain(..).partition(|entry| entry.due <= now);
        self.queue = waiting;

        due.sort_by_key(|entry| (entry.due, entry.ticket.generation));
        due.into_iter().map(|entry| entry.ticket).collect()
    }

    /// Advances the clock and completes every due search on `controller`.
    /// Returns how many completions were committed.
    pub fn drain_into(&mut self, controller: &mut GalleryController, by: Duration) -> usize {
        self.advance(by)
            .iter()
            .filter(|ticket| controller.complete_search(ticket))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogItem, ItemId};
    use crate::favorites::{FavoritesStore, DEFAULT_FAVORITES_KEY};
    use crate::state::StatusMessage;
    use crate::storage::MemoryKeyValueStore;

    fn controller(delay_ms: u64) -> GalleryController {
        let store = FavoritesStore::new(MemoryKeyValueStore::new(), DEFAULT_FAVORITES_KEY);
        GalleryController::new(Catalog::builtin(), store)
            .with_search_delay(Duration::from_millis(delay_ms))
    }

    fn ids(items: &[CatalogItem]) -> Vec<ItemId> {
        items.iter().map(|item| item.id).collect()
    }

    fn ticket(generation: u64, delay_ms: u64) -> SearchTicket {
        SearchTicket {
            generation,
            query: format!("q{generation}"),
            delay: Duration::from_millis(delay_ms),
        }
    }

    #[test]
    fn advance_releases_only_due_tickets_in_due_order() {
        let mut pending = PendingSearches::new();
        pending.schedule(ticket(1, 300));
        pending.schedule(ticket(2, 100));
        pending.schedule(ticket(3, 900));

        assert!(pending.advance(Duration::from_millis(50)).is_empty());
        let due = pending.advance(Duration::from_millis(250));
        assert_eq!(
            due.iter().map(|t| t.generation).collect::<Vec<_>>(),
            vec![2, 1]
        );
        assert_eq!(pending.len(), 1);
        assert_eq!(pending.now(), Duration::from_millis(300));
    }

    #[test]
    fn blank_requests_are_not_queued() {
        let mut pending = PendingSearches::new();
        assert!(!pending.schedule_request(SearchRequest::Completed));
        assert!(pending.schedule_request(SearchRequest::Pending(ticket(1, 10))));
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn quick_successive_searches_commit_only_the_latest() {
        let mut controller = controller(600);
        let mut pending = PendingSearches::new();

        pending.schedule_request(controller.search("ласков"));
        assert_eq!(pending.drain_into(&mut controller, Duration::from_millis(200)), 0);
        pending.schedule_request(controller.search("белый"));

        assert_eq!(pending.drain_into(&mut controller, Duration::from_millis(400)), 0);
        assert!(controller.view().is_loading());
        assert_eq!(ids(controller.view().displayed_list()), (1..=12).collect::<Vec<_>>());

        assert_eq!(pending.drain_into(&mut controller, Duration::from_millis(200)), 1);
        assert!(pending.is_empty());
        assert_eq!(ids(controller.view().displayed_list()), vec![4, 8, 12]);
        assert!(!controller.view().is_loading());
    }

    #[test]
    fn stale_completion_arriving_after_newer_one_is_a_no_op() {
        let mut controller = controller(0);
        let mut pending = PendingSearches::new();

        let slow = controller.search("ласков").ticket().unwrap();
        pending.schedule(SearchTicket {
            delay: Duration::from_millis(900),
            ..slow
        });
        pending.schedule_request(controller.search("зз"));

        assert_eq!(pending.drain_into(&mut controller, Duration::ZERO), 1);
        assert_eq!(controller.view().status_message(), StatusMessage::NoResults);

        assert_eq!(pending.drain_into(&mut controller, Duration::from_secs(1)), 0);
        assert!(controller.view().displayed_list().is_empty());
        assert_eq!(controller.view().status_message(), StatusMessage::NoResults);
    }
}
