use std::cell::RefCell;
use std::rc::Rc;

use gtk4::glib;

use crate::state::{GalleryAction, GalleryController, SearchTicket};
use crate::view::GallerySnapshot;

pub type SharedController = Rc<RefCell<GalleryController>>;

/// Completes `ticket` on the main loop once its delay has elapsed.
///
/// `on_committed` runs only when the ticket was still the latest search. It
/// receives a snapshot taken after the controller borrow is released, so it
/// may dispatch further actions on the shared controller.
pub fn spawn_search_completion<H>(
    controller: &SharedController,
    ticket: SearchTicket,
    on_committed: H,
) -> glib::SourceId
where
    H: FnOnce(GallerySnapshot) + 'static,
{
    let controller = Rc::clone(controller);
    glib::timeout_add_local_once(ticket.delay, move || {
        let snapshot = {
            let mut controller = controller.borrow_mut();
            let committed = controller.complete_search(&ticket);
            tracing::trace!(generation = ticket.generation, committed, "search timer fired");
            committed.then(|| GallerySnapshot::capture(&controller))
        };
        if let Some(snapshot) = snapshot {
            on_committed(snapshot);
        }
    })
}

/// Dispatches `action` and, when it starts a search, arms the completion
/// timer.
pub fn dispatch<H>(controller: &SharedController, action: GalleryAction, on_committed: H)
where
    H: FnOnce(GallerySnapshot) + 'static,
{
    let ticket = controller.borrow_mut().dispatch(action);
    if let Some(ticket) = ticket {
        let _ = spawn_search_completion(controller, ticket, on_committed);
    }
}
