pub mod controller;
pub mod pagination;

pub use controller::{Applied, FetchTicket, ListController};
pub use pagination::Pagination;

use std::future::Future;

use contracts::shared::errors::GatewayError;
use contracts::shared::listing::{ListPage, ListQuery};
use leptos::prelude::*;

/// Drain the controller's pending fetch (if any) and run it through the
/// gateway, feeding the result back in. Keeps going while the controller
/// re-queues itself (page clamping after a shrunk result set), so widgets
/// just call `pump` after every UI event and forget about it.
pub fn pump<T, F, Fut>(
    controller: RwSignal<ListController<T, F>>,
    fetch: impl Fn(ListQuery<F>) -> Fut + 'static,
) where
    T: Send + Sync + 'static,
    F: Clone + PartialEq + Send + Sync + 'static,
    Fut: Future<Output = Result<ListPage<T>, GatewayError>> + 'static,
{
    let Some(ticket) = controller.try_update(|c| c.take_fetch()).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        let mut ticket = ticket;
        loop {
            let result = fetch(ticket.query.clone()).await;
            let next = controller
                .try_update(|c| {
                    if c.apply(ticket.seq, result) == Applied::Stale {
                        log::debug!("dropped stale list result, seq {}", ticket.seq);
                    }
                    c.take_fetch()
                })
                .flatten();
            match next {
                Some(t) => ticket = t,
                None => break,
            }
        }
    });
}
