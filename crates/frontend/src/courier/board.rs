use contracts::domain::delivery::{DeliveryItem, DeliveryStatus};
use contracts::shared::errors::GatewayError;

/// Ephemeral record of an optimistic status flip, kept only until the
/// remote update confirms or rejects it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTransition {
    pub order_id: i64,
    pub prior: DeliveryStatus,
    pub target: DeliveryStatus,
}

/// What happened to one optimistic transition once the remote resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// Remote confirmed; the optimistic status stands.
    Committed,
    /// Remote rejected; the local status was restored to its prior value.
    RolledBack(GatewayError),
}

/// Result of [`DeliveryBoard::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub outcome: TransitionOutcome,
    /// True exactly once per batch: the confirmed transition completed the
    /// last pending stop of the day.
    pub batch_complete: bool,
}

/// Local state of the courier's delivery list.
///
/// Status is mutated optimistically: [`begin_status`](Self::begin_status)
/// flips it before the remote call goes out, [`resolve`](Self::resolve)
/// either keeps the flip or rolls it back. "Batch complete" is computed
/// from this local bookkeeping only, never from a re-fetch, and is armed
/// once per batch of pending work.
#[derive(Debug, Default)]
pub struct DeliveryBoard {
    items: Vec<DeliveryItem>,
    pending: Vec<PendingTransition>,
    batch_complete_fired: bool,
}

impl DeliveryBoard {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            pending: Vec::new(),
            // an empty board has no batch to celebrate
            batch_complete_fired: true,
        }
    }

    /// Replace the board wholesale (initial load or manual refresh).
    /// Re-arms the batch signal only when the new list has pending work.
    pub fn load(&mut self, items: Vec<DeliveryItem>) {
        self.pending.clear();
        self.batch_complete_fired = !items.iter().any(DeliveryItem::is_pending);
        self.items = items;
    }

    pub fn items(&self) -> &[DeliveryItem] {
        &self.items
    }

    pub fn pending_items(&self) -> impl Iterator<Item = &DeliveryItem> {
        self.items.iter().filter(|i| i.is_pending())
    }

    pub fn completed_items(&self) -> impl Iterator<Item = &DeliveryItem> {
        self.items.iter().filter(|i| !i.is_pending())
    }

    /// Items in display order: pending stops first, completed after, each
    /// group keeping its load order.
    pub fn items_pending_first(&self) -> Vec<DeliveryItem> {
        self.pending_items()
            .cloned()
            .chain(self.completed_items().cloned())
            .collect()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending_items().count()
    }

    pub fn has_cod_deliveries(&self) -> bool {
        self.items.iter().any(DeliveryItem::is_cod)
    }

    /// A status update for this stop is still awaiting the backend.
    pub fn in_flight(&self, order_id: i64) -> bool {
        self.pending.iter().any(|t| t.order_id == order_id)
    }

    pub fn status_of(&self, order_id: i64) -> Option<DeliveryStatus> {
        self.items
            .iter()
            .find(|i| i.order_id == order_id)
            .map(|i| i.delivery_status)
    }

    /// Apply the optimistic flip and record the transition. Returns `None`
    /// for unknown ids and while a remote update for the same item is
    /// still in flight (the second click has nothing to do).
    pub fn begin_status(
        &mut self,
        order_id: i64,
        target: DeliveryStatus,
    ) -> Option<PendingTransition> {
        if self.pending.iter().any(|t| t.order_id == order_id) {
            return None;
        }
        let item = self.items.iter_mut().find(|i| i.order_id == order_id)?;
        let prior = item.delivery_status;
        item.delivery_status = target;
        let tx = PendingTransition {
            order_id,
            prior,
            target,
        };
        self.pending.push(tx.clone());
        Some(tx)
    }

    /// Settle the in-flight transition for `order_id` with the remote
    /// result. On failure the prior status is restored and the error is
    /// handed back for the UI to surface; it is never swallowed here.
    pub fn resolve(&mut self, order_id: i64, result: Result<(), GatewayError>) -> Settlement {
        let Some(pos) = self.pending.iter().position(|t| t.order_id == order_id) else {
            // superseded by a bulk complete-all; nothing left to settle
            return Settlement {
                outcome: TransitionOutcome::Committed,
                batch_complete: false,
            };
        };
        let tx = self.pending.remove(pos);

        match result {
            Ok(()) => {
                let batch_complete = match tx.target {
                    DeliveryStatus::Completed => self.arm_batch_complete(),
                    DeliveryStatus::Pending => {
                        // a stop went back to pending: a new batch is forming
                        self.batch_complete_fired = false;
                        false
                    }
                };
                Settlement {
                    outcome: TransitionOutcome::Committed,
                    batch_complete,
                }
            }
            Err(err) => {
                if let Some(item) = self.items.iter_mut().find(|i| i.order_id == order_id) {
                    item.delivery_status = tx.prior;
                }
                if tx.prior == DeliveryStatus::Pending {
                    self.batch_complete_fired = false;
                }
                Settlement {
                    outcome: TransitionOutcome::RolledBack(err),
                    batch_complete: false,
                }
            }
        }
    }

    /// The bulk `complete_all` RPC succeeded: mark everything completed
    /// locally. Returns true when this fires the once-per-batch signal.
    /// (On RPC failure nothing is mutated, so there is no counterpart.)
    pub fn complete_all_confirmed(&mut self) -> bool {
        for item in &mut self.items {
            item.delivery_status = DeliveryStatus::Completed;
        }
        self.pending.clear();
        self.arm_batch_complete()
    }

    fn arm_batch_complete(&mut self) -> bool {
        if self.pending_count() == 0 && !self.batch_complete_fired {
            self.batch_complete_fired = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::delivery::{OrderDetail, PaymentMethod};

    fn item(order_id: i64, status: DeliveryStatus) -> DeliveryItem {
        DeliveryItem {
            order_id,
            delivery_status: status,
            payment_method: PaymentMethod::Cod,
            notes_for_courier: None,
            customer_name: format!("Customer {order_id}"),
            customer_phone: "081234567890".to_string(),
            customer_address: "Jl. Kebon Jeruk 12".to_string(),
            delivery_date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
            order_details: vec![OrderDetail {
                product_name: "Ayam Original".to_string(),
                quantity: 2,
                notes: None,
            }],
        }
    }

    fn board(items: Vec<DeliveryItem>) -> DeliveryBoard {
        let mut b = DeliveryBoard::new();
        b.load(items);
        b
    }

    #[test]
    fn optimistic_flip_is_visible_immediately() {
        let mut b = board(vec![item(1, DeliveryStatus::Pending)]);
        let tx = b.begin_status(1, DeliveryStatus::Completed).unwrap();
        assert_eq!(tx.prior, DeliveryStatus::Pending);
        assert_eq!(b.status_of(1), Some(DeliveryStatus::Completed));
        assert_eq!(b.pending_count(), 0);
    }

    #[test]
    fn last_completion_fires_batch_complete_exactly_once() {
        let mut b = board(vec![
            item(5, DeliveryStatus::Completed),
            item(6, DeliveryStatus::Completed),
            item(7, DeliveryStatus::Pending),
        ]);
        b.begin_status(7, DeliveryStatus::Completed).unwrap();
        let s = b.resolve(7, Ok(()));
        assert_eq!(s.outcome, TransitionOutcome::Committed);
        assert!(s.batch_complete);

        // idempotent resend of the same transition
        b.begin_status(7, DeliveryStatus::Completed).unwrap();
        let s = b.resolve(7, Ok(()));
        assert_eq!(s.outcome, TransitionOutcome::Committed);
        assert!(!s.batch_complete, "signal must not re-fire within a batch");
    }

    #[test]
    fn non_final_completion_does_not_fire() {
        let mut b = board(vec![
            item(1, DeliveryStatus::Pending),
            item(2, DeliveryStatus::Pending),
        ]);
        b.begin_status(1, DeliveryStatus::Completed).unwrap();
        assert!(!b.resolve(1, Ok(())).batch_complete);
    }

    #[test]
    fn rejection_rolls_back_and_surfaces_the_error() {
        let mut b = board(vec![item(3, DeliveryStatus::Pending)]);
        b.begin_status(3, DeliveryStatus::Completed).unwrap();
        assert_eq!(b.status_of(3), Some(DeliveryStatus::Completed));

        let s = b.resolve(3, Err(GatewayError::new("RPC_ERROR", "forbidden")));
        match s.outcome {
            TransitionOutcome::RolledBack(err) => assert_eq!(err.code, "RPC_ERROR"),
            other => panic!("expected rollback, got {other:?}"),
        }
        assert!(!s.batch_complete);
        assert_eq!(b.status_of(3), Some(DeliveryStatus::Pending));
    }

    #[test]
    fn second_click_while_in_flight_is_ignored() {
        let mut b = board(vec![item(1, DeliveryStatus::Pending)]);
        assert!(b.begin_status(1, DeliveryStatus::Completed).is_some());
        assert!(b.begin_status(1, DeliveryStatus::Pending).is_none());
    }

    #[test]
    fn unknown_order_id_is_rejected() {
        let mut b = board(vec![item(1, DeliveryStatus::Pending)]);
        assert!(b.begin_status(99, DeliveryStatus::Completed).is_none());
    }

    #[test]
    fn reopening_a_stop_arms_a_new_batch() {
        let mut b = board(vec![item(1, DeliveryStatus::Pending)]);
        b.begin_status(1, DeliveryStatus::Completed).unwrap();
        assert!(b.resolve(1, Ok(())).batch_complete);

        // courier flips it back to pending (wrong tap), then completes again
        b.begin_status(1, DeliveryStatus::Pending).unwrap();
        assert!(!b.resolve(1, Ok(())).batch_complete);
        b.begin_status(1, DeliveryStatus::Completed).unwrap();
        assert!(
            b.resolve(1, Ok(())).batch_complete,
            "a reopened batch completes again"
        );
    }

    #[test]
    fn display_order_puts_pending_stops_first() {
        let b = board(vec![
            item(1, DeliveryStatus::Completed),
            item(2, DeliveryStatus::Pending),
            item(3, DeliveryStatus::Completed),
            item(4, DeliveryStatus::Pending),
        ]);
        let ids: Vec<i64> = b.items_pending_first().iter().map(|i| i.order_id).collect();
        assert_eq!(ids, [2, 4, 1, 3]);
    }

    #[test]
    fn complete_all_with_a_single_pending_stop_fires() {
        let mut b = board(vec![
            item(1, DeliveryStatus::Completed),
            item(2, DeliveryStatus::Pending),
        ]);
        assert!(b.complete_all_confirmed());
        assert_eq!(b.pending_count(), 0);
    }

    #[test]
    fn complete_all_marks_everything_and_fires_once() {
        let mut b = board(vec![
            item(1, DeliveryStatus::Pending),
            item(2, DeliveryStatus::Pending),
            item(3, DeliveryStatus::Completed),
        ]);
        assert!(b.complete_all_confirmed());
        assert_eq!(b.pending_count(), 0);
        assert!(b.items().iter().all(|i| !i.is_pending()));
        assert!(!b.complete_all_confirmed(), "same batch, no second signal");
    }

    #[test]
    fn load_with_all_completed_does_not_fire_on_resend() {
        let mut b = board(vec![item(1, DeliveryStatus::Completed)]);
        b.begin_status(1, DeliveryStatus::Completed).unwrap();
        assert!(!b.resolve(1, Ok(())).batch_complete);
    }

    #[test]
    fn reload_resets_in_flight_bookkeeping() {
        let mut b = board(vec![item(1, DeliveryStatus::Pending)]);
        b.begin_status(1, DeliveryStatus::Completed).unwrap();
        b.load(vec![item(1, DeliveryStatus::Pending), item(2, DeliveryStatus::Pending)]);
        // the stale in-flight transition settles after the reload
        let s = b.resolve(1, Ok(()));
        assert_eq!(s.outcome, TransitionOutcome::Committed);
        assert!(!s.batch_complete);
        assert_eq!(b.status_of(1), Some(DeliveryStatus::Pending));
    }

    #[test]
    fn cod_detection_feeds_the_report_modal() {
        let mut b = board(vec![item(1, DeliveryStatus::Pending)]);
        assert!(b.has_cod_deliveries());
        let mut transfer = item(2, DeliveryStatus::Pending);
        transfer.payment_method = PaymentMethod::Transfer;
        b.load(vec![transfer]);
        assert!(!b.has_cod_deliveries());
    }
}
