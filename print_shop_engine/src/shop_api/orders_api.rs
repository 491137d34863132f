use std::fmt::Debug;

use log::*;

use crate::{
    db::traits::{OrderManagement, OrderQueryFilter, ShopDatabase},
    db_types::{Order, OrderDraft},
    events::{EntityKind, EntityMutatedEvent, EventProducers},
    financials::prepare_order,
    shop_api::errors::OrderApiError,
};

/// `OrderApi` is the primary API for handling order submissions from the create and edit flows.
///
/// Both flows run the same pipeline: the draft is validated and its financial state derived
/// ([`prepare_order`]), the resulting record is persisted, and an [`EntityMutatedEvent`] is published so that cached
/// order listings know to refresh. A draft that fails validation never reaches the database.
pub struct OrderApi<B> {
    db: B,
    producers: EventProducers,
}

impl<B> Debug for OrderApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderApi")
    }
}

impl<B> OrderApi<B> {
    pub fn new(db: B, producers: EventProducers) -> Self {
        Self { db, producers }
    }
}

impl<B> OrderApi<B>
where B: ShopDatabase + OrderManagement<Error = <B as ShopDatabase>::Error>
{
    /// Submit a brand-new order draft.
    ///
    /// The assigned id comes back on the returned [`Order`]. To change details of an existing order, use
    /// [`Self::update_order`] instead.
    pub async fn create_order(&self, draft: OrderDraft) -> Result<Order, OrderApiError<B>> {
        let new_order = prepare_order(draft)?;
        let order = self.db.insert_order(new_order).await.map_err(OrderApiError::DatabaseError)?;
        debug!(
            "🔄️📦️ Order #{} created for client #{}: {} ({})",
            order.id, order.client_id, order.total, order.payment_status
        );
        self.notify(EntityMutatedEvent::created(EntityKind::Order, order.id)).await;
        Ok(order)
    }

    /// Replace the editable fields of order `id` with the given draft.
    ///
    /// The draft goes through exactly the same validate-and-derive pass as a creation; whatever financial state the
    /// stored order had before is overwritten wholesale. Returns [`OrderApiError::OrderNotFound`] if `id` does not
    /// exist.
    pub async fn update_order(&self, id: i64, draft: OrderDraft) -> Result<Order, OrderApiError<B>> {
        let new_order = prepare_order(draft)?;
        let updated = self.db.update_order(id, new_order).await.map_err(OrderApiError::DatabaseError)?;
        let order = updated.ok_or(OrderApiError::OrderNotFound(id))?;
        debug!(
            "🔄️📦️ Order #{} updated: {} paid of {} ({})",
            order.id, order.amount_paid, order.total, order.payment_status
        );
        self.notify(EntityMutatedEvent::updated(EntityKind::Order, order.id)).await;
        Ok(order)
    }

    /// Delete order `id` unconditionally. Returns [`OrderApiError::OrderNotFound`] if it was already gone.
    pub async fn delete_order(&self, id: i64) -> Result<(), OrderApiError<B>> {
        let deleted = self.db.delete_order(id).await.map_err(OrderApiError::DatabaseError)?;
        if !deleted {
            return Err(OrderApiError::OrderNotFound(id));
        }
        debug!("🔄️📦️ Order #{id} deleted");
        self.notify(EntityMutatedEvent::deleted(EntityKind::Order, id)).await;
        Ok(())
    }

    pub async fn order_by_id(&self, id: i64) -> Result<Option<Order>, OrderApiError<B>> {
        self.db.order_by_id(id).await.map_err(OrderApiError::DatabaseError)
    }

    /// Fetches orders matching `query`, most recent order date first.
    pub async fn fetch_orders(&self, query: OrderQueryFilter) -> Result<Vec<Order>, OrderApiError<B>> {
        trace!("🔄️📦️ Fetching orders. {query}");
        self.db.fetch_orders(query).await.map_err(OrderApiError::DatabaseError)
    }

    async fn notify(&self, event: EntityMutatedEvent) {
        for producer in &self.producers.entity_mutated_producer {
            trace!("🔄️📬️ Notifying subscribers: {event}");
            producer.publish_event(event).await;
        }
    }

    pub fn db(&self) -> &B {
        &self.db
    }

    pub fn db_mut(&mut self) -> &mut B {
        &mut self.db
    }
}
