use std::fmt::Debug;

use log::*;

use crate::{
    db::traits::{ClientManagement, ProductManagement, ShopDatabase},
    db_types::{Client, NewClient, NewProduct, Product},
    events::{EntityKind, EntityMutatedEvent, EventProducers},
    shop_api::errors::CatalogApiError,
};

/// `CatalogApi` manages the two reference registers the order form draws from: clients and products.
///
/// Neither entity has derived state, so mutations go straight to the backend. Like the order flows, every successful
/// mutation publishes an [`EntityMutatedEvent`] so cached listings know to refresh.
pub struct CatalogApi<B> {
    db: B,
    producers: EventProducers,
}

impl<B> Debug for CatalogApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CatalogApi")
    }
}

impl<B> CatalogApi<B> {
    pub fn new(db: B, producers: EventProducers) -> Self {
        Self { db, producers }
    }
}

impl<B> CatalogApi<B>
where B: ShopDatabase
    + ClientManagement<Error = <B as ShopDatabase>::Error>
    + ProductManagement<Error = <B as ShopDatabase>::Error>
{
    pub async fn create_client(&self, client: NewClient) -> Result<Client, CatalogApiError<B>> {
        let client = self.db.insert_client(client).await.map_err(CatalogApiError::DatabaseError)?;
        debug!("🔄️👤️ Client #{} ({}) created", client.id, client.name);
        self.notify(EntityMutatedEvent::created(EntityKind::Client, client.id)).await;
        Ok(client)
    }

    pub async fn update_client(&self, id: i64, client: NewClient) -> Result<Client, CatalogApiError<B>> {
        let updated = self.db.update_client(id, client).await.map_err(CatalogApiError::DatabaseError)?;
        let client = updated.ok_or(CatalogApiError::ClientNotFound(id))?;
        debug!("🔄️👤️ Client #{} updated", client.id);
        self.notify(EntityMutatedEvent::updated(EntityKind::Client, client.id)).await;
        Ok(client)
    }

    /// Delete client `id`. Orders referencing the client are left as they are.
    pub async fn delete_client(&self, id: i64) -> Result<(), CatalogApiError<B>> {
        let deleted = self.db.delete_client(id).await.map_err(CatalogApiError::DatabaseError)?;
        if !deleted {
            return Err(CatalogApiError::ClientNotFound(id));
        }
        debug!("🔄️👤️ Client #{id} deleted");
        self.notify(EntityMutatedEvent::deleted(EntityKind::Client, id)).await;
        Ok(())
    }

    pub async fn client_by_id(&self, id: i64) -> Result<Option<Client>, CatalogApiError<B>> {
        self.db.client_by_id(id).await.map_err(CatalogApiError::DatabaseError)
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>, CatalogApiError<B>> {
        self.db.list_clients().await.map_err(CatalogApiError::DatabaseError)
    }

    pub async fn create_product(&self, product: NewProduct) -> Result<Product, CatalogApiError<B>> {
        let product = self.db.insert_product(product).await.map_err(CatalogApiError::DatabaseError)?;
        debug!("🔄️🏷️ Product #{} ({}) created at {}", product.id, product.name, product.price);
        self.notify(EntityMutatedEvent::created(EntityKind::Product, product.id)).await;
        Ok(product)
    }

    pub async fn update_product(&self, id: i64, product: NewProduct) -> Result<Product, CatalogApiError<B>> {
        let updated = self.db.update_product(id, product).await.map_err(CatalogApiError::DatabaseError)?;
        let product = updated.ok_or(CatalogApiError::ProductNotFound(id))?;
        debug!("🔄️🏷️ Product #{} updated", product.id);
        self.notify(EntityMutatedEvent::updated(EntityKind::Product, product.id)).await;
        Ok(product)
    }

    /// Delete product `id`. Orders referencing the product are left as they are.
    pub async fn delete_product(&self, id: i64) -> Result<(), CatalogApiError<B>> {
        let deleted = self.db.delete_product(id).await.map_err(CatalogApiError::DatabaseError)?;
        if !deleted {
            return Err(CatalogApiError::ProductNotFound(id));
        }
        debug!("🔄️🏷️ Product #{id} deleted");
        self.notify(EntityMutatedEvent::deleted(EntityKind::Product, id)).await;
        Ok(())
    }

    pub async fn product_by_id(&self, id: i64) -> Result<Option<Product>, CatalogApiError<B>> {
        self.db.product_by_id(id).await.map_err(CatalogApiError::DatabaseError)
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogApiError<B>> {
        self.db.list_products().await.map_err(CatalogApiError::DatabaseError)
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
}
