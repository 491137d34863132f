use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db_types::{Order, OrderStatus, PaymentStatus};

/// The `OrderManagement` trait defines the behaviour for querying information about orders in the database backend.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    type Error: std::error::Error;

    async fn order_by_id(&self, id: i64) -> Result<Option<Order>, Self::Error>;

    /// Fetches orders matching the filter, most recent order date first.
    async fn fetch_orders(&self, query: OrderQueryFilter) -> Result<Vec<Order>, Self::Error>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderQueryFilter {
    pub client_id: Option<i64>,
    pub product_id: Option<i64>,
    pub status: Option<Vec<OrderStatus>>,
    pub payment_status: Option<Vec<PaymentStatus>>,
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl OrderQueryFilter {
    pub fn with_client_id(mut self, client_id: i64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn with_product_id(mut self, product_id: i64) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status.get_or_insert_with(Vec::new).push(status);
        self
    }

    pub fn with_payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status.get_or_insert_with(Vec::new).push(status);
        self
    }

    pub fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    pub fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.client_id.is_none()
            && self.product_id.is_none()
            && self.status.as_ref().map_or(true, Vec::is_empty)
            && self.payment_status.as_ref().map_or(true, Vec::is_empty)
            && self.since.is_none()
            && self.until.is_none()
    }
}

impl Display for OrderQueryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "No filters.");
        }
        if let Some(client_id) = self.client_id {
            write!(f, "client_id: {client_id}. ")?;
        }
        if let Some(product_id) = self.product_id {
            write!(f, "product_id: {product_id}. ")?;
        }
        if let Some(statuses) = &self.status {
            let statuses = statuses.iter().map(|s| s.to_string()).collect::<Vec<String>>().join(",");
            write!(f, "statuses: [{statuses}]. ")?;
        }
        if let Some(statuses) = &self.payment_status {
            let statuses = statuses.iter().map(|s| s.to_string()).collect::<Vec<String>>().join(",");
            write!(f, "payment statuses: [{statuses}]. ")?;
        }
        if let Some(since) = &self.since {
            write!(f, "since {since}. ")?;
        }
        if let Some(until) = &self.until {
            write!(f, "until {until}. ")?;
        }
        Ok(())
    }
}
