use chrono::{DateTime, NaiveDate, Utc};
use psa_common::Money;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

//--------------------------------------     OrderStatus       -------------------------------------------------------
/// The production status of an order. This is orthogonal to [`PaymentStatus`]: a canceled order can still carry an
/// outstanding balance, and a fully paid order can still be in production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
pub enum OrderStatus {
    /// The order has been accepted and the print job is underway.
    InProduction,
    /// The print job is done and the order can be collected.
    Completed,
    /// The order has been canceled by the client or an operator.
    Canceled,
}

impl OrderStatus {
    /// The Portuguese display label. Presentation only; the variant name is what is persisted and compared.
    pub fn label_pt(&self) -> &'static str {
        match self {
            OrderStatus::InProduction => "Em Produção",
            OrderStatus::Completed => "Finalizado",
            OrderStatus::Canceled => "Cancelado",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::InProduction => write!(f, "InProduction"),
            OrderStatus::Completed => write!(f, "Completed"),
            OrderStatus::Canceled => write!(f, "Canceled"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid status value: {0}")]
pub struct ConversionError(pub String);

impl FromStr for OrderStatus {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "InProduction" => Ok(Self::InProduction),
            "Completed" => Ok(Self::Completed),
            "Canceled" => Ok(Self::Canceled),
            s => Err(ConversionError(s.to_string())),
        }
    }
}

//--------------------------------------    PaymentStatus      -------------------------------------------------------
/// The payment classification of an order, always derived from `total` and `amount_paid`. Never set this from
/// operator input; [`crate::financials::derive_financial_state`] is the only producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Nothing has been paid yet.
    Pending,
    /// Some, but not all, of the total has been paid.
    PartiallyPaid,
    /// The total has been paid in full (or overpaid).
    FullyPaid,
}

impl PaymentStatus {
    /// The Portuguese display label. Presentation only; the variant name is what is persisted and compared.
    pub fn label_pt(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pendente",
            PaymentStatus::PartiallyPaid => "Pagamento Parcial",
            PaymentStatus::FullyPaid => "Pago 100%",
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "Pending"),
            PaymentStatus::PartiallyPaid => write!(f, "PartiallyPaid"),
            PaymentStatus::FullyPaid => write!(f, "FullyPaid"),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "PartiallyPaid" => Ok(Self::PartiallyPaid),
            "FullyPaid" => Ok(Self::FullyPaid),
            s => Err(ConversionError(s.to_string())),
        }
    }
}

//--------------------------------------        Client        --------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub phone: String,
    pub address: String,
}

//--------------------------------------        Product       --------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    /// The catalog unit price. Informational: it never feeds into an order's `total`, which operators enter by hand.
    pub price: Money,
}

//--------------------------------------         Order        --------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub client_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    /// Operator-entered. Not computed from `quantity × product.price`.
    pub total: Money,
    pub amount_paid: Money,
    /// Always `total - amount_paid`. Negative when the order was overpaid.
    pub remaining_amount: Money,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//--------------------------------------      OrderDraft      --------------------------------------------------------
/// An order payload as submitted by an operator, before validation and derivation.
///
/// Monetary fields arrive as free-form text, exactly as typed into the order form; `status` arrives as a string to be
/// checked against the closed status set. There is deliberately no way to supply `remaining_amount` or
/// `payment_status` here: those fields only ever come out of the financial state model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub client_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    /// Defaults to the current date when absent.
    #[serde(default)]
    pub order_date: Option<NaiveDate>,
    pub status: String,
    pub total: String,
    /// Defaults to zero when absent.
    #[serde(default)]
    pub amount_paid: Option<String>,
}

//--------------------------------------       NewOrder       --------------------------------------------------------
/// A validated order ready for the create or update path of the database backend. Produced exclusively by
/// [`crate::financials::prepare_order`], so its derived fields are always consistent with `total` and `amount_paid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub client_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    pub total: Money,
    pub amount_paid: Money,
    pub remaining_amount: Money,
    pub payment_status: PaymentStatus,
}

impl NewOrder {
    /// True if `order` holds the same editable and derived fields, ignoring identity and bookkeeping timestamps.
    pub fn is_equivalent(&self, order: &Order) -> bool {
        self.client_id == order.client_id
            && self.product_id == order.product_id
            && self.quantity == order.quantity
            && self.order_date == order.order_date
            && self.status == order.status
            && self.total == order.total
            && self.amount_paid == order.amount_paid
            && self.remaining_amount == order.remaining_amount
            && self.payment_status == order.payment_status
    }
}
