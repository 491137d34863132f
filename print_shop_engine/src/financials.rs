//! The order financial state model.
//!
//! Every order carries two derived fields, `remaining_amount` and `payment_status`. This module is the only producer
//! of those fields: both the create and the edit flow run an [`OrderDraft`] through [`prepare_order`] before handing
//! the result to the database backend, so a persisted order can never disagree with its own amounts.
//!
//! Everything here is pure and synchronous. No I/O, no shared state, no awaiting.

use chrono::Utc;
use log::warn;
use psa_common::Money;
use thiserror::Error;

use crate::db_types::{NewOrder, OrderDraft, OrderStatus, PaymentStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderValidationError {
    #[error("Order quantity must be at least 1, but got {0}")]
    InvalidQuantity(i64),
    #[error("Invalid order status: {0}")]
    InvalidStatus(String),
}

/// Recomputes the derived financial fields for the given amounts.
///
/// `remaining_amount` is `total - amount_paid` and is surfaced as-is when negative: an overpayment is representable
/// and is not an error. The classification rules are evaluated in order, first match wins:
///
/// 1. `amount_paid <= 0` → `Pending`
/// 2. `amount_paid >= total` → `FullyPaid`
/// 3. otherwise → `PartiallyPaid`
///
/// The rule order is load-bearing: a zero-total order with nothing paid matches rule 1 before rule 2, so owing
/// nothing does not count as being paid in full.
pub fn derive_financial_state(total: Money, amount_paid: Money) -> (Money, PaymentStatus) {
    let remaining = total - amount_paid;
    let payment_status = if amount_paid <= Money::ZERO {
        PaymentStatus::Pending
    } else if amount_paid >= total {
        PaymentStatus::FullyPaid
    } else {
        PaymentStatus::PartiallyPaid
    };
    (remaining, payment_status)
}

/// Validates an operator-submitted draft and derives its financial state, yielding a [`NewOrder`] ready for the
/// create or update path of the backend.
///
/// Checks that fail the whole submission: `quantity` below 1, and a `status` outside the closed status set. Monetary
/// fields are deliberately forgiving instead: text that does not parse as a number is coerced to zero (the order
/// forms validate number format upstream; the engine must not hard-fail at the persistence boundary), and a negative
/// literal is clamped to zero. Both coercions are logged.
///
/// An absent `order_date` defaults to today; an absent `amount_paid` defaults to zero, which classifies the order as
/// `Pending`.
pub fn prepare_order(draft: OrderDraft) -> Result<NewOrder, OrderValidationError> {
    if draft.quantity < 1 {
        return Err(OrderValidationError::InvalidQuantity(draft.quantity));
    }
    let status = draft
        .status
        .parse::<OrderStatus>()
        .map_err(|_| OrderValidationError::InvalidStatus(draft.status.clone()))?;
    let total = parse_amount(&draft.total, "total");
    let amount_paid = draft.amount_paid.as_deref().map(|v| parse_amount(v, "amount_paid")).unwrap_or(Money::ZERO);
    let order_date = draft.order_date.unwrap_or_else(|| Utc::now().date_naive());
    let (remaining_amount, payment_status) = derive_financial_state(total, amount_paid);
    Ok(NewOrder {
        client_id: draft.client_id,
        product_id: draft.product_id,
        quantity: draft.quantity,
        order_date,
        status,
        total,
        amount_paid,
        remaining_amount,
        payment_status,
    })
}

fn parse_amount(value: &str, field: &str) -> Money {
    let amount = match value.parse::<Money>() {
        Ok(amount) => amount,
        Err(_) => {
            warn!("💱️ Unparsable {field} value {value:?} coerced to zero");
            return Money::ZERO;
        },
    };
    if amount.is_negative() {
        warn!("💱️ Negative {field} value {value:?} clamped to zero");
        return Money::ZERO;
    }
    amount
}

#[cfg(test)]
mod test {
    use super::*;

    fn draft(total: &str, amount_paid: &str) -> OrderDraft {
        OrderDraft {
            client_id: 1,
            product_id: 1,
            quantity: 1,
            order_date: Some("2024-06-01".parse().unwrap()),
            status: "InProduction".to_string(),
            total: total.to_string(),
            amount_paid: Some(amount_paid.to_string()),
        }
    }

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn remaining_is_exact_difference() {
        let (remaining, _) = derive_financial_state(money("100.00"), money("45.50"));
        assert_eq!(remaining, money("54.50"));
        let (remaining, _) = derive_financial_state(money("0.10"), money("0.03"));
        assert_eq!(remaining, money("0.07"));
    }

    #[test]
    fn nothing_paid_is_pending() {
        let (remaining, status) = derive_financial_state(money("100.00"), Money::ZERO);
        assert_eq!(remaining, money("100.00"));
        assert_eq!(status, PaymentStatus::Pending);
    }

    #[test]
    fn partial_payment() {
        let (remaining, status) = derive_financial_state(money("100.00"), money("45.50"));
        assert_eq!(remaining, money("54.50"));
        assert_eq!(status, PaymentStatus::PartiallyPaid);
    }

    #[test]
    fn exact_payment_is_fully_paid() {
        let (remaining, status) = derive_financial_state(money("100.00"), money("100.00"));
        assert_eq!(remaining, Money::ZERO);
        assert_eq!(status, PaymentStatus::FullyPaid);
    }

    #[test]
    fn overpayment_is_fully_paid_with_negative_remainder() {
        let (remaining, status) = derive_financial_state(money("50.00"), money("75.00"));
        assert_eq!(remaining, money("-25.00"));
        assert_eq!(status, PaymentStatus::FullyPaid);
    }

    #[test]
    fn zero_total_zero_paid_is_pending_not_fully_paid() {
        // Rule 1 wins the tie against rule 2. Owing nothing is not the same as having paid.
        let (remaining, status) = derive_financial_state(Money::ZERO, Money::ZERO);
        assert_eq!(remaining, Money::ZERO);
        assert_eq!(status, PaymentStatus::Pending);
    }

    #[test]
    fn derivation_is_idempotent() {
        let first = derive_financial_state(money("80.00"), money("30.00"));
        let second = derive_financial_state(money("80.00"), money("30.00"));
        assert_eq!(first, second);
    }

    #[test]
    fn prepare_fills_derived_fields() {
        let order = prepare_order(draft("100.00", "45.50")).unwrap();
        assert_eq!(order.total, money("100.00"));
        assert_eq!(order.amount_paid, money("45.50"));
        assert_eq!(order.remaining_amount, money("54.50"));
        assert_eq!(order.payment_status, PaymentStatus::PartiallyPaid);
        assert_eq!(order.status, OrderStatus::InProduction);
    }

    #[test]
    fn prepare_rejects_zero_quantity() {
        let mut d = draft("100.00", "0");
        d.quantity = 0;
        assert_eq!(prepare_order(d), Err(OrderValidationError::InvalidQuantity(0)));
    }

    #[test]
    fn prepare_rejects_unknown_status() {
        let mut d = draft("100.00", "0");
        d.status = "Shipped".to_string();
        assert_eq!(prepare_order(d), Err(OrderValidationError::InvalidStatus("Shipped".to_string())));
    }

    #[test]
    fn prepare_rejects_localized_status_label() {
        // Only the closed enum identities are valid input; display labels are not.
        let mut d = draft("100.00", "0");
        d.status = "Em Produção".to_string();
        assert!(matches!(prepare_order(d), Err(OrderValidationError::InvalidStatus(_))));
    }

    #[test]
    fn unparsable_total_coerces_to_zero() {
        let order = prepare_order(draft("abc", "0")).unwrap();
        assert_eq!(order.total, Money::ZERO);
        assert_eq!(order.remaining_amount, Money::ZERO);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn unparsable_amount_paid_coerces_to_zero() {
        let order = prepare_order(draft("100.00", "12,50")).unwrap();
        assert_eq!(order.amount_paid, Money::ZERO);
        assert_eq!(order.remaining_amount, money("100.00"));
        assert_eq!(order.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn negative_amounts_clamp_to_zero() {
        let order = prepare_order(draft("-10.00", "-5.00")).unwrap();
        assert_eq!(order.total, Money::ZERO);
        assert_eq!(order.amount_paid, Money::ZERO);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn absent_amount_paid_defaults_to_zero() {
        let mut d = draft("100.00", "0");
        d.amount_paid = None;
        let order = prepare_order(d).unwrap();
        assert_eq!(order.amount_paid, Money::ZERO);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn absent_order_date_defaults_to_today() {
        let mut d = draft("100.00", "0");
        d.order_date = None;
        let order = prepare_order(d).unwrap();
        assert_eq!(order.order_date, Utc::now().date_naive());
    }

    #[test]
    fn draft_json_cannot_smuggle_derived_fields() {
        // Derived fields in an incoming payload are simply not part of the draft shape; whatever the caller sends
        // for them is discarded and recomputed.
        let payload = r#"{
            "client_id": 1,
            "product_id": 2,
            "quantity": 3,
            "status": "Completed",
            "total": "100.00",
            "amount_paid": "100.00",
            "remaining_amount": "999.99",
            "payment_status": "Pending"
        }"#;
        let d: OrderDraft = serde_json::from_str(payload).unwrap();
        let order = prepare_order(d).unwrap();
        assert_eq!(order.remaining_amount, Money::ZERO);
        assert_eq!(order.payment_status, PaymentStatus::FullyPaid);
    }
}
