//! Notification classification.
//!
//! A pure function from three raw signal fields to one of five known
//! event kinds, or [`EventKind::Unknown`]. Classification never fails:
//! Unknown is a first-class terminal result meaning "no recognized
//! semantics", routed by callers for manual triage or ignored.

use std::fmt;

/// Semantic kind of an inbound notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    OrderCreated,
    AuthorizationCreated,
    PaymentCompleted,
    PaymentRefunded,
    BillingAgreementCancelled,
    Unknown,
}

impl EventKind {
    /// The `type` discriminant carried by records of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::OrderCreated => "order_created",
            EventKind::AuthorizationCreated => "authorization_created",
            EventKind::PaymentCompleted => "payment_completed",
            EventKind::PaymentRefunded => "payment_refunded",
            EventKind::BillingAgreementCancelled => "billing_agreement_cancelled",
            EventKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determine a notification's semantic kind from its raw signal fields.
///
/// All three inputs are lower-cased first. A `mp_cancel` transaction type
/// wins regardless of the other two fields; otherwise the
/// `(payment_status, pending_reason)` pair is matched exactly against the
/// provider's fixed table.
pub fn classify(txn_type: &str, payment_status: &str, pending_reason: &str) -> EventKind {
    if txn_type.trim().eq_ignore_ascii_case("mp_cancel") {
        return EventKind::BillingAgreementCancelled;
    }

    let status = payment_status.trim().to_lowercase();
    let reason = pending_reason.trim().to_lowercase();

    match (status.as_str(), reason.as_str()) {
        ("pending", "order") => EventKind::OrderCreated,
        ("pending", "authorization") => EventKind::AuthorizationCreated,
        ("completed", "") => EventKind::PaymentCompleted,
        ("refunded", "") => EventKind::PaymentRefunded,
        _ => EventKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mp_cancel_wins_regardless_of_other_fields() {
        assert_eq!(
            classify("mp_cancel", "Completed", ""),
            EventKind::BillingAgreementCancelled
        );
        assert_eq!(
            classify("MP_CANCEL", "pending", "order"),
            EventKind::BillingAgreementCancelled
        );
        assert_eq!(
            classify("mp_cancel", "anything", "whatever"),
            EventKind::BillingAgreementCancelled
        );
    }

    #[test]
    fn status_reason_table() {
        assert_eq!(classify("web_accept", "pending", "order"), EventKind::OrderCreated);
        assert_eq!(
            classify("web_accept", "pending", "authorization"),
            EventKind::AuthorizationCreated
        );
        assert_eq!(classify("web_accept", "completed", ""), EventKind::PaymentCompleted);
        assert_eq!(classify("web_accept", "refunded", ""), EventKind::PaymentRefunded);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("web_accept", "Pending", "Order"), EventKind::OrderCreated);
        assert_eq!(classify("web_accept", "COMPLETED", ""), EventKind::PaymentCompleted);
    }

    #[test]
    fn unrecognized_combinations_are_unknown() {
        assert_eq!(classify("web_accept", "pending", ""), EventKind::Unknown);
        assert_eq!(classify("web_accept", "pending", "echeck"), EventKind::Unknown);
        assert_eq!(classify("web_accept", "completed", "order"), EventKind::Unknown);
        assert_eq!(classify("web_accept", "denied", ""), EventKind::Unknown);
        assert_eq!(classify("", "", ""), EventKind::Unknown);
    }
}
