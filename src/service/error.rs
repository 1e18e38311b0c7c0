//! Error types for purchase evaluation.

use thiserror::Error;

use crate::model::MAX_TICKETS_PER_PURCHASE;
use crate::thirdparty::{PaymentError, ReservationError};

/// Top-level error returned by [`TicketService::purchase`](super::TicketService::purchase).
#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error("invalid account id {0}: must be a positive integer")]
    InvalidAccount(i64),

    #[error("invalid ticket type '{0}': must be ADULT, CHILD or INFANT")]
    InvalidTicketType(String),

    #[error("invalid quantity '{quantity}' for {ticket_type}: must be a positive integer")]
    InvalidTicketQuantity {
        ticket_type: String,
        quantity: String,
    },

    #[error("invalid purchase: {0}")]
    InvalidPurchase(#[from] PurchaseRule),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Reservation(#[from] ReservationError),
}

/// Business rule broken by the purchase as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PurchaseRule {
    #[error("at least one ticket request required")]
    NoTicketRequests,

    #[error("ticket count {0} out of bounds (1 to {max})", max = MAX_TICKETS_PER_PURCHASE)]
    TicketCountOutOfBounds(u64),

    #[error("adult ticket required")]
    AdultRequired,

    #[error("infant count {infants} exceeds adult count {adults}")]
    InfantsExceedAdults { infants: u64, adults: u64 },
}
