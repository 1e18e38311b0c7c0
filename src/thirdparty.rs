//! Contracts of the external payment and seat booking providers.
//!
//! The purchase service only depends on the two traits below. The default
//! implementations stand in for the real providers and always succeed.

use thiserror::Error;
use tracing::info;

use crate::Amount;
use crate::model::AccountId;

/// Failure reported by a payment provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("payment of {amount} for account {account_id} declined: {reason}")]
    Declined {
        account_id: AccountId,
        amount: Amount,
        reason: String,
    },
}

/// Failure reported by a seat booking provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("reservation of {seats} seats for account {account_id} failed: {reason}")]
    Unavailable {
        account_id: AccountId,
        seats: u64,
        reason: String,
    },
}

/// Collects the payment for a purchase.
pub trait PaymentCollector {
    fn make_payment(&self, account_id: AccountId, amount: Amount) -> Result<(), PaymentError>;
}

/// Reserves the seats of a purchase.
pub trait SeatReserver {
    fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), ReservationError>;
}

impl<T: PaymentCollector + ?Sized> PaymentCollector for &T {
    fn make_payment(&self, account_id: AccountId, amount: Amount) -> Result<(), PaymentError> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: SeatReserver + ?Sized> SeatReserver for &T {
    fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), ReservationError> {
        (**self).reserve_seats(account_id, seats)
    }
}

/// Payment provider that accepts every payment.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicketPaymentService;

impl PaymentCollector for TicketPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Amount) -> Result<(), PaymentError> {
        info!(account = %account_id, amount = %amount, "payment collected");
        Ok(())
    }
}

/// Seat booking provider that accepts every reservation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeatReservationService;

impl SeatReserver for SeatReservationService {
    fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), ReservationError> {
        info!(account = %account_id, seats, "seats reserved");
        Ok(())
    }
}
