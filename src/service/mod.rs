//! Ticket purchase service.
//!
//! Validates a purchase, prices it, then hands the payment and the seat
//! reservation to the external providers. Nothing is kept between purchases.
//! Also supports an async stream of purchase orders.

use tokio_stream::{Stream, StreamExt};
use tracing::{info, warn};

use crate::model::{
    AccountId, MAX_TICKETS_PER_PURCHASE, PurchaseOrder, PurchaseOutcome, RawTicketRequest,
    Receipt, TicketRequest,
};
use crate::thirdparty::{PaymentCollector, SeatReserver};

mod counts;
pub use counts::TicketCounts;

mod error;
pub use error::{PurchaseError, PurchaseRule};

/// The purchase validator and pricer.
pub struct TicketService<P, R> {
    payments: P,
    reservations: R,
}

/// Public API
impl<P: PaymentCollector, R: SeatReserver> TicketService<P, R> {
    pub fn new(payments: P, reservations: R) -> Self {
        Self {
            payments,
            reservations,
        }
    }

    /// Validate raw input and purchase the requested tickets.
    ///
    /// The first invalid input aborts the purchase; the providers are only
    /// called once every check has passed.
    pub fn purchase(
        &self,
        account_id: i64,
        requests: &[RawTicketRequest],
    ) -> Result<PurchaseOutcome, PurchaseError> {
        let result = self.evaluate(account_id, requests);
        Self::log_result(account_id, &result);
        result.map(|receipt| receipt.outcome)
    }

    /// Purchase already validated ticket requests.
    pub fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> Result<PurchaseOutcome, PurchaseError> {
        let counts = Self::validate(requests)?;

        let outcome = PurchaseOutcome {
            total_price: counts.total_price(),
            seats_to_reserve: counts.seats(),
        };

        // Provider failures are passed through untouched
        self.payments.make_payment(account_id, outcome.total_price)?;
        self.reservations
            .reserve_seats(account_id, outcome.seats_to_reserve)?;

        Ok(outcome)
    }

    /// Run the service over the given order stream, returning the receipts of
    /// accepted purchases in order.
    pub async fn run(&self, mut stream: impl Stream<Item = PurchaseOrder> + Unpin) -> Vec<Receipt> {
        let mut receipts = Vec::new();
        while let Some(order) = stream.next().await {
            // a rejected purchase must not stop the batch
            match self.evaluate(order.account_id, &order.tickets) {
                Ok(receipt) => {
                    Self::log_accepted(&receipt);
                    receipts.push(receipt);
                }
                Err(e) => {
                    warn!(account = order.account_id, "purchase rejected: {e}");
                }
            }
        }
        receipts
    }
}

/// Private API
impl<P: PaymentCollector, R: SeatReserver> TicketService<P, R> {
    /// Parse, validate and purchase.
    fn evaluate(
        &self,
        account_id: i64,
        requests: &[RawTicketRequest],
    ) -> Result<Receipt, PurchaseError> {
        let (account, tickets) = Self::parse(account_id, requests)?;
        let outcome = self.purchase_tickets(account, &tickets)?;
        Ok(Receipt {
            account_id: account,
            outcome,
        })
    }

    fn log_accepted(receipt: &Receipt) {
        info!(
            account = %receipt.account_id,
            price = %receipt.outcome.total_price,
            seats = receipt.outcome.seats_to_reserve,
            "purchase accepted"
        );
    }

    /// Small helper to log `purchase` results
    fn log_result(account_id: i64, result: &Result<Receipt, PurchaseError>) {
        match result {
            Ok(receipt) => Self::log_accepted(receipt),
            Err(e) => {
                info!(account = account_id, reason = %e, "purchase rejected");
            }
        }
    }

    /// Parse the account and every raw request, stopping at the first bad one:
    /// - Account id must be positive
    /// - At least one request
    /// - Each request has a known type and a positive quantity
    fn parse(
        account_id: i64,
        requests: &[RawTicketRequest],
    ) -> Result<(AccountId, Vec<TicketRequest>), PurchaseError> {
        let account = AccountId::try_from(account_id)?;

        if requests.is_empty() {
            return Err(PurchaseRule::NoTicketRequests.into());
        }

        let tickets = requests
            .iter()
            .map(TicketRequest::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((account, tickets))
    }

    /// Check the rules that span the whole purchase:
    /// - At least one request
    /// - Between 1 and `MAX_TICKETS_PER_PURCHASE` tickets in total
    /// - At least one adult
    /// - No more infants than adults, as each infant sits on an adult's lap
    fn validate(requests: &[TicketRequest]) -> Result<TicketCounts, PurchaseRule> {
        if requests.is_empty() {
            return Err(PurchaseRule::NoTicketRequests);
        }

        let counts = TicketCounts::tally(requests);

        let total = counts.total();
        if !(1..=MAX_TICKETS_PER_PURCHASE).contains(&total) {
            return Err(PurchaseRule::TicketCountOutOfBounds(total));
        }

        if counts.adults == 0 {
            return Err(PurchaseRule::AdultRequired);
        }

        if counts.infants > counts.adults {
            return Err(PurchaseRule::InfantsExceedAdults {
                infants: counts.infants,
                adults: counts.adults,
            });
        }

        Ok(counts)
    }
}
