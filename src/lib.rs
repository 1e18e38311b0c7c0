pub mod amount;
pub mod csv;
pub mod model;
pub mod service;
pub mod thirdparty;

pub use amount::Amount;
pub use model::{
    AccountId, MAX_TICKETS_PER_PURCHASE, PurchaseOrder, PurchaseOutcome, RawTicketRequest,
    Receipt, TicketRequest, TicketType,
};
pub use service::{PurchaseError, PurchaseRule, TicketService};
pub use thirdparty::{
    PaymentCollector, PaymentError, ReservationError, SeatReservationService, SeatReserver,
    TicketPaymentService,
};
