//! Core domain types for ticket purchases.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::Amount;
use crate::service::PurchaseError;

/// Maximum number of tickets (of any type) in a single purchase.
pub const MAX_TICKETS_PER_PURCHASE: u64 = 20;

/// Account identifier, always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(u64);

impl AccountId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = PurchaseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u64::try_from(value) {
            Ok(id) if id > 0 => Ok(AccountId(id)),
            _ => Err(PurchaseError::InvalidAccount(value)),
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kinds of ticket that can be purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketType {
    Adult,
    Child,
    /// Sits on an adult's lap: free, and takes no seat.
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Unit price of one ticket of this type.
    pub const fn price(self) -> Amount {
        match self {
            TicketType::Adult => Amount::from_units(20),
            TicketType::Child => Amount::from_units(10),
            TicketType::Infant => Amount::from_units(0),
        }
    }

    /// Whether a ticket of this type occupies a seat.
    pub const fn takes_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl FromStr for TicketType {
    type Err = PurchaseError;

    /// Case-sensitive: only the upper-case names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(TicketType::Adult),
            "CHILD" => Ok(TicketType::Child),
            "INFANT" => Ok(TicketType::Infant),
            other => Err(PurchaseError::InvalidTicketType(other.to_string())),
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ticket request as received from the outside, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTicketRequest {
    pub ticket_type: String,
    pub quantity: String,
}

impl RawTicketRequest {
    pub fn new(ticket_type: impl Into<String>, quantity: impl ToString) -> Self {
        Self {
            ticket_type: ticket_type.into(),
            quantity: quantity.to_string(),
        }
    }
}

/// A validated request for `quantity` tickets of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketRequest {
    ticket_type: TicketType,
    quantity: u64,
}

impl TicketRequest {
    /// Build a request, rejecting a zero quantity.
    pub fn new(ticket_type: TicketType, quantity: u64) -> Result<Self, PurchaseError> {
        if quantity == 0 {
            return Err(PurchaseError::InvalidTicketQuantity {
                ticket_type: ticket_type.to_string(),
                quantity: quantity.to_string(),
            });
        }
        Ok(Self {
            ticket_type,
            quantity,
        })
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

impl TryFrom<&RawTicketRequest> for TicketRequest {
    type Error = PurchaseError;

    /// Type is checked before quantity.
    fn try_from(raw: &RawTicketRequest) -> Result<Self, Self::Error> {
        let ticket_type: TicketType = raw.ticket_type.parse()?;
        let invalid_quantity = || PurchaseError::InvalidTicketQuantity {
            ticket_type: raw.ticket_type.clone(),
            quantity: raw.quantity.clone(),
        };
        // Negative, fractional and non-numeric input all fail here. A leading
        // '+' is accepted. Integers too large for u64 are still positive and
        // are left to the ticket count bounds check.
        let quantity = match raw.quantity.parse::<u64>() {
            Ok(quantity) => quantity,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
            Err(_) => return Err(invalid_quantity()),
        };
        TicketRequest::new(ticket_type, quantity).map_err(|_| invalid_quantity())
    }
}

/// Result of an accepted purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseOutcome {
    pub total_price: Amount,
    pub seats_to_reserve: u64,
}

/// One purchase read from batch input: the raw account id and its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOrder {
    pub account_id: i64,
    pub tickets: Vec<RawTicketRequest>,
}

/// An accepted purchase, as reported by the batch driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub account_id: AccountId,
    pub outcome: PurchaseOutcome,
}
