use crate::Amount;
use crate::model::{TicketRequest, TicketType};

/// Per-type ticket totals of one purchase.
/// Repeated entries of the same type are summed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TicketCounts {
    pub adults: u64,
    pub children: u64,
    pub infants: u64,
}

impl TicketCounts {
    /// Saturates rather than overflowing on absurd quantities.
    pub fn tally<'a>(requests: impl IntoIterator<Item = &'a TicketRequest>) -> Self {
        let mut counts = Self::default();
        for request in requests {
            let slot = counts.slot_mut(request.ticket_type());
            *slot = slot.saturating_add(request.quantity());
        }
        counts
    }

    pub fn get(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Adult => self.adults,
            TicketType::Child => self.children,
            TicketType::Infant => self.infants,
        }
    }

    fn slot_mut(&mut self, ticket_type: TicketType) -> &mut u64 {
        match ticket_type {
            TicketType::Adult => &mut self.adults,
            TicketType::Child => &mut self.children,
            TicketType::Infant => &mut self.infants,
        }
    }

    pub fn total(&self) -> u64 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }

    /// Number of tickets that occupy a seat.
    pub fn seats(&self) -> u64 {
        TicketType::ALL
            .into_iter()
            .filter(|t| t.takes_seat())
            .map(|t| self.get(t))
            .fold(0, u64::saturating_add)
    }

    pub fn total_price(&self) -> Amount {
        TicketType::ALL
            .into_iter()
            .map(|t| t.price().saturating_mul(self.get(t)))
            .sum()
    }
}
