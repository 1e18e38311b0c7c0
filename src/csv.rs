use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::model::{PurchaseOrder, RawTicketRequest, Receipt};

/// Errors that can occur when reading orders or writing receipts
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open '{path}': {source}")]
    Open { path: String, source: csv::Error },

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: malformed ticket '{token}', expected TYPE:QUANTITY")]
    MalformedTicket { line: usize, token: String },

    #[error("failed to write receipt: {0}")]
    Write(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Deserialize)]
struct InputRow {
    account: i64,
    tickets: String,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    account: u64,
    total_price: String,
    seats_reserved: u64,
}

/// Split `ADULT:2 CHILD:1` into raw requests. Type and quantity are left unchecked.
fn parse_tickets(line: usize, field: &str) -> Result<Vec<RawTicketRequest>, CsvError> {
    field
        .split_whitespace()
        .map(|token| {
            token
                .split_once(':')
                .map(|(ticket_type, quantity)| RawTicketRequest::new(ticket_type, quantity))
                .ok_or_else(|| CsvError::MalformedTicket {
                    line,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Read purchase orders from a csv file
pub fn read_orders(
    path: &Path,
) -> Result<impl Iterator<Item = Result<PurchaseOrder, CsvError>> + use<>, CsvError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| CsvError::Open {
            path: path.display().to_string(),
            source,
        })?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            Ok(PurchaseOrder {
                account_id: row.account,
                tickets: parse_tickets(line, &row.tickets)?,
            })
        }))
}

/// Write receipts of accepted purchases in csv format
pub fn write_receipts<'a>(
    writer: impl io::Write,
    receipts: impl IntoIterator<Item = &'a Receipt>,
) -> Result<(), CsvError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    // header is written even when nothing was accepted
    writer.write_record(["account", "total_price", "seats_reserved"])?;

    for receipt in receipts {
        writer.serialize(OutputRow {
            account: receipt.account_id.get(),
            total_price: receipt.outcome.total_price.to_string(),
            seats_reserved: receipt.outcome.seats_to_reserve,
        })?;
    }

    writer.flush()?;
    Ok(())
}
