use std::env;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use cinema_tickets::csv::{read_orders, write_receipts};
use cinema_tickets::{SeatReservationService, TicketPaymentService, TicketService};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: cinema-tickets <purchases.csv>");
        return ExitCode::from(2);
    };

    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    let orders = match read_orders(Path::new(&path)) {
        Ok(orders) => orders,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let service = TicketService::new(TicketPaymentService, SeatReservationService);
    let (order_sender, order_receiver) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        for result in orders {
            match result {
                Ok(order) => {
                    if order_sender.send(order).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    let receipts = service.run(ReceiverStream::new(order_receiver)).await;

    if let Err(e) = write_receipts(io::stdout().lock(), &receipts) {
        error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
