use std::io;

use voxbone::{AllocationOutcome, AllocationRequest, Credentials, Quantity, VoxboneClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("VOXBONE_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VOXBONE_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("VOXBONE_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VOXBONE_PASSWORD environment variable is required",
        )
    })?;
    let country = std::env::var("VOXBONE_COUNTRY").unwrap_or_else(|_| "USA".to_owned());

    let client = VoxboneClient::new(Credentials::new(username, password)?);
    let request = AllocationRequest::new(country)?.quantity(Quantity::new(1)?);

    match client.allocate(&request).await? {
        AllocationOutcome::Allocated {
            order_reference,
            dids,
        } => {
            println!("order {order_reference} delivered {} did(s):", dids.dids.len());
            for did in &dids.dids {
                println!("  {} ({:?})", did.did_id, did.e164);
            }
        }
        outcome => {
            println!("allocation did not complete: {outcome:?}");
            if let Some(message) = outcome.failure_message() {
                println!("  {message}");
            }
        }
    }

    Ok(())
}
