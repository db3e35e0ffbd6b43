use std::io;

use voxbone::{CountryCode, Credentials, DidGroupFilter, VoxboneClient};

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
    let filter = DidGroupFilter::new(CountryCode::new(country)?);

    let response = client.list_did_groups(&filter).await?;
    match response.did_groups {
        Some(groups) => {
            println!("{} group(s) (total {:?}):", groups.len(), response.result_count);
            for group in &groups {
                println!(
                    "  {}: {:?}/{:?} stock={} available={}",
                    group.did_group_id, group.country_code_a3, group.area_code, group.stock,
                    group.available
                );
            }
        }
        None => println!("no didGroups collection in the response"),
    }

    Ok(())
}
