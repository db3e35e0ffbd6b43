//! Typed Rust client for the Voxbone DID-provisioning REST API.
//!
//! The crate is split the same way the API is: a domain layer of strong
//! types, a transport layer for wire-format quirks, and a client layer
//! orchestrating requests. Besides one method per endpoint, the client
//! carries [`VoxboneClient::allocate`], the multi-step workflow that turns
//! "N numbers of this kind in this country" into a completed order.
//!
//! ```rust,no_run
//! use voxbone::{AllocationRequest, Credentials, Quantity, VoxboneClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), voxbone::VoxboneError> {
//!     let client = VoxboneClient::new(Credentials::new("user", "secret")?);
//!     let request = AllocationRequest::new("USA")?.quantity(Quantity::new(2)?);
//!     match client.allocate(&request).await? {
//!         outcome if outcome.is_allocated() => println!("allocated: {outcome:?}"),
//!         outcome => println!("not allocated: {outcome:?}"),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, VoxboneClient, VoxboneClientBuilder, VoxboneError};
pub use domain::{
    AccountBalance, AddToCartResponse, AllocationOutcome, AllocationRequest, BalanceResponse,
    CancelDidsResponse, Cart, CartFilter, CartIdentifier, CartItem, CartResponse, CartsResponse,
    CheckoutResponse, CountriesResponse, Country, CountryCode, CountryFilter, CreateCartOptions,
    Did, DidFilter, DidGroup, DidGroupFilter, DidGroupId, DidGroupsResponse, DidId, DidsResponse,
    Feature, FeatureId, Order, OrderFilter, OrderReference, OrdersResponse, Pagination, Password,
    ProductCheckout, Quantity, Username, ValidationError,
};
