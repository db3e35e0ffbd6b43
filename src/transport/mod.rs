//! Transport layer: query strings, JSON bodies, and response decoding.

mod cart;
mod inventory;
mod ordering;
mod query;

pub(crate) use cart::{
    CART_PATH, cart_checkout_path, cart_path, cart_product_path, cart_query,
    decode_add_to_cart_response, decode_cart_response, decode_carts_response,
    decode_checkout_response, encode_cart_item_body, encode_create_cart_body,
};
pub(crate) use inventory::{
    COUNTRY_PATH, DID_GROUP_PATH, DID_PATH, country_query, decode_countries_response,
    decode_did_groups_response, decode_dids_response, did_group_query, did_query,
};
pub(crate) use ordering::{
    ACCOUNT_BALANCE_PATH, CANCEL_PATH, ORDER_PATH, decode_balance_response,
    decode_cancel_response, decode_orders_response, encode_cancel_body, order_query,
};

#[derive(Debug, thiserror::Error)]
pub(crate) enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}
