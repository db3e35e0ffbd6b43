use serde::Deserialize;
use serde_json::{Value, json};

use super::TransportError;
use super::query::QueryBuilder;
use crate::domain::{
    AddToCartResponse, Cart, CartFilter, CartIdentifier, CartItem, CartResponse, CartsResponse,
    CheckoutResponse, CreateCartOptions, Pagination, ProductCheckout,
};

pub(crate) const CART_PATH: &str = "ordering/cart";

pub(crate) fn cart_path(cart_identifier: CartIdentifier) -> String {
    format!("{CART_PATH}/{cart_identifier}")
}

pub(crate) fn cart_product_path(cart_identifier: CartIdentifier) -> String {
    format!("{CART_PATH}/{cart_identifier}/product")
}

pub(crate) fn cart_checkout_path(cart_identifier: CartIdentifier) -> String {
    format!("{CART_PATH}/{cart_identifier}/checkout")
}

pub(crate) fn cart_query(filter: &CartFilter, defaults: Pagination) -> String {
    let mut query = QueryBuilder::new(filter.pagination, defaults);
    query.scalar_str("customerReference", filter.customer_reference.as_deref());
    query.finish()
}

pub(crate) fn encode_create_cart_body(options: &CreateCartOptions) -> String {
    let mut body = serde_json::Map::new();
    if let Some(reference) = options.customer_reference.as_ref() {
        body.insert(
            "customerReference".to_owned(),
            Value::String(reference.clone()),
        );
    }
    if let Some(description) = options.description.as_ref() {
        body.insert("description".to_owned(), Value::String(description.clone()));
    }
    Value::Object(body).to_string()
}

pub(crate) fn encode_cart_item_body(item: &CartItem) -> String {
    let body = match item {
        CartItem::Did {
            did_group_id,
            quantity,
        } => json!({
            "didCartItem": {
                "didGroupId": did_group_id.value(),
                "quantity": quantity.value(),
            }
        }),
        CartItem::Capacity { zone_id, quantity } => json!({
            "capacityCartItem": {
                "zoneId": zone_id,
                "quantity": quantity.value(),
            }
        }),
        CartItem::CreditPackage {
            credit_package_id,
            quantity,
        } => json!({
            "creditPackageCartItem": {
                "creditPackageId": credit_package_id,
                "quantity": quantity.value(),
            }
        }),
    };
    body.to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartJson {
    cart_identifier: u64,
    #[serde(default)]
    customer_reference: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    date_added: Option<String>,
}

impl From<CartJson> for Cart {
    fn from(value: CartJson) -> Self {
        Self {
            cart_identifier: CartIdentifier::new(value.cart_identifier),
            customer_reference: value.customer_reference,
            description: value.description,
            date_added: value.date_added,
        }
    }
}

/// Lenient decode for cart creation/fetch: the typed view is extracted
/// best-effort and the raw body is kept so rejection shapes can be forwarded
/// verbatim. A `cart` object without an identifier counts as malformed.
pub(crate) fn decode_cart_response(body: &str) -> Result<CartResponse, TransportError> {
    let raw: Value = serde_json::from_str(body)?;
    let cart = raw
        .get("cart")
        .and_then(|value| serde_json::from_value::<CartJson>(value.clone()).ok())
        .map(Cart::from);
    Ok(CartResponse { cart, raw })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartsJsonResponse {
    #[serde(default)]
    carts: Vec<CartJson>,
    #[serde(default)]
    result_count: Option<u64>,
}

pub(crate) fn decode_carts_response(body: &str) -> Result<CartsResponse, TransportError> {
    let parsed: CartsJsonResponse = serde_json::from_str(body)?;
    Ok(CartsResponse {
        carts: parsed.carts.into_iter().map(Cart::from).collect(),
        result_count: parsed.result_count,
    })
}

pub(crate) fn decode_add_to_cart_response(body: &str) -> Result<AddToCartResponse, TransportError> {
    let raw: Value = serde_json::from_str(body)?;
    let status = field_str(&raw, "status");
    Ok(AddToCartResponse { status, raw })
}

pub(crate) fn decode_checkout_response(body: &str) -> Result<CheckoutResponse, TransportError> {
    let raw: Value = serde_json::from_str(body)?;
    let status = field_str(&raw, "status");
    let product_checkout_list = raw
        .get("productCheckoutList")
        .and_then(Value::as_array)
        .map(|products| {
            products
                .iter()
                .map(|product| ProductCheckout {
                    product_type: field_str(product, "productType"),
                    order_reference: field_str(product, "orderReference"),
                    status: field_str(product, "status"),
                })
                .collect()
        });
    Ok(CheckoutResponse {
        status,
        product_checkout_list,
        raw,
    })
}

fn field_str(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}
