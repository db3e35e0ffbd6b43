use serde_json::Value;

use crate::domain::value::{
    CartIdentifier, DidGroupId, DidId, FeatureId, OrderReference, Quantity,
};

#[derive(Debug, Clone, PartialEq)]
/// A purchasable block of numbers sharing country/type/feature
/// characteristics; the unit of inventory search and allocation.
pub struct DidGroup {
    pub did_group_id: DidGroupId,
    pub country_code_a3: Option<String>,
    pub state_id: Option<u64>,
    pub did_type: Option<String>,
    pub city_name: Option<String>,
    pub area_code: Option<String>,
    pub stock: u64,
    pub available: bool,
    pub setup_100: Option<u64>,
    pub monthly_100: Option<u64>,
    pub features: Vec<Feature>,
}

impl DidGroup {
    /// Whether this group can satisfy an order of `quantity` numbers.
    ///
    /// Vendor ordering is authoritative: the allocation workflow picks the
    /// first group in response order for which this holds, never re-sorting.
    pub fn can_fill(&self, quantity: Quantity) -> bool {
        self.available && self.stock >= u64::from(quantity.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub feature_id: FeatureId,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Result of an `inventory/didgroup` search.
///
/// `did_groups` is `None` when the response body carried no `didGroups`
/// collection at all, which the allocation workflow treats differently from
/// an empty collection.
pub struct DidGroupsResponse {
    pub did_groups: Option<Vec<DidGroup>>,
    pub result_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
/// A single provisioned telephone number.
pub struct Did {
    pub did_id: DidId,
    pub e164: Option<String>,
    pub did_group_id: Option<DidGroupId>,
    pub country_code_a3: Option<String>,
    pub city_name: Option<String>,
    pub area_code: Option<String>,
    pub order_reference: Option<String>,
    pub delivery_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
/// Result of an `inventory/did` listing.
pub struct DidsResponse {
    pub dids: Vec<Did>,
    pub result_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub country_code_a3: String,
    pub country_name: Option<String>,
    pub has_states: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountriesResponse {
    pub countries: Vec<Country>,
    pub result_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A server-side staging area accumulating items before checkout. The server
/// owns its lifetime; checkout consumes it and the client never deletes one.
pub struct Cart {
    pub cart_identifier: CartIdentifier,
    pub customer_reference: Option<String>,
    pub description: Option<String>,
    pub date_added: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Result of creating or fetching a single cart.
///
/// `cart` is `None` when the body lacked a well-formed cart object; `raw`
/// preserves the upstream payload so failure shapes can be forwarded
/// verbatim.
pub struct CartResponse {
    pub cart: Option<Cart>,
    pub raw: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartsResponse {
    pub carts: Vec<Cart>,
    pub result_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
/// Result of adding a product to a cart. Anything other than
/// `status == "SUCCESS"` is a business-level rejection.
pub struct AddToCartResponse {
    pub status: Option<String>,
    pub raw: Value,
}

impl AddToCartResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("SUCCESS")
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Result of a cart checkout.
pub struct CheckoutResponse {
    pub status: Option<String>,
    pub product_checkout_list: Option<Vec<ProductCheckout>>,
    pub raw: Value,
}

impl CheckoutResponse {
    /// The order reference of the first checked-out product, when the
    /// checkout produced a usable one.
    pub fn first_order_reference(&self) -> Option<&str> {
        self.product_checkout_list
            .as_deref()?
            .first()?
            .order_reference
            .as_deref()
            .filter(|reference| !reference.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductCheckout {
    pub product_type: Option<String>,
    pub order_reference: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub reference: Option<String>,
    pub status: Option<String>,
    pub date_created: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
    pub result_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountBalance {
    pub balance: f64,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceResponse {
    pub account_balance: Option<AccountBalance>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CancelDidsResponse {
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Terminal outcome of the allocation workflow.
///
/// Business-level failures are values, not errors: transport and HTTP
/// failures surface as [`VoxboneError`](crate::VoxboneError) instead. The
/// rejection variants carry the upstream response body verbatim.
pub enum AllocationOutcome {
    /// The order went through; `dids` is the inventory listing filtered by
    /// the derived order reference.
    Allocated {
        order_reference: OrderReference,
        dids: DidsResponse,
    },
    /// The inventory search returned no `didGroups` collection.
    NoGroupFound,
    /// No group in the search results was available with sufficient stock.
    NoGroupAvailable,
    /// Cart creation did not return a well-formed cart.
    CartRejected(Value),
    /// The cart add was not acknowledged with `status == "SUCCESS"`.
    ItemRejected(Value),
    /// Checkout completed without a usable `productCheckoutList`; the raw
    /// checkout body is preserved as-is.
    Unconfirmed(Value),
}

impl AllocationOutcome {
    pub fn is_allocated(&self) -> bool {
        matches!(self, Self::Allocated { .. })
    }

    /// The allocated listing, when the workflow succeeded.
    pub fn dids(&self) -> Option<&DidsResponse> {
        match self {
            Self::Allocated { dids, .. } => Some(dids),
            _ => None,
        }
    }

    /// Stable failure message for the two inventory-side rejections.
    pub fn failure_message(&self) -> Option<&'static str> {
        match self {
            Self::NoGroupFound => Some("No DID Group found."),
            Self::NoGroupAvailable => Some("No DID group available."),
            _ => None,
        }
    }
}
