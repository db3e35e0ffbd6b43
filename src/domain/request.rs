use crate::domain::validation::ValidationError;
use crate::domain::value::{
    CountryCode, DidGroupId, DidId, FeatureId, OrderReference, Quantity,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Page window for list endpoints.
///
/// A filter either carries a complete window or none at all; when none is
/// supplied the client's configured defaults are used for both fields.
pub struct Pagination {
    pub page_number: u32,
    pub page_size: u32,
}

impl Pagination {
    /// Fallback window applied when a filter carries no pagination.
    pub const DEFAULT: Self = Self {
        page_number: 0,
        page_size: 20,
    };

    pub const fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone)]
/// Filter for `inventory/didgroup`. The country code is the one required
/// parameter; everything else narrows the search.
pub struct DidGroupFilter {
    country: CountryCode,
    pub did_group_ids: Vec<DidGroupId>,
    pub feature_ids: Vec<FeatureId>,
    pub state_id: Option<u64>,
    pub city_name_pattern: Option<String>,
    pub rate_center: Option<String>,
    pub area_code: Option<String>,
    pub did_type: Option<String>,
    pub show_empty: bool,
    pub pagination: Option<Pagination>,
}

impl DidGroupFilter {
    pub fn new(country: CountryCode) -> Self {
        Self {
            country,
            did_group_ids: Vec::new(),
            feature_ids: Vec::new(),
            state_id: None,
            city_name_pattern: None,
            rate_center: None,
            area_code: None,
            did_type: None,
            show_empty: false,
            pagination: None,
        }
    }

    pub fn country(&self) -> &CountryCode {
        &self.country
    }
}

#[derive(Debug, Clone, Default)]
/// Filter for `inventory/did`. All fields are optional.
pub struct DidFilter {
    pub did_ids: Vec<DidId>,
    pub did_group_ids: Vec<DidGroupId>,
    pub e164_pattern: Option<String>,
    pub regulation_address_id: Option<u64>,
    pub voice_uri_id: Option<u64>,
    pub fax_uri_id: Option<u64>,
    pub sms_link_group_id: Option<u64>,
    pub need_address_link: bool,
    pub service_type: Option<String>,
    pub country_code: Option<CountryCode>,
    pub order_reference: Option<OrderReference>,
    pub porting_reference: Option<String>,
    pub delivery_id: Option<u64>,
    pub sms_outbound: bool,
    pub web_rtc_enabled: bool,
    pub pagination: Option<Pagination>,
}

impl DidFilter {
    /// Filter listing the DIDs delivered under one order.
    pub fn for_order(reference: OrderReference) -> Self {
        Self {
            order_reference: Some(reference),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Filter for `inventory/country`.
pub struct CountryFilter {
    pub country_code: Option<CountryCode>,
    pub did_type: Option<String>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default)]
/// Filter for `ordering/order`.
pub struct OrderFilter {
    pub reference: Option<OrderReference>,
    pub status: Option<String>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default)]
/// Filter for listing carts via `ordering/cart`.
pub struct CartFilter {
    pub customer_reference: Option<String>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default)]
/// Optional fields of the `ordering/cart` creation body.
pub struct CreateCartOptions {
    pub customer_reference: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One product line added to a cart. The wire body is externally tagged by
/// the item kind (`didCartItem`, `capacityCartItem`, `creditPackageCartItem`).
pub enum CartItem {
    Did {
        did_group_id: DidGroupId,
        quantity: Quantity,
    },
    Capacity {
        zone_id: u64,
        quantity: Quantity,
    },
    CreditPackage {
        credit_package_id: u64,
        quantity: Quantity,
    },
}

impl CartItem {
    pub fn did(did_group_id: DidGroupId, quantity: Quantity) -> Self {
        Self::Did {
            did_group_id,
            quantity,
        }
    }
}

#[derive(Debug, Clone)]
/// Immutable input to [`allocate`](crate::VoxboneClient::allocate).
///
/// Construction validates the country code, so an invalid request can never
/// reach the network. Quantity defaults to 1 and the feature set defaults to
/// voice ([`FeatureId::VOICE`]).
pub struct AllocationRequest {
    country: CountryCode,
    quantity: Quantity,
    feature_ids: Vec<FeatureId>,
    area_code: Option<String>,
}

impl AllocationRequest {
    pub fn new(country: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            country: CountryCode::new(country)?,
            quantity: Quantity::ONE,
            feature_ids: vec![FeatureId::VOICE],
            area_code: None,
        })
    }

    /// Request more than one number.
    pub fn quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }

    /// Require a specific capability set. An empty set falls back to the
    /// voice default.
    pub fn feature_ids(mut self, feature_ids: Vec<FeatureId>) -> Self {
        if !feature_ids.is_empty() {
            self.feature_ids = feature_ids;
        }
        self
    }

    /// Restrict the search to one area code.
    pub fn area_code(mut self, area_code: impl Into<String>) -> Self {
        self.area_code = Some(area_code.into());
        self
    }

    pub fn country(&self) -> &CountryCode {
        &self.country
    }

    pub fn requested_quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn requested_feature_ids(&self) -> &[FeatureId] {
        &self.feature_ids
    }

    pub fn requested_area_code(&self) -> Option<&str> {
        self.area_code.as_deref()
    }

    /// The inventory search this request translates to.
    pub(crate) fn did_group_filter(&self) -> DidGroupFilter {
        let mut filter = DidGroupFilter::new(self.country.clone());
        filter.feature_ids = self.feature_ids.clone();
        filter.area_code = self.area_code.clone();
        filter
    }
}
