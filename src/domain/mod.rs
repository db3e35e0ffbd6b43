//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    AllocationRequest, CartFilter, CartItem, CountryFilter, CreateCartOptions, DidFilter,
    DidGroupFilter, OrderFilter, Pagination,
};
pub use response::{
    AccountBalance, AddToCartResponse, AllocationOutcome, BalanceResponse, CancelDidsResponse,
    Cart, CartResponse, CartsResponse, CheckoutResponse, CountriesResponse, Country, Did,
    DidGroup, DidGroupsResponse, DidsResponse, Feature, Order, OrdersResponse, ProductCheckout,
};
pub use validation::ValidationError;
pub use value::{
    CartIdentifier, CountryCode, DidGroupId, DidId, FeatureId, OrderReference, Password, Quantity,
    Username,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_rejects_empty() {
        assert!(matches!(
            CountryCode::new("   "),
            Err(ValidationError::Empty {
                field: CountryCode::FIELD
            })
        ));
    }

    #[test]
    fn country_code_requires_three_letters() {
        assert!(matches!(
            CountryCode::new("US"),
            Err(ValidationError::InvalidCountryCode { .. })
        ));
        assert!(matches!(
            CountryCode::new("U5A"),
            Err(ValidationError::InvalidCountryCode { .. })
        ));
    }

    #[test]
    fn country_code_trims_and_uppercases() {
        let code = CountryCode::new(" usa ").unwrap();
        assert_eq!(code.as_str(), "USA");
    }

    #[test]
    fn password_rejects_empty() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty { field: "password" })
        ));
    }

    #[test]
    fn quantity_must_be_positive() {
        assert!(matches!(Quantity::new(0), Err(ValidationError::ZeroQuantity)));
        assert_eq!(Quantity::new(3).unwrap().value(), 3);
    }

    #[test]
    fn order_reference_rejects_blank() {
        assert!(OrderReference::new("  ").is_err());
        assert_eq!(OrderReference::new(" ABC/1 ").unwrap().as_str(), "ABC/1");
    }

    #[test]
    fn allocation_request_applies_defaults() {
        let request = AllocationRequest::new("usa").unwrap();
        assert_eq!(request.country().as_str(), "USA");
        assert_eq!(request.requested_quantity(), Quantity::ONE);
        assert_eq!(request.requested_feature_ids(), &[FeatureId::VOICE]);
        assert_eq!(request.requested_area_code(), None);
    }

    #[test]
    fn allocation_request_keeps_voice_default_for_empty_feature_set() {
        let request = AllocationRequest::new("USA").unwrap().feature_ids(Vec::new());
        assert_eq!(request.requested_feature_ids(), &[FeatureId::VOICE]);

        let request = AllocationRequest::new("USA")
            .unwrap()
            .feature_ids(vec![FeatureId::new(6), FeatureId::new(50)]);
        assert_eq!(
            request.requested_feature_ids(),
            &[FeatureId::new(6), FeatureId::new(50)]
        );
    }

    #[test]
    fn allocation_request_rejects_missing_country_before_any_network_use() {
        assert!(matches!(
            AllocationRequest::new(""),
            Err(ValidationError::Empty {
                field: CountryCode::FIELD
            })
        ));
    }

    #[test]
    fn did_group_eligibility_requires_availability_and_stock() {
        let mut group = DidGroup {
            did_group_id: DidGroupId::new(7),
            country_code_a3: Some("USA".to_owned()),
            state_id: None,
            did_type: None,
            city_name: None,
            area_code: None,
            stock: 5,
            available: true,
            setup_100: None,
            monthly_100: None,
            features: Vec::new(),
        };
        let two = Quantity::new(2).unwrap();
        assert!(group.can_fill(two));

        group.stock = 1;
        assert!(!group.can_fill(two));

        group.stock = 10;
        group.available = false;
        assert!(!group.can_fill(two));
    }

    #[test]
    fn checkout_response_ignores_blank_order_references() {
        let response = CheckoutResponse {
            status: Some("SUCCESS".to_owned()),
            product_checkout_list: Some(vec![ProductCheckout {
                product_type: Some("DID".to_owned()),
                order_reference: Some("  ".to_owned()),
                status: None,
            }]),
            raw: serde_json::Value::Null,
        };
        assert_eq!(response.first_order_reference(), None);
    }

    #[test]
    fn allocation_outcome_failure_messages() {
        assert_eq!(
            AllocationOutcome::NoGroupFound.failure_message(),
            Some("No DID Group found.")
        );
        assert_eq!(
            AllocationOutcome::NoGroupAvailable.failure_message(),
            Some("No DID group available.")
        );
        assert_eq!(
            AllocationOutcome::Unconfirmed(serde_json::Value::Null).failure_message(),
            None
        );
    }
}
