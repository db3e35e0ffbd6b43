use super::{HttpMethod, VoxboneClient, VoxboneError};
use crate::domain::{
    CountriesResponse, CountryFilter, DidFilter, DidGroupFilter, DidGroupsResponse, DidsResponse,
};
use crate::transport;

impl VoxboneClient {
    /// Search the DID group inventory (`GET inventory/didgroup`).
    ///
    /// The filter's country code is required and validated at construction;
    /// groups come back in vendor order, which the allocation workflow treats
    /// as authoritative.
    pub async fn list_did_groups(
        &self,
        filter: &DidGroupFilter,
    ) -> Result<DidGroupsResponse, VoxboneError> {
        let query = transport::did_group_query(filter, self.default_pagination());
        let body = self
            .request(
                HttpMethod::Get,
                &format!("{}?{}", transport::DID_GROUP_PATH, query),
                None,
            )
            .await?;
        transport::decode_did_groups_response(&body).map_err(Self::parse_error)
    }

    /// List provisioned DIDs (`GET inventory/did`).
    pub async fn list_dids(&self, filter: &DidFilter) -> Result<DidsResponse, VoxboneError> {
        let query = transport::did_query(filter, self.default_pagination());
        let body = self
            .request(
                HttpMethod::Get,
                &format!("{}?{}", transport::DID_PATH, query),
                None,
            )
            .await?;
        transport::decode_dids_response(&body).map_err(Self::parse_error)
    }

    /// List countries with available inventory (`GET inventory/country`).
    pub async fn list_countries(
        &self,
        filter: &CountryFilter,
    ) -> Result<CountriesResponse, VoxboneError> {
        let query = transport::country_query(filter, self.default_pagination());
        let body = self
            .request(
                HttpMethod::Get,
                &format!("{}?{}", transport::COUNTRY_PATH, query),
                None,
            )
            .await?;
        transport::decode_countries_response(&body).map_err(Self::parse_error)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::{FakeTransport, client_with};
    use crate::client::{HttpMethod, VoxboneError};
    use crate::domain::{CountryCode, DidFilter, DidGroupFilter, OrderReference, Pagination};

    #[tokio::test]
    async fn list_did_groups_builds_filtered_query() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"didGroups": [], "resultCount": 0}"#);
        let client = client_with(transport.clone());

        let mut filter = DidGroupFilter::new(CountryCode::new("USA").unwrap());
        filter.area_code = Some("212".to_owned());
        filter.pagination = Some(Pagination::new(2, 5));
        let response = client.list_did_groups(&filter).await.unwrap();
        assert_eq!(response.did_groups, Some(Vec::new()));

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, HttpMethod::Get);
        assert_eq!(
            calls[0].url,
            "https://api.invalid/rest/inventory/didgroup?pageNumber=2&pageSize=5&countryCodeA3=USA&areaCode=212"
        );
    }

    #[tokio::test]
    async fn list_dids_filters_by_order_reference() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"dids": [], "resultCount": 0}"#);
        let client = client_with(transport.clone());

        let filter = DidFilter::for_order(OrderReference::new("XYZ123").unwrap());
        client.list_dids(&filter).await.unwrap();

        let calls = transport.calls();
        assert_eq!(
            calls[0].url,
            "https://api.invalid/rest/inventory/did?pageNumber=0&pageSize=20&orderReference=XYZ123"
        );
    }

    #[tokio::test]
    async fn list_dids_maps_invalid_json_to_parse_error() {
        let transport = FakeTransport::new();
        transport.respond(200, "{ not json }");
        let client = client_with(transport);

        let err = client.list_dids(&DidFilter::default()).await.unwrap_err();
        assert!(matches!(err, VoxboneError::Parse(_)));
    }

    #[tokio::test]
    async fn list_countries_hits_country_path() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"countries": [], "resultCount": 0}"#);
        let client = client_with(transport.clone());

        client
            .list_countries(&crate::domain::CountryFilter::default())
            .await
            .unwrap();

        assert_eq!(
            transport.calls()[0].url,
            "https://api.invalid/rest/inventory/country?pageNumber=0&pageSize=20"
        );
    }
}
