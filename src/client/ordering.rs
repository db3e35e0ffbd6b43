use super::{HttpMethod, VoxboneClient, VoxboneError};
use crate::domain::{
    BalanceResponse, CancelDidsResponse, DidId, OrderFilter, OrdersResponse, ValidationError,
};
use crate::transport;

impl VoxboneClient {
    /// List past orders (`GET ordering/order`).
    pub async fn list_orders(&self, filter: &OrderFilter) -> Result<OrdersResponse, VoxboneError> {
        let query = transport::order_query(filter, self.default_pagination());
        let body = self
            .request(
                HttpMethod::Get,
                &format!("{}?{}", transport::ORDER_PATH, query),
                None,
            )
            .await?;
        transport::decode_orders_response(&body).map_err(Self::parse_error)
    }

    /// Cancel provisioned DIDs (`POST ordering/cancel`).
    ///
    /// An empty id list fails with a [`ValidationError`] before anything is
    /// sent to the network.
    pub async fn cancel_dids(&self, did_ids: &[DidId]) -> Result<CancelDidsResponse, VoxboneError> {
        if did_ids.is_empty() {
            return Err(VoxboneError::Validation(ValidationError::Empty {
                field: DidId::FIELD,
            }));
        }
        let body = transport::encode_cancel_body(did_ids);
        let response = self
            .request(HttpMethod::Post, transport::CANCEL_PATH, Some(body))
            .await?;
        transport::decode_cancel_response(&response).map_err(Self::parse_error)
    }

    /// Fetch the account balance (`GET ordering/accountbalance`).
    pub async fn account_balance(&self) -> Result<BalanceResponse, VoxboneError> {
        let body = self
            .request(HttpMethod::Get, transport::ACCOUNT_BALANCE_PATH, None)
            .await?;
        transport::decode_balance_response(&body).map_err(Self::parse_error)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::client::testing::{FakeTransport, client_with};
    use crate::client::{HttpMethod, VoxboneError};
    use crate::domain::{DidId, OrderFilter, OrderReference, ValidationError};

    #[tokio::test]
    async fn cancel_dids_rejects_empty_list_without_network_calls() {
        let transport = FakeTransport::new();
        let client = client_with(transport.clone());

        let err = client.cancel_dids(&[]).await.unwrap_err();
        assert!(matches!(
            err,
            VoxboneError::Validation(ValidationError::Empty { field: "didIds" })
        ));
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn cancel_dids_posts_id_list() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"status": "SUCCESS"}"#);
        let client = client_with(transport.clone());

        let response = client
            .cancel_dids(&[DidId::new(9001), DidId::new(9002)])
            .await
            .unwrap();
        assert_eq!(response.status.as_deref(), Some("SUCCESS"));

        let calls = transport.calls();
        assert_eq!(calls[0].method, HttpMethod::Post);
        assert_eq!(calls[0].url, "https://api.invalid/rest/ordering/cancel");
        let body: Value = serde_json::from_str(calls[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"didIds": [9001, 9002]}));
    }

    #[tokio::test]
    async fn list_orders_appends_reference_filter() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"orders": [], "resultCount": 0}"#);
        let client = client_with(transport.clone());

        let filter = OrderFilter {
            reference: Some(OrderReference::new("XYZ123").unwrap()),
            ..OrderFilter::default()
        };
        client.list_orders(&filter).await.unwrap();

        assert_eq!(
            transport.calls()[0].url,
            "https://api.invalid/rest/ordering/order?pageNumber=0&pageSize=20&reference=XYZ123"
        );
    }

    #[tokio::test]
    async fn account_balance_parses_amount() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"accountBalance": {"balance": 42.5, "currency": "EUR"}}"#);
        let client = client_with(transport);

        let response = client.account_balance().await.unwrap();
        assert_eq!(response.account_balance.unwrap().balance, 42.5);
    }
}
