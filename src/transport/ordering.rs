use serde::Deserialize;
use serde_json::json;

use super::TransportError;
use super::query::QueryBuilder;
use crate::domain::{
    AccountBalance, BalanceResponse, CancelDidsResponse, DidId, Order, OrderFilter,
    OrderReference, OrdersResponse, Pagination,
};

pub(crate) const ORDER_PATH: &str = "ordering/order";
pub(crate) const CANCEL_PATH: &str = "ordering/cancel";
pub(crate) const ACCOUNT_BALANCE_PATH: &str = "ordering/accountbalance";

pub(crate) fn order_query(filter: &OrderFilter, defaults: Pagination) -> String {
    let mut query = QueryBuilder::new(filter.pagination, defaults);
    query.scalar_str(
        "reference",
        filter.reference.as_ref().map(OrderReference::as_str),
    );
    query.scalar_str("status", filter.status.as_deref());
    query.finish()
}

pub(crate) fn encode_cancel_body(did_ids: &[DidId]) -> String {
    let ids: Vec<u64> = did_ids.iter().map(|id| id.value()).collect();
    json!({ DidId::FIELD: ids }).to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrdersJsonResponse {
    #[serde(default)]
    orders: Vec<OrderJson>,
    #[serde(default)]
    result_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderJson {
    #[serde(default)]
    reference: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    date_created: Option<String>,
}

pub(crate) fn decode_orders_response(body: &str) -> Result<OrdersResponse, TransportError> {
    let parsed: OrdersJsonResponse = serde_json::from_str(body)?;
    Ok(OrdersResponse {
        orders: parsed
            .orders
            .into_iter()
            .map(|order| Order {
                reference: order.reference,
                status: order.status,
                date_created: order.date_created,
            })
            .collect(),
        result_count: parsed.result_count,
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalanceJsonResponse {
    #[serde(default)]
    account_balance: Option<AccountBalanceJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountBalanceJson {
    balance: f64,
    #[serde(default)]
    currency: Option<String>,
}

pub(crate) fn decode_balance_response(body: &str) -> Result<BalanceResponse, TransportError> {
    let parsed: BalanceJsonResponse = serde_json::from_str(body)?;
    Ok(BalanceResponse {
        account_balance: parsed.account_balance.map(|balance| AccountBalance {
            balance: balance.balance,
            currency: balance.currency,
        }),
    })
}

#[derive(Debug, Clone, Deserialize)]
struct CancelJsonResponse {
    #[serde(default)]
    status: Option<String>,
}

pub(crate) fn decode_cancel_response(body: &str) -> Result<CancelDidsResponse, TransportError> {
    let parsed: CancelJsonResponse = serde_json::from_str(body)?;
    Ok(CancelDidsResponse {
        status: parsed.status,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn order_query_emits_present_filters_only() {
        let filter = OrderFilter {
            reference: Some(OrderReference::new("XYZ123").unwrap()),
            status: None,
            pagination: None,
        };
        assert_eq!(
            order_query(&filter, Pagination::DEFAULT),
            "pageNumber=0&pageSize=20&reference=XYZ123"
        );
    }

    #[test]
    fn cancel_body_lists_every_did_id() {
        let body = encode_cancel_body(&[DidId::new(9001), DidId::new(9002)]);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value, serde_json::json!({"didIds": [9001, 9002]}));
    }

    #[test]
    fn decode_orders_maps_listing() {
        let json = r#"
        {
          "orders": [{"reference": "XYZ123", "status": "COMPLETED"}],
          "resultCount": 1
        }
        "#;
        let response = decode_orders_response(json).unwrap();
        assert_eq!(response.orders[0].reference.as_deref(), Some("XYZ123"));
        assert_eq!(response.orders[0].status.as_deref(), Some("COMPLETED"));
    }

    #[test]
    fn decode_balance_maps_amount_and_currency() {
        let json = r#"{"accountBalance": {"balance": 125.5, "currency": "EUR"}}"#;
        let response = decode_balance_response(json).unwrap();
        let balance = response.account_balance.unwrap();
        assert_eq!(balance.balance, 125.5);
        assert_eq!(balance.currency.as_deref(), Some("EUR"));

        let response = decode_balance_response("{}").unwrap();
        assert_eq!(response.account_balance, None);
    }

    #[test]
    fn decode_cancel_reports_status() {
        let response = decode_cancel_response(r#"{"status": "SUCCESS"}"#).unwrap();
        assert_eq!(response.status.as_deref(), Some("SUCCESS"));
    }
}
