use super::{HttpMethod, VoxboneClient, VoxboneError};
use crate::domain::{
    AddToCartResponse, CartFilter, CartIdentifier, CartItem, CartResponse, CartsResponse,
    CheckoutResponse, CreateCartOptions,
};
use crate::transport;

impl VoxboneClient {
    /// Create an empty cart (`PUT ordering/cart`).
    ///
    /// The server owns the cart's lifetime; it is consumed by
    /// [`checkout_cart`](VoxboneClient::checkout_cart) and never deleted by
    /// this client. `response.cart` is `None` when the body lacked a
    /// well-formed cart object, with the raw payload preserved in
    /// `response.raw`.
    pub async fn create_cart(
        &self,
        options: &CreateCartOptions,
    ) -> Result<CartResponse, VoxboneError> {
        let body = transport::encode_create_cart_body(options);
        let response = self
            .request(HttpMethod::Put, transport::CART_PATH, Some(body))
            .await?;
        transport::decode_cart_response(&response).map_err(Self::parse_error)
    }

    /// Fetch one cart by identifier (`GET ordering/cart/{id}`).
    pub async fn get_cart(
        &self,
        cart_identifier: CartIdentifier,
    ) -> Result<CartResponse, VoxboneError> {
        let response = self
            .request(HttpMethod::Get, &transport::cart_path(cart_identifier), None)
            .await?;
        transport::decode_cart_response(&response).map_err(Self::parse_error)
    }

    /// List carts (`GET ordering/cart`).
    pub async fn list_carts(&self, filter: &CartFilter) -> Result<CartsResponse, VoxboneError> {
        let query = transport::cart_query(filter, self.default_pagination());
        let response = self
            .request(
                HttpMethod::Get,
                &format!("{}?{}", transport::CART_PATH, query),
                None,
            )
            .await?;
        transport::decode_carts_response(&response).map_err(Self::parse_error)
    }

    /// Add one product line to a cart
    /// (`POST ordering/cart/{id}/product`).
    ///
    /// Anything other than `status == "SUCCESS"` in the response is a
    /// business-level rejection, reported through the returned value.
    pub async fn add_to_cart(
        &self,
        cart_identifier: CartIdentifier,
        item: &CartItem,
    ) -> Result<AddToCartResponse, VoxboneError> {
        let body = transport::encode_cart_item_body(item);
        let response = self
            .request(
                HttpMethod::Post,
                &transport::cart_product_path(cart_identifier),
                Some(body),
            )
            .await?;
        transport::decode_add_to_cart_response(&response).map_err(Self::parse_error)
    }

    /// Convert a cart's contents into an order
    /// (`GET ordering/cart/{id}/checkout`).
    pub async fn checkout_cart(
        &self,
        cart_identifier: CartIdentifier,
    ) -> Result<CheckoutResponse, VoxboneError> {
        let response = self
            .request(
                HttpMethod::Get,
                &transport::cart_checkout_path(cart_identifier),
                None,
            )
            .await?;
        transport::decode_checkout_response(&response).map_err(Self::parse_error)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::client::testing::{FakeTransport, client_with};
    use crate::client::HttpMethod;
    use crate::domain::{
        CartFilter, CartIdentifier, CartItem, CreateCartOptions, DidGroupId, Quantity,
    };

    #[tokio::test]
    async fn create_cart_puts_options_body() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"cart": {"cartIdentifier": 98127}}"#);
        let client = client_with(transport.clone());

        let options = CreateCartOptions {
            customer_reference: Some("ref-1".to_owned()),
            description: Some("two voice DIDs".to_owned()),
        };
        let response = client.create_cart(&options).await.unwrap();
        assert_eq!(
            response.cart.unwrap().cart_identifier,
            CartIdentifier::new(98127)
        );

        let calls = transport.calls();
        assert_eq!(calls[0].method, HttpMethod::Put);
        assert_eq!(calls[0].url, "https://api.invalid/rest/ordering/cart");
        let body: Value = serde_json::from_str(calls[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"customerReference": "ref-1", "description": "two voice DIDs"})
        );
    }

    #[tokio::test]
    async fn add_to_cart_posts_tagged_item() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"status": "SUCCESS"}"#);
        let client = client_with(transport.clone());

        let item = CartItem::did(DidGroupId::new(1141), Quantity::new(2).unwrap());
        let response = client
            .add_to_cart(CartIdentifier::new(98127), &item)
            .await
            .unwrap();
        assert!(response.is_success());

        let calls = transport.calls();
        assert_eq!(calls[0].method, HttpMethod::Post);
        assert_eq!(
            calls[0].url,
            "https://api.invalid/rest/ordering/cart/98127/product"
        );
        let body: Value = serde_json::from_str(calls[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"didCartItem": {"didGroupId": 1141, "quantity": 2}})
        );
    }

    #[tokio::test]
    async fn checkout_cart_gets_checkout_path() {
        let transport = FakeTransport::new();
        transport.respond(
            200,
            r#"{"status": "SUCCESS", "productCheckoutList": [{"orderReference": "XYZ123"}]}"#,
        );
        let client = client_with(transport.clone());

        let response = client
            .checkout_cart(CartIdentifier::new(98127))
            .await
            .unwrap();
        assert_eq!(response.first_order_reference(), Some("XYZ123"));

        let calls = transport.calls();
        assert_eq!(calls[0].method, HttpMethod::Get);
        assert_eq!(
            calls[0].url,
            "https://api.invalid/rest/ordering/cart/98127/checkout"
        );
        assert_eq!(calls[0].body, None);
    }

    #[tokio::test]
    async fn list_carts_appends_filter_query() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"carts": [], "resultCount": 0}"#);
        let client = client_with(transport.clone());

        let filter = CartFilter {
            customer_reference: Some("ref-1".to_owned()),
            pagination: None,
        };
        client.list_carts(&filter).await.unwrap();

        assert_eq!(
            transport.calls()[0].url,
            "https://api.invalid/rest/ordering/cart?pageNumber=0&pageSize=20&customerReference=ref-1"
        );
    }
}
