use tracing::{debug, warn};

use super::{VoxboneClient, VoxboneError};
use crate::domain::{
    AllocationOutcome, AllocationRequest, CartItem, CreateCartOptions, DidFilter, OrderReference,
};

impl VoxboneClient {
    /// Run the end-to-end number-allocation workflow: search the inventory,
    /// pick the first group that can fill the request, stage it in a fresh
    /// cart, check the cart out, and list the DIDs delivered under the
    /// resulting order.
    ///
    /// Each network round trip is awaited before the next begins; nothing is
    /// retried. Business-level dead ends come back as [`AllocationOutcome`]
    /// variants, while transport, HTTP, and parse failures short-circuit the
    /// remaining steps as [`VoxboneError`]s. A cart created before a later
    /// step fails is left behind on the server; the API offers no way to
    /// delete it and checkout is the only thing that consumes it.
    pub async fn allocate(
        &self,
        request: &AllocationRequest,
    ) -> Result<AllocationOutcome, VoxboneError> {
        let quantity = request.requested_quantity();
        debug!(
            country = %request.country(),
            quantity = quantity.value(),
            "searching did group inventory"
        );
        let search = self.list_did_groups(&request.did_group_filter()).await?;
        let Some(groups) = search.did_groups else {
            warn!(country = %request.country(), "inventory response carried no did group collection");
            return Ok(AllocationOutcome::NoGroupFound);
        };

        // First eligible group in vendor order wins; no re-sorting.
        let Some(group) = groups.iter().find(|group| group.can_fill(quantity)) else {
            warn!(
                country = %request.country(),
                candidates = groups.len(),
                "no did group available with sufficient stock"
            );
            return Ok(AllocationOutcome::NoGroupAvailable);
        };
        debug!(
            did_group_id = %group.did_group_id,
            stock = group.stock,
            "selected did group"
        );

        let created = self.create_cart(&CreateCartOptions::default()).await?;
        let Some(cart_identifier) = created.cart.as_ref().map(|cart| cart.cart_identifier) else {
            warn!("cart creation did not return a well-formed cart");
            return Ok(AllocationOutcome::CartRejected(created.raw));
        };
        debug!(%cart_identifier, "created cart");

        let item = CartItem::did(group.did_group_id, quantity);
        let added = self.add_to_cart(cart_identifier, &item).await?;
        if !added.is_success() {
            warn!(%cart_identifier, status = ?added.status, "cart add was rejected");
            return Ok(AllocationOutcome::ItemRejected(added.raw));
        }

        let checkout = self.checkout_cart(cart_identifier).await?;
        let reference = checkout.first_order_reference().map(str::to_owned);
        let Some(reference) = reference else {
            warn!(%cart_identifier, "checkout completed without a usable product list");
            return Ok(AllocationOutcome::Unconfirmed(checkout.raw));
        };
        let order_reference = OrderReference::new(reference)?;
        debug!(%order_reference, "checkout confirmed, listing delivered dids");

        let dids = self
            .list_dids(&DidFilter::for_order(order_reference.clone()))
            .await?;
        Ok(AllocationOutcome::Allocated {
            order_reference,
            dids,
        })
    }
}
