//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders are accepted verbatim: the payload was already checked when the HTTP body was turned
//! into an [`OrderCreate`], so building the entity cannot fail and there is no `on_create` work.

use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(_id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Order::new(params.items, params.total_cost))
    }
}
