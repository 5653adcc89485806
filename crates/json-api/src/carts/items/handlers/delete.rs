//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{get::CartResponse, into_status_error},
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
///
/// Removing a product that is not in the cart leaves the cart unchanged.
#[endpoint(tags("carts"), summary = "Remove Cart Item")]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .remove_item(cart.into_inner().into(), product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
