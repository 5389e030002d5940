//! The signature service internal API.

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

use std::sync::Arc;

use device_store::Storer;
use warp::Filter;

mod http;
mod logic;

/// Initialize the [`warp::Filter`] implementing the HTTP transport for
/// the signature service.
pub fn init<St>(
    storer: St,
) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone
where
    St: Storer + 'static,
{
    let logic = logic::Logic { storer };
    let log = warp::log("signing_server::api");
    http::root(Arc::new(logic))
        .recover(http::rejection::handle)
        .with(log)
}
