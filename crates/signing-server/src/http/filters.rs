//! Filters, essentially how [`warp`] implements routes and middlewares.

use std::sync::Arc;

use warp::Filter;

use crate::{
    http::handlers,
    logic::{op_create_device, op_get_device, op_get_public_key, op_list_devices, op_sign, LogicOp},
};

/// Pass the [`Arc`] to the handler.
fn with_arc<T>(
    val: Arc<T>,
) -> impl Filter<Extract = (Arc<T>,), Error = std::convert::Infallible> + Clone
where
    Arc<T>: Send,
{
    warp::any().map(move || Arc::clone(&val))
}

/// Extract the JSON body from the request, rejecting the excessive inputs size.
fn json_body<T>() -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone
where
    T: Send + for<'de> serde::de::Deserialize<'de>,
{
    // When accepting a body, we want a JSON body
    // (and to reject huge payloads)...
    warp::body::content_length_limit(1024 * 16).and(warp::body::json::<T>())
}

/// The `{id}` path segment of the device routes.
///
/// `sign` names the sign action, so it is left for the sign route to claim.
fn device_id() -> impl Filter<Extract = (String,), Error = warp::Rejection> + Clone {
    warp::path::param::<String>().and_then(|id: String| async move {
        if id == "sign" {
            Err(warp::reject::not_found())
        } else {
            Ok(id)
        }
    })
}

/// The root mount point with all the routes.
pub fn root<L>(
    logic: Arc<L>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
where
    L: LogicOp<
            op_create_device::Request,
            Response = op_create_device::Response,
            Error = op_create_device::Error,
        > + LogicOp<
            op_list_devices::Request,
            Response = op_list_devices::Response,
            Error = op_list_devices::Error,
        > + LogicOp<
            op_get_device::Request,
            Response = op_get_device::Response,
            Error = op_get_device::Error,
        > + LogicOp<op_sign::Request, Response = op_sign::Response, Error = op_sign::Error>
        + LogicOp<
            op_get_public_key::Request,
            Response = op_get_public_key::Response,
            Error = op_get_public_key::Error,
        > + Send
        + Sync
        + 'static,
{
    health()
        .or(list_devices(Arc::clone(&logic)))
        .or(create_device(Arc::clone(&logic)))
        .or(sign(Arc::clone(&logic)))
        .or(get_device(Arc::clone(&logic)))
        .or(get_public_key(logic))
}

/// GET /api/v0/health.
fn health() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path!("api" / "v0" / "health")
        .and(warp::get())
        .and_then(handlers::health)
}

/// GET /api/v0/devices.
fn list_devices<L>(
    logic: Arc<L>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
where
    L: LogicOp<
            op_list_devices::Request,
            Response = op_list_devices::Response,
            Error = op_list_devices::Error,
        > + Send
        + Sync
        + 'static,
{
    warp::path!("api" / "v0" / "devices")
        .and(warp::get())
        .and(with_arc(logic))
        .and_then(handlers::list_devices)
}

/// POST /api/v0/devices with JSON body.
fn create_device<L>(
    logic: Arc<L>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
where
    L: LogicOp<
            op_create_device::Request,
            Response = op_create_device::Response,
            Error = op_create_device::Error,
        > + Send
        + Sync
        + 'static,
{
    warp::path!("api" / "v0" / "devices")
        .and(warp::post())
        .and(with_arc(logic))
        .and(json_body::<op_create_device::Request>())
        .and_then(handlers::create_device)
}

/// POST /api/v0/devices/sign with JSON body.
fn sign<L>(logic: Arc<L>) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
where
    L: LogicOp<op_sign::Request, Response = op_sign::Response, Error = op_sign::Error>
        + Send
        + Sync
        + 'static,
{
    warp::path!("api" / "v0" / "devices" / "sign")
        .and(warp::post())
        .and(with_arc(logic))
        .and(json_body::<op_sign::Request>())
        .and_then(handlers::sign)
}

/// GET /api/v0/devices/{id}.
fn get_device<L>(
    logic: Arc<L>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
where
    L: LogicOp<
            op_get_device::Request,
            Response = op_get_device::Response,
            Error = op_get_device::Error,
        > + Send
        + Sync
        + 'static,
{
    warp::path!("api" / "v0" / "devices" / ..)
        .and(device_id())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_arc(logic))
        .and_then(handlers::get_device)
}

/// GET /api/v0/devices/{id}/public-key.
fn get_public_key<L>(
    logic: Arc<L>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
where
    L: LogicOp<
            op_get_public_key::Request,
            Response = op_get_public_key::Response,
            Error = op_get_public_key::Error,
        > + Send
        + Sync
        + 'static,
{
    warp::path!("api" / "v0" / "devices" / ..)
        .and(device_id())
        .and(warp::path!("public-key"))
        .and(warp::get())
        .and(with_arc(logic))
        .and_then(handlers::get_public_key)
}
