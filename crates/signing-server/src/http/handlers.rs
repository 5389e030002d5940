//! Handlers, the HTTP transport coupling for the internal logic.

use std::sync::Arc;

use serde::Serialize;
use warp::hyper::StatusCode;
use warp::Reply;

use super::error;
use crate::logic::{
    op_create_device, op_get_device, op_get_public_key, op_list_devices, op_sign, LogicOp,
};

/// The envelope of every successful response body.
#[derive(Debug, Serialize)]
pub(super) struct DataResponse<T> {
    /// The operation response.
    pub data: T,
}

/// Wrap the operation result into the reply with the given success status.
fn respond<T, E>(res: Result<T, E>, status_code: StatusCode) -> Result<warp::reply::Response, warp::Rejection>
where
    T: Serialize,
    E: Into<error::Logic>,
{
    match res {
        Ok(data) => {
            let json = warp::reply::json(&DataResponse { data });
            Ok(warp::reply::with_status(json, status_code).into_response())
        }
        Err(err) => Err(warp::reject::custom(err.into())),
    }
}

/// Health check, not touching the logic.
pub async fn health() -> Result<impl warp::Reply, warp::Rejection> {
    /// The health report.
    #[derive(Serialize)]
    struct Health {
        /// Always `pass` while the server is serving.
        status: &'static str,
        /// The API version.
        version: &'static str,
    }

    let json = warp::reply::json(&DataResponse {
        data: Health {
            status: "pass",
            version: "v0",
        },
    });
    Ok(warp::reply::with_status(json, StatusCode::OK))
}

/// Create device operation HTTP transport coupling.
pub async fn create_device<L>(
    logic: Arc<L>,
    input: op_create_device::Request,
) -> Result<impl warp::Reply, warp::Rejection>
where
    L: LogicOp<
        op_create_device::Request,
        Response = op_create_device::Response,
        Error = op_create_device::Error,
    >,
{
    respond(logic.call(input).await, StatusCode::CREATED)
}

/// List devices operation HTTP transport coupling.
pub async fn list_devices<L>(logic: Arc<L>) -> Result<impl warp::Reply, warp::Rejection>
where
    L: LogicOp<
        op_list_devices::Request,
        Response = op_list_devices::Response,
        Error = op_list_devices::Error,
    >,
{
    respond(logic.call(op_list_devices::Request).await, StatusCode::OK)
}

/// Get device operation HTTP transport coupling.
pub async fn get_device<L>(id: String, logic: Arc<L>) -> Result<impl warp::Reply, warp::Rejection>
where
    L: LogicOp<
        op_get_device::Request,
        Response = op_get_device::Response,
        Error = op_get_device::Error,
    >,
{
    respond(
        logic.call(op_get_device::Request { id }).await,
        StatusCode::OK,
    )
}

/// Sign operation HTTP transport coupling.
pub async fn sign<L>(
    logic: Arc<L>,
    input: op_sign::Request,
) -> Result<impl warp::Reply, warp::Rejection>
where
    L: LogicOp<op_sign::Request, Response = op_sign::Response, Error = op_sign::Error>,
{
    respond(logic.call(input).await, StatusCode::OK)
}

/// Get device public key operation HTTP transport coupling.
pub async fn get_public_key<L>(
    id: String,
    logic: Arc<L>,
) -> Result<impl warp::Reply, warp::Rejection>
where
    L: LogicOp<
        op_get_public_key::Request,
        Response = op_get_public_key::Response,
        Error = op_get_public_key::Error,
    >,
{
    respond(
        logic.call(op_get_public_key::Request { id }).await,
        StatusCode::OK,
    )
}
