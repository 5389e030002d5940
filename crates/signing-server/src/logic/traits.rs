//! The logic-related traits.

/// An operation of the logic.
#[async_trait::async_trait]
pub trait LogicOp<Request> {
    /// The response on success.
    type Response;
    /// The error on failure.
    type Error;

    /// Run the operation.
    async fn call(&self, req: Request) -> Result<Self::Response, Self::Error>;
}
