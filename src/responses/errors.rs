use crate::errors::ServerError;
use crate::responses::html::html_with_status;
use crate::templates::pages::error_page;
use astra::{Body, Response};
use http::StatusCode;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        // Driver messages can carry hostnames; keep them in the log only.
        ServerError::DbError(_) => "The listing database is unavailable right now.".to_string(),
        other => other.to_string(),
    };

    html_with_status(status, error_page(status, &message)).unwrap_or_else(|_| plain_500())
}

/// Last resort when the HTML response cannot be built.
fn plain_500() -> Response {
    let mut resp = Response::new(Body::from("Internal Server Error"));
    *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    resp
}
