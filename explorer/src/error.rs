use {
    thiserror::Error,
    warp::{
        http::{header, HeaderValue, StatusCode},
        reply::Response,
        Reply,
    },
};

/// Every way a request can fail. Each variant maps to a status code and is
/// sent back to the caller as a plain-text body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExplorerError {
    #[error("Missing {0} parameter")]
    MissingParameter(&'static str),
    #[error("Invalid {0} parameter")]
    InvalidParameter(&'static str),
    /// The listing endpoints only accept the chain they are named after.
    #[error("Invalid or missing chain parameter")]
    ChainMismatch,
    #[error("Invalid category parameter")]
    InvalidCategory,
    #[error("Invalid page parameter")]
    InvalidPage,
    #[error("Invalid request body")]
    UnreadableBody,
    #[error("Invalid JSON format")]
    MalformedBody,
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Blob not found")]
    BlobNotFound,
    #[error("No validators found")]
    NoValidators,
    #[error("404 page not found")]
    RouteNotFound,
    #[error("Invalid request method")]
    MethodNotAllowed,
}

impl ExplorerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_)
            | Self::InvalidParameter(_)
            | Self::ChainMismatch
            | Self::InvalidCategory
            | Self::InvalidPage
            | Self::UnreadableBody
            | Self::MalformedBody => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::BlobNotFound | Self::NoValidators | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl Reply for ExplorerError {
    fn into_response(self) -> Response {
        let mut response =
            warp::reply::with_status(format!("{self}\n"), self.status()).into_response();

        response.headers_mut().insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );

        response
    }
}

impl warp::reject::Reject for ExplorerError {}
