/// Core error type for the update pipeline.
///
/// Port implementations should map their transport failures into
/// [`Error::Api`] so decode errors and downstream call failures stay
/// distinguishable to callers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field is missing or a value has the wrong shape while
    /// decoding `entity`.
    #[error("malformed {entity} payload: {detail}")]
    Payload {
        entity: &'static str,
        detail: String,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Opaque failure from the outward API port (network, auth, rate limit).
    /// The core performs no retries; this propagates unchanged.
    #[error("api error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, Error>;
