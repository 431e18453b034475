//! Request correlation for handler log lines.
//!
//! `SetRequestIdLayer` stamps every request with `x-request-id` (or keeps
//! the caller's). `Correlation` hands that id to the application layer via
//! `CommandMetadata`.

use axum::http::HeaderName;

use crate::domain::foundation::{CommandMetadata, UserId};

/// Header carrying the request id.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// The request id of the current request, if any.
#[derive(Debug, Clone, Default)]
pub struct Correlation(pub Option<String>);

impl Correlation {
    /// Command metadata for `user_id` tagged with this request.
    pub fn metadata(self, user_id: UserId) -> CommandMetadata {
        let metadata = CommandMetadata::new(user_id).with_source("http");
        match self.0 {
            Some(id) => metadata.with_correlation_id(id),
            None => metadata,
        }
    }
}

impl<S> axum::extract::FromRequestParts<S> for Correlation
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let id = parts
                .headers
                .get(&REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            Ok(Correlation(id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    #[tokio::test]
    async fn reads_request_id_header() {
        let request: Request<()> = Request::builder()
            .header("x-request-id", "req-42")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let Correlation(id) = Correlation::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(id.as_deref(), Some("req-42"));
    }

    #[test]
    fn metadata_carries_request_id() {
        let user = UserId::new(1).unwrap();

        let tagged = Correlation(Some("req-42".to_string())).metadata(user);
        let untagged = Correlation(None).metadata(user);

        assert_eq!(tagged.correlation_id(), "req-42");
        assert_eq!(tagged.source(), Some("http"));
        assert_eq!(untagged.correlation_id(), "-");
    }
}
