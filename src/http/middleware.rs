//! Accept header normalization middleware.
//!
//! # Responsibilities
//! - Rewrite the incoming `Accept` header to canonical form before the
//!   request reaches the inner service
//! - When preferred types are configured, filter the header down to them
//!
//! # Design Decisions
//! - Runs as a tower Layer so it composes with axum routers and any other
//!   tower stack
//! - Each service clone owns its own Negotiator buffer, so concurrent
//!   connections never share parse state
//! - Rewriting is synchronous; the inner future is returned untouched

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::header::ACCEPT;
use axum::http::{HeaderValue, Request};
use tower::{Layer, Service};

use crate::config::schema::AcceptNormConfig;
use crate::negotiate::Negotiator;

/// Layer that installs [`NormalizeAccept`] around a service.
#[derive(Debug, Clone, Default)]
pub struct NormalizeAcceptLayer {
    config: Arc<AcceptNormConfig>,
}

impl NormalizeAcceptLayer {
    /// Canonicalize-only layer with default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: AcceptNormConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Filter incoming headers down to `preferred` (preference order).
    pub fn with_preferred_types<I, T>(preferred: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::from_config(AcceptNormConfig {
            preferred_types: preferred.into_iter().map(Into::into).collect(),
            ..Default::default()
        })
    }
}

impl<S> Layer<S> for NormalizeAcceptLayer {
    type Service = NormalizeAccept<S>;

    fn layer(&self, inner: S) -> Self::Service {
        NormalizeAccept {
            inner,
            negotiator: Negotiator::from_config(&self.config),
            preferred: self.config.preferred_types.join(","),
        }
    }
}

/// Service wrapper that rewrites the `Accept` header in place.
#[derive(Debug, Clone)]
pub struct NormalizeAccept<S> {
    inner: S,
    negotiator: Negotiator,
    preferred: String,
}

impl<S, B> Service<Request<B>> for NormalizeAccept<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let header = req
            .headers()
            .get(ACCEPT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let normalized = if self.preferred.is_empty() {
            self.negotiator.canonicalize(&header)
        } else {
            self.negotiator.filter(&header, &self.preferred)
        };

        if normalized != header {
            tracing::debug!(original = %header, normalized = %normalized, "rewrote accept header");
        }

        if normalized.is_empty() {
            req.headers_mut().remove(ACCEPT);
        } else if let Ok(value) = HeaderValue::from_str(&normalized) {
            req.headers_mut().insert(ACCEPT, value);
        }

        self.inner.call(req)
    }
}
