//! # Observability
//!
//! Tracing initialisation, log output format and per-request IDs.
//!
//! The output format is switched with the `LOG_FORMAT` environment variable
//! (`json` for production, `pretty` for local development). Request IDs are
//! carried in the `X-Request-Id` header and injected into the request span so
//! that every log line of one request can be correlated.

/// Header carrying the request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Log output format
///
/// Selected by `LOG_FORMAT`. Unset or unknown values fall back to
/// [`Pretty`](LogFormat::Pretty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON lines (production)
    Json,
    /// Human readable (development)
    #[default]
    Pretty,
}

impl LogFormat {
    /// Parses a log format name
    ///
    /// Unknown values fall back to [`Pretty`](LogFormat::Pretty) with a
    /// warning on stderr, since the subscriber is not installed yet.
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            other => {
                eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }

    /// Reads `LOG_FORMAT`
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT") {
            Ok(val) => Self::parse(&val),
            Err(_) => Self::default(),
        }
    }
}

/// Tracing initialisation settings
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Service name (emitted as `span.service` in JSON logs)
    pub service_name: String,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    /// Reads the output format from `LOG_FORMAT`
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::new(service_name, LogFormat::from_env())
    }
}

/// Installs the global tracing subscriber
///
/// The level is controlled by `RUST_LOG` and defaults to
/// `"info,rigour=debug"`.
///
/// In JSON mode `timestamp`, `level`, `target` and `message` are emitted at
/// the top level. The service name is attached by the caller through
/// `tracing::info_span!("app", service = "...")`.
#[cfg(feature = "observability")]
pub fn init_tracing(config: TracingConfig) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,rigour=debug".into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::debug!(service = %config.service_name, "tracing initialised");
}

/// Generates UUID v7 request IDs for `SetRequestIdLayer`
///
/// v7 embeds a timestamp, so IDs sort in arrival order in log search.
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let id = uuid::Uuid::now_v7().to_string();
        http::HeaderValue::from_str(&id)
            .ok()
            .map(tower_http::request_id::RequestId::new)
    }
}

/// Builds the per-request span for `TraceLayer::make_span_with`
///
/// Must run inside `SetRequestIdLayer` so that the header is already present.
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
