//! # Form API server
//!
//! Backend of the Rigour Realty marketing site. It relays the contact and
//! quote forms to the office inbox as email.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   Browser    │────▶│   form-api   │────▶│  Email provider  │
//! │  (website)   │     │  port: 3001  │     │ SendGrid/SES/SMTP│
//! └──────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! ## Environment variables
//!
//! | Name | Required | Description |
//! |------|----------|-------------|
//! | `API_HOST` | No | bind address (default `0.0.0.0`) |
//! | `API_PORT` | No | port (default `3001`) |
//! | `NOTIFICATION_BACKEND` | No | `sendgrid` (default), `ses`, `smtp`, `noop` |
//! | `SENDGRID_API_KEY` | **Yes** (sendgrid) | SendGrid API key |
//! | `SENDGRID_API_URL` | No | SendGrid base URL |
//! | `SENDGRID_FROM_EMAIL` | **Yes** | verified sender address |
//! | `NOTIFICATION_EMAIL` | **Yes** | operator inbox |
//! | `SMTP_HOST` / `SMTP_PORT` | No | SMTP target (default `localhost:1025`) |
//! | `CORS_ORIGIN` | No | comma-separated allow-list (default: any origin) |
//! | `LOG_FORMAT` | No | `json` or `pretty` |
//!
//! ## Running
//!
//! ```bash
//! # development, Mailpit on localhost:1025
//! NOTIFICATION_BACKEND=smtp cargo run -p rigour-form-api
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use rigour_form_api::{
    app_builder::build_app,
    config::{FormApiConfig, NotificationBackend, NotificationConfig},
    handler::FormState,
    usecase::{NotificationDispatcher, SubmissionUseCase, TemplateRenderer},
};
use rigour_infra::notification::{
    NoopNotificationSender,
    NotificationSender,
    SendGridNotificationSender,
    SesNotificationSender,
    SmtpNotificationSender,
};
use rigour_shared::observability::TracingConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; production sets the variables directly
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("form-api");
    rigour_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "form-api").entered();

    let config = FormApiConfig::from_env().context("failed to load configuration")?;

    let missing = config.missing_required();
    if !missing.is_empty() {
        tracing::warn!("Missing required env vars: {}", missing.join(", "));
    }

    tracing::info!(
        backend = %config.notification.backend,
        "starting form-api on {}:{}",
        config.host,
        config.port
    );

    let sender = build_sender(&config.notification).await;
    let submissions = SubmissionUseCase::new(
        TemplateRenderer::new().context("failed to load notification templates")?,
        NotificationDispatcher::new(sender, config.notification.operator_address.clone()),
    );
    let state = Arc::new(FormState { submissions });

    let app = build_app(state, config.cors_origins.as_deref());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Email API running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the email backend once; every request shares it
async fn build_sender(config: &NotificationConfig) -> Arc<dyn NotificationSender> {
    let from = config.from_address.clone();

    match config.backend {
        NotificationBackend::SendGrid => Arc::new(SendGridNotificationSender::new(
            &config.sendgrid_api_url,
            config.sendgrid_api_key.clone(),
            from,
        )),
        NotificationBackend::Ses => {
            let aws_config = aws_config::load_from_env().await;
            let client = aws_sdk_sesv2::Client::new(&aws_config);
            Arc::new(SesNotificationSender::new(client, from))
        }
        NotificationBackend::Smtp => Arc::new(SmtpNotificationSender::new(
            &config.smtp_host,
            config.smtp_port,
            from,
        )),
        NotificationBackend::Noop => {
            tracing::warn!("NOTIFICATION_BACKEND=noop: submissions are logged, not emailed");
            Arc::new(NoopNotificationSender)
        }
    }
}
