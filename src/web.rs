use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Form, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tera::Tera;

use crate::mail_reader::imap::ImapConnector;
use crate::mail_reader::{InboxConnector, Mailbox};
use crate::settings::ServerConfig;
use crate::verification::extractor::ExtractedBooking;
use crate::verification::{BookingVerifier, Outcome};
use anyhow::Error;
use log::{error, info, warn};
type AppError = Error;

pub struct AppState {
    pub verifier: BookingVerifier<ImapConnector>,
    pub tera: Tera,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    pub user_email: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Default, Serialize)]
struct IndexView<'a> {
    user_email: Option<&'a str>,
    platform: Option<&'a str>,
    platforms: Vec<&'a str>,
    your_email: &'a str,
    verification_result: Option<String>,
    passed: bool,
    discrepancies: Vec<String>,
    validated_data: Option<ExtractedBooking>,
}

impl<'a> IndexView<'a> {
    fn new(state: &'a AppState) -> Self {
        IndexView {
            platforms: state.verifier.supported_platforms(),
            your_email: state.verifier.connector().inbox_address(),
            ..Default::default()
        }
    }

    fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.verification_result = Some(outcome.message());
        self.passed = outcome.passed();
        if let Outcome::Verified { discrepancies, booking, .. } = outcome {
            self.discrepancies = discrepancies;
            self.validated_data = booking;
        }
        self
    }
}

fn error_redirect(message: &str) -> Redirect {
    Redirect::to(&format!("/error?message={}", urlencoding::encode(message)))
}

fn render_index(tera: &Tera, view: &IndexView) -> Result<Html<String>, AppError> {
    let ctx = tera::Context::from_serialize(view)?;
    let html = tera.render("index.html", &ctx)?;
    Ok(Html(html))
}

fn respond(tera: &Tera, view: &IndexView) -> Response {
    match render_index(tera, view) {
        Ok(html) => html.into_response(),
        Err(e) => {
            error!("Error rendering page: {:#}", e);
            error_redirect(&format!("Error rendering page: {}", e)).into_response()
        }
    }
}

async fn index(Extension(state): Extension<Arc<AppState>>) -> Response {
    respond(&state.tera, &IndexView::new(&state))
}

async fn confirm(
    Extension(state): Extension<Arc<AppState>>,
    Form(form): Form<ConfirmForm>,
) -> Response {
    let user_email = form.user_email.as_deref().map(str::trim).unwrap_or_default();
    let platform = form.platform.as_deref().map(str::trim).unwrap_or_default();

    let mut view = IndexView::new(&state);
    view.platform = Some(platform).filter(|p| !p.is_empty());

    if user_email.is_empty() {
        warn!("User email not provided.");
        view.verification_result = Some("User email not provided.".to_string());
        return respond(&state.tera, &view);
    }
    view.user_email = Some(user_email);

    info!("Verification requested for {} on {}", user_email, platform);
    let outcome = state.verifier.verify(user_email, platform).await;
    respond(&state.tera, &view.with_outcome(outcome))
}

async fn test_email_connection(Extension(state): Extension<Arc<AppState>>) -> Response {
    let result = match state.verifier.connector().connect().await {
        Ok(mut session) => session.logout().await,
        Err(e) => Err(e),
    };
    match result {
        Ok(()) => (StatusCode::OK, "Email connection successful!".to_string()).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Email connection failed: {:#}", e),
        )
            .into_response(),
    }
}

async fn error_page(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let error_message = params
        .get("message")
        .cloned()
        .unwrap_or_else(|| "Unknown error".to_string());
    let mut ctx = tera::Context::new();
    ctx.insert("error_message", &error_message);
    match state.tera.render("error.html", &ctx) {
        Ok(html) => Html(html),
        Err(e) => Html(format!("Error rendering error page: {}", e)),
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/confirm", post(confirm))
        .route("/test-email-connection", get(test_email_connection))
        .route("/error", get(error_page))
        .layer(Extension(state))
}

pub async fn start_web_server(server: &ServerConfig, state: AppState) -> Result<(), AppError> {
    let router = create_router(Arc::new(state));
    let addr = format!("{}:{}", server.host, server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}
