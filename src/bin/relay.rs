//! Kravi mail relay - the contact form's server side, in one file.
//!
//! Accepts the homepage form's POST, validates it, maps the inquiry type
//! to a subject line, and hands the composed mail to SMTP. Every reply
//! the relay generates itself is `{ "success": bool, "message": string }`
//! JSON; only posting to `/send` is routed, so other methods get 405.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use lettre::message::Mailbox;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Where submissions are delivered
const MAIL_TO: &str = "info@kravianalytics.com";
/// Envelope sender; replies go to the visitor instead
const MAIL_FROM: &str = "webmaster@kravianalytics.com";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

// ── Request / Response types ─────────────────────────────────────────

/// The form-encoded POST body. Everything is optional at the wire level
/// so missing fields produce our 400, not an extractor rejection.
#[derive(Debug, Clone, Deserialize)]
struct ContactSubmission {
    #[serde(rename = "inquiry-type")]
    inquiry_type: Option<String>,
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RelayReply {
    success: bool,
    message: String,
}

impl RelayReply {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// A composed, ready-to-deliver mail
#[derive(Debug, Clone, PartialEq, Eq)]
struct OutgoingMail {
    reply_to: String,
    subject: String,
    body: String,
}

// ── Delivery ─────────────────────────────────────────────────────────

/// Trait for mail delivery, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
trait Mailer: Send + Sync {
    async fn deliver(&self, mail: OutgoingMail) -> Result<()>;
}

struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build a transport against `RELAY_SMTP_HOST` (default localhost:25)
    fn from_env() -> Self {
        let host = std::env::var("RELAY_SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host).build();
        Self { transport }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn deliver(&self, mail: OutgoingMail) -> Result<()> {
        let message = Message::builder()
            .from(MAIL_FROM.parse::<Mailbox>()?)
            .reply_to(mail.reply_to.parse::<Mailbox>()?)
            .to(MAIL_TO.parse::<Mailbox>()?)
            .subject(mail.subject)
            .body(mail.body)?;
        self.transport.send(message).await?;
        Ok(())
    }
}

// ── Composition ──────────────────────────────────────────────────────

/// Map an inquiry type to its subject line; an explicit subject is appended
fn subject_for(inquiry_type: &str, subject: Option<&str>) -> String {
    let base = match inquiry_type {
        "collaboration" => "Collaboration Inquiry",
        "demo" => "Demo Request",
        "thesis" => "Thesis Opportunity Inquiry",
        "career" => "Career Inquiry",
        "other" => "General Inquiry",
        _ => "Website Contact Form",
    };
    match subject {
        Some(s) if !s.is_empty() => format!("{base} - {s}"),
        _ => base.to_string(),
    }
}

/// "thesis-opportunity" -> "Thesis opportunity"
fn humanize(inquiry_type: &str) -> String {
    let spaced = inquiry_type.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

fn compose_body(
    name: &str,
    email: &str,
    inquiry_type: &str,
    subject: Option<&str>,
    message: &str,
) -> String {
    let mut body = String::new();
    body.push_str(
        "You have received a new message from the Kravi Analytics website contact form.\n\n",
    );
    body.push_str("=== Contact Details ===\n");
    body.push_str(&format!("Name: {name}\n"));
    body.push_str(&format!("Email: {email}\n"));
    body.push_str(&format!("Inquiry Type: {}\n", humanize(inquiry_type)));
    if let Some(subject) = subject {
        body.push_str(&format!("Subject: {subject}\n"));
    }
    body.push_str(&format!(
        "Submitted: {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));
    body.push_str("=== Message ===\n");
    body.push_str(&format!("{message}\n\n"));
    body.push_str("=== End of Message ===\n");
    body.push_str("This message was sent from the contact form on kravianalytics.com");
    body
}

// ── HTTP surface ─────────────────────────────────────────────────────

type SharedMailer = Arc<dyn Mailer>;

fn router(mailer: SharedMailer) -> Router {
    Router::new()
        .route("/send", post(send_email))
        .with_state(mailer)
}

async fn send_email(
    State(mailer): State<SharedMailer>,
    Form(submission): Form<ContactSubmission>,
) -> (StatusCode, Json<RelayReply>) {
    let inquiry_type = submission.inquiry_type.as_deref().unwrap_or("").trim();
    let name = submission.name.as_deref().unwrap_or("").trim();
    let email = submission.email.as_deref().unwrap_or("").trim();
    let message = submission.message.as_deref().unwrap_or("").trim();
    let subject = submission
        .subject
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    for (field, value) in [
        ("inquiry-type", inquiry_type),
        ("name", name),
        ("email", email),
        ("message", message),
    ] {
        if value.is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                Json(RelayReply::fail(format!("Missing required field: {field}"))),
            );
        }
    }

    if !EMAIL_RE.is_match(email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(RelayReply::fail("Invalid email address")),
        );
    }

    let mail = OutgoingMail {
        reply_to: email.to_string(),
        subject: subject_for(inquiry_type, subject),
        body: compose_body(name, email, inquiry_type, subject, message),
    };

    match mailer.deliver(mail).await {
        Ok(()) => (
            StatusCode::OK,
            Json(RelayReply::ok(
                "Thank you for your message! We'll get back to you soon.",
            )),
        ),
        Err(err) => {
            tracing::error!(error = %err, "mail delivery failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RelayReply::fail(
                    "Sorry, there was an error sending your message. Please try again later.",
                )),
            )
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kravi_relay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mailer: SharedMailer = Arc::new(SmtpMailer::from_env());
    let app = router(mailer);

    let addr = std::env::var("RELAY_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "mail relay listening");
    axum::serve(listener, app).await?;
    Ok(())
}
