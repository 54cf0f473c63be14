use crate::errors::{AppError, AppResult};
use crate::notify::{Notifier, Summary};
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::env;
use tracing::{debug, info};

pub const ENV_FROM: &str = "HOTELLOG_MAIL_FROM";
pub const ENV_TO: &str = "HOTELLOG_MAIL_TO";
pub const ENV_HOST: &str = "HOTELLOG_SMTP_HOST";
pub const ENV_PORT: &str = "HOTELLOG_SMTP_PORT";
pub const ENV_PASSWORD: &str = "HOTELLOG_SMTP_PASSWORD";

const SMTPS_PORT: u16 = 465;

/// Outbound mail settings; the sender address doubles as SMTP user name.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub from: String,
    pub to: String,
    pub host: String,
    pub port: u16,
    pub password: String,
}

impl std::fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

impl SmtpSettings {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Every value is required; blank counts as missing.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| -> AppResult<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::Config(format!("{key} is not set")))
        };

        let from = get(ENV_FROM)?;
        let to = get(ENV_TO)?;
        let host = get(ENV_HOST)?;
        let port_raw = get(ENV_PORT)?;
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| AppError::Config(format!("{ENV_PORT} is not a valid port: {port_raw}")))?;

        Ok(Self {
            from,
            to,
            host,
            port,
            password: get(ENV_PASSWORD)?,
        })
    }
}

/// Sends the summary through an SMTP relay. Settings are read from the
/// environment on every call.
#[derive(Debug, Default)]
pub struct SmtpNotifier;

impl SmtpNotifier {
    pub fn new() -> Self {
        Self
    }

    fn message(settings: &SmtpSettings, summary: &Summary) -> AppResult<Message> {
        let parse = |addr: &str| -> AppResult<Mailbox> {
            addr.parse()
                .map_err(|e| AppError::Config(format!("invalid mail address '{addr}': {e}")))
        };

        Message::builder()
            .from(parse(&settings.from)?)
            .to(parse(&settings.to)?)
            .subject(summary.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(summary.body())
            .map_err(|e| AppError::Notification(format!("cannot build message: {e}")))
    }

    /// Port 465 speaks TLS from the first byte; any other port must upgrade
    /// with STARTTLS before credentials are sent.
    fn transport(settings: &SmtpSettings) -> AppResult<SmtpTransport> {
        let builder = if settings.port == SMTPS_PORT {
            SmtpTransport::relay(&settings.host)
        } else {
            SmtpTransport::starttls_relay(&settings.host)
        }
        .map_err(|e| AppError::Config(format!("cannot set up TLS for {}: {e}", settings.host)))?;

        Ok(builder
            .port(settings.port)
            .credentials(Credentials::new(
                settings.from.clone(),
                settings.password.clone(),
            ))
            .build())
    }
}

impl Notifier for SmtpNotifier {
    fn notify(&self, summary: &Summary) -> AppResult<()> {
        let settings = SmtpSettings::from_env()?;
        let email = Self::message(&settings, summary)?;
        debug!(?settings, "sending submission summary");

        let mailer = Self::transport(&settings)?;

        mailer
            .send(&email)
            .map_err(|e| AppError::Notification(format!("send failed: {e}")))?;

        info!(to = %settings.to, rooms = summary.rooms.len(), "summary sent");
        Ok(())
    }
}
