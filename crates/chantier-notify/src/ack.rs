use serde::Serialize;

/// Title of every fan-out acknowledgment.
pub const ACK_TITLE: &str = "Notification envoyée";

/// A short notice shown to the user who triggered a fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub title: String,
    pub description: String,
}

impl Acknowledgement {
    #[must_use]
    pub fn sent(description: impl Into<String>) -> Self {
        Self {
            title: ACK_TITLE.to_string(),
            description: description.into(),
        }
    }
}

/// Presentation boundary for fan-out acknowledgments (a toast in a UI, a
/// status line in a terminal).
pub trait Acknowledger: Send + Sync {
    fn acknowledge(&self, ack: &Acknowledgement);
}

/// Reports acknowledgments through `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAcknowledger;

impl Acknowledger for TracingAcknowledger {
    fn acknowledge(&self, ack: &Acknowledgement) {
        tracing::info!(title = %ack.title, "{}", ack.description);
    }
}
