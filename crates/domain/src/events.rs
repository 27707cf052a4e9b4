//! Domain events queued by aggregates.
//!
//! Every event carries a unique identifier and a UTC creation timestamp.
//! `to_json` is the canonical serialization contract for any event log or
//! message bus a downstream consumer might persist events to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::values::{PostId, UserId, Username};

/// Envelope around a single domain event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DomainEventKind,
}

/// Event-specific payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum DomainEventKind {
    UserRegistered { user_id: UserId, username: String },
    ProfileRegistered { user_id: UserId },
    PostRegistered { user_id: UserId, post_id: PostId },
}

impl DomainEvent {
    fn new(kind: DomainEventKind) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
        }
    }

    pub fn user_registered(user_id: UserId, username: &Username) -> Self {
        Self::new(DomainEventKind::UserRegistered {
            user_id,
            username: username.as_str().to_string(),
        })
    }

    pub fn profile_registered(user_id: UserId) -> Self {
        Self::new(DomainEventKind::ProfileRegistered { user_id })
    }

    pub fn post_registered(user_id: UserId, post_id: PostId) -> Self {
        Self::new(DomainEventKind::PostRegistered { user_id, post_id })
    }

    /// Name of the event type, as serialized in the canonical form.
    pub fn event_type(&self) -> &'static str {
        match self.kind {
            DomainEventKind::UserRegistered { .. } => "UserRegistered",
            DomainEventKind::ProfileRegistered { .. } => "ProfileRegistered",
            DomainEventKind::PostRegistered { .. } => "PostRegistered",
        }
    }

    /// Event-specific fields, identifiers rendered as strings.
    pub fn payload(&self) -> Value {
        match &self.kind {
            DomainEventKind::UserRegistered { user_id, username } => json!({
                "user_id": user_id.to_string(),
                "username": username,
            }),
            DomainEventKind::ProfileRegistered { user_id } => json!({
                "user_id": user_id.to_string(),
            }),
            DomainEventKind::PostRegistered { user_id, post_id } => json!({
                "user_id": user_id.to_string(),
                "post_id": post_id.to_string(),
            }),
        }
    }

    /// Canonical serialization: event id, type name, RFC 3339 timestamp, and
    /// the event payload under `data`.
    pub fn to_json(&self) -> Value {
        json!({
            "event_id": self.event_id.to_string(),
            "event_type": self.event_type(),
            "occurred_at": self.occurred_at.to_rfc3339(),
            "data": self.payload(),
        })
    }
}
