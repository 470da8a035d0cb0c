// Row-level change feed: Postgres NOTIFY -> broadcast hub -> gRPC streams.

pub mod listener;

pub use listener::spawn_listener;

use std::collections::HashSet;

use serde::Deserialize;
use tokio::sync::broadcast;

use crate::proto::realtime::{ChangeAction as ChangeActionProto, ChangeEvent as ChangeEventProto};

/// NOTIFY channel written by the `notify_pharmacy_change` trigger.
pub const CHANNEL: &str = "pharmacy_changes";

/// Table name carried by resync events that apply to every table.
pub const ALL_TABLES: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    Insert,
    Update,
    Delete,
    Resync,
}

impl From<ChangeAction> for ChangeActionProto {
    fn from(action: ChangeAction) -> Self {
        match action {
            ChangeAction::Insert => ChangeActionProto::Insert,
            ChangeAction::Update => ChangeActionProto::Update,
            ChangeAction::Delete => ChangeActionProto::Delete,
            ChangeAction::Resync => ChangeActionProto::Resync,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChangeEvent {
    pub table: String,
    pub action: ChangeAction,
    #[serde(rename = "id", default)]
    pub record_id: Option<String>,
    #[serde(rename = "at", default)]
    pub occurred_at: Option<String>,
}

impl ChangeEvent {
    /// Parses a trigger payload such as
    /// `{"table":"items","action":"UPDATE","id":"…","at":"2024-01-01T00:00:00Z"}`.
    pub fn parse(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    pub fn resync(table: &str) -> Self {
        Self {
            table: table.to_string(),
            action: ChangeAction::Resync,
            record_id: None,
            occurred_at: Some(chrono::Utc::now().to_rfc3339()),
        }
    }

    /// An empty filter matches everything, as does a resync for all tables.
    pub fn matches(&self, tables: &HashSet<String>) -> bool {
        tables.is_empty() || self.table == ALL_TABLES || tables.contains(&self.table)
    }

    pub fn to_proto(&self) -> ChangeEventProto {
        ChangeEventProto {
            table: self.table.clone(),
            action: ChangeActionProto::from(self.action).into(),
            record_id: self.record_id.clone().unwrap_or_default(),
            occurred_at: self.occurred_at.clone().unwrap_or_default(),
        }
    }
}

/// Fan-out point for change events. Cloning shares the same channel.
#[derive(Clone, Debug)]
pub struct ChangeHub {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeHub {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Returns the number of subscribers that will see the event.
    pub fn publish(&self, event: ChangeEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeHub {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trigger_payload() {
        let event = ChangeEvent::parse(
            r#"{"table":"items","action":"DELETE","id":"6f1c0a3e-0000-0000-0000-000000000001","at":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(event.table, "items");
        assert_eq!(event.action, ChangeAction::Delete);
        assert_eq!(
            event.record_id.as_deref(),
            Some("6f1c0a3e-0000-0000-0000-000000000001")
        );
        assert_eq!(event.to_proto().action, ChangeActionProto::Delete as i32);
    }

    #[test]
    fn test_parse_rejects_unknown_action() {
        assert!(ChangeEvent::parse(r#"{"table":"items","action":"TRUNCATE"}"#).is_err());
    }

    #[test]
    fn test_matches_filter() {
        let event = ChangeEvent::parse(r#"{"table":"units","action":"INSERT"}"#).unwrap();
        let empty = HashSet::new();
        let units: HashSet<String> = ["units".to_string()].into_iter().collect();
        let items: HashSet<String> = ["items".to_string()].into_iter().collect();

        assert!(event.matches(&empty));
        assert!(event.matches(&units));
        assert!(!event.matches(&items));
        assert!(ChangeEvent::resync(ALL_TABLES).matches(&items));
    }

    #[tokio::test]
    async fn test_hub_fans_out() {
        let hub = ChangeHub::new(8);
        assert_eq!(hub.publish(ChangeEvent::resync("items")), 0);

        let mut a = hub.subscribe();
        let mut b = hub.subscribe();
        assert_eq!(hub.publish(ChangeEvent::resync("items")), 2);
        assert_eq!(a.recv().await.unwrap().table, "items");
        assert_eq!(b.recv().await.unwrap().action, ChangeAction::Resync);
    }
}
