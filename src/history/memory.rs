use async_trait::async_trait;
use chrono::Utc;
use std::error::Error;
use std::sync::Mutex;

use crate::history::HistoryStore;
use crate::models::chat::{ ChatMessage, Role };

/// In-process history store. Useful for running without Redis and as the
/// test double behind the route layer.
#[derive(Default)]
pub struct MemoryHistoryStore {
    messages: Mutex<Vec<ChatMessage>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_messages(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages: Mutex::new(messages),
        }
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn append(
        &self,
        role: Role,
        content: &str
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut guard = self.messages
            .lock()
            .map_err(|_| "history store mutex poisoned".to_string())?;

        // The timestamp is the only ordering key on read, so keep it
        // strictly increasing even within one millisecond.
        let now = Utc::now().timestamp_millis();
        let timestamp = match guard.last() {
            Some(last) if last.timestamp >= now => last.timestamp + 1,
            _ => now,
        };

        guard.push(ChatMessage {
            role,
            content: content.to_string(),
            timestamp,
        });
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ChatMessage>, Box<dyn Error + Send + Sync>> {
        let guard = self.messages
            .lock()
            .map_err(|_| "history store mutex poisoned".to_string())?;

        let mut messages = guard.clone();
        messages.sort_by_key(|m| m.timestamp);
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn appends_in_order_with_increasing_timestamps() {
        let store = MemoryHistoryStore::new();
        store.append(Role::User, "first").await.unwrap();
        store.append(Role::Assistant, "second").await.unwrap();

        let messages = store.list_all().await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content, "first");
        assert_eq!(messages[1].role, Role::Assistant);
        assert!(messages[0].timestamp < messages[1].timestamp);
    }

    #[tokio::test]
    async fn reads_sort_by_timestamp_ascending() {
        let store = MemoryHistoryStore::with_messages(vec![
            ChatMessage { role: Role::Assistant, content: "b".into(), timestamp: 30 },
            ChatMessage { role: Role::User, content: "a".into(), timestamp: 10 },
            ChatMessage { role: Role::User, content: "c".into(), timestamp: 20 },
        ]);

        let messages = store.list_all().await.unwrap();
        let timestamps: Vec<i64> = messages.iter().map(|m| m.timestamp).collect();
        assert_eq!(timestamps, vec![10, 20, 30]);
    }

    #[tokio::test]
    async fn repeated_reads_are_identical() {
        let store = MemoryHistoryStore::new();
        store.append(Role::User, "question").await.unwrap();
        store.append(Role::Assistant, "answer").await.unwrap();

        let first = store.list_all().await.unwrap();
        let second = store.list_all().await.unwrap();
        let contents = |msgs: &[ChatMessage]| {
            msgs.iter().map(|m| (m.content.clone(), m.timestamp)).collect::<Vec<_>>()
        };
        assert_eq!(contents(&first), contents(&second));
    }
}
