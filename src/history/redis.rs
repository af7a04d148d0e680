use async_trait::async_trait;
use crate::models::chat::{ ChatMessage, Role };
use crate::history::HistoryStore;
use crate::cli::Args;
use std::error::Error;
use chrono::Utc;
use log::error;
use redis::{ Client, AsyncCommands };
use serde::{ Serialize, Deserialize };
use uuid::Uuid;

// The uuid keeps sorted-set members unique; two identical turns written in
// the same millisecond must not collapse into one record.
#[derive(Serialize, Deserialize)]
struct StoredMessage {
    id: Uuid,
    role: Role,
    content: String,
    timestamp: i64,
}

pub struct RedisHistoryStore {
    client: Client,
    key: String,
}

impl RedisHistoryStore {
    pub fn new(args: Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(Self {
            client: Client::open(args.history_host.as_str())?,
            key: args.history_redis_key,
        })
    }

    async fn get_connection(&self) -> Result<redis::aio::MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }
}

#[async_trait]
impl HistoryStore for RedisHistoryStore {
    async fn append(
        &self,
        role: Role,
        content: &str
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut conn = self.get_connection().await?;

        let message = StoredMessage {
            id: Uuid::new_v4(),
            role,
            content: content.to_string(),
            timestamp: Utc::now().timestamp_millis(),
        };

        let json_msg = serde_json::to_string(&message)?;
        let _: i64 = conn.zadd(&self.key, &json_msg, message.timestamp).await?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ChatMessage>, Box<dyn Error + Send + Sync>> {
        let mut conn = self.get_connection().await?;
        let json_entries: Vec<String> = conn.zrange(&self.key, 0, -1).await?;
        let mut messages = Vec::with_capacity(json_entries.len());

        for json_entry in &json_entries {
            match serde_json::from_str::<StoredMessage>(json_entry) {
                Ok(msg) => {
                    messages.push(ChatMessage {
                        role: msg.role,
                        content: msg.content,
                        timestamp: msg.timestamp,
                    });
                }
                Err(e) => {
                    error!("Error parsing history entry: {}", e);
                }
            }
        }

        Ok(messages)
    }
}
