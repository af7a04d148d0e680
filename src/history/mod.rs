mod memory;
mod redis;

pub use memory::MemoryHistoryStore;
pub use redis::RedisHistoryStore;

use async_trait::async_trait;
use log::info;
use std::error::Error;
use std::sync::Arc;
use crate::cli::Args;
use crate::models::chat::{ ChatMessage, Role };

/// Append-only transcript log. Timestamps are assigned by the store on
/// append; reads return the full log ordered by timestamp ascending.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn append(
        &self,
        role: Role,
        content: &str
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    async fn list_all(&self) -> Result<Vec<ChatMessage>, Box<dyn Error + Send + Sync>>;
}

pub fn create_history_store(
    args: &Args
) -> Result<Arc<dyn HistoryStore>, Box<dyn Error + Send + Sync>> {
    match args.history_type.to_lowercase().as_str() {
        "redis" => {
            let store = redis::RedisHistoryStore::new(args.clone())?;
            Ok(Arc::new(store))
        }
        "memory" => Ok(Arc::new(memory::MemoryHistoryStore::new())),
        _ =>
            Err(
                Box::new(
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("Unsupported history store type: {}", args.history_type)
                    )
                )
            ),
    }
}

pub fn initialize_history_store(
    args: &Args
) -> Result<Arc<dyn HistoryStore>, Box<dyn Error + Send + Sync>> {
    info!("Chat history will be stored in: {} at {}", args.history_type, args.history_host);
    create_history_store(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn rejects_unsupported_store_type() {
        let args = Args::parse_from(["study-agent", "--history-type", "cassandra"]);
        assert!(create_history_store(&args).is_err());
    }

    #[test]
    fn builds_memory_store() {
        let args = Args::parse_from(["study-agent", "--history-type", "memory"]);
        assert!(create_history_store(&args).is_ok());
    }
}
