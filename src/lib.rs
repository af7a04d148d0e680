pub mod cli;
pub mod extract;
pub mod history;
pub mod llm;
pub mod models;
pub mod prompts;
pub mod server;

use cli::Args;
use llm::chat::new_client;
use llm::LlmConfig;
use log::info;
use server::{AppState, Server};
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Chat LLM Type: {}", args.chat_llm_type);
    info!("History Store Type: {}", args.history_type);
    info!("History Store Host: {}", args.history_host);
    info!("-------------------------");

    let chat_config = LlmConfig {
        llm_type: args.chat_llm_type
            .parse()
            .map_err(|e| format!("Invalid chat LLM type: {}", e))?,
        api_key: Some(args.chat_api_key.clone()).filter(|k| !k.is_empty()),
        model: args.chat_model.clone(),
        base_url: args.chat_base_url.clone(),
    };
    let chat = new_client(&chat_config)?;
    let history = history::initialize_history_store(&args)?;

    let addr = args.server_addr.clone();
    info!("Starting server on: {}", addr);
    let server = Server::new(addr, AppState { chat, history });
    server.run().await
}
