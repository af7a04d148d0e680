use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
    extract::State,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use log::{info, error};

use crate::extract::extract_json_object;
use crate::history::HistoryStore;
use crate::llm::chat::ChatClient;
use crate::models::chat::Role;
use crate::prompts;

const ASK_MAX_TOKENS: u32 = 800;
const SUMMARY_MAX_TOKENS: u32 = 500;
const GENERATION_MAX_TOKENS: u32 = 1000;

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<dyn ChatClient>,
    pub history: Arc<dyn HistoryStore>,
}

#[derive(Deserialize)]
struct AskRequest {
    question: Option<String>,
}

#[derive(Deserialize)]
struct TextRequest {
    text: Option<String>,
}

#[derive(Deserialize)]
struct PlanRequest {
    #[serde(rename = "semester-start")]
    semester_start: Option<String>,
    #[serde(rename = "exam-dates")]
    exam_dates: Option<String>,
}

#[derive(Deserialize)]
struct CodeRequest {
    code: Option<String>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ask", post(ask_handler))
        .route("/flashcards", post(flashcards_handler))
        .route("/quiz", post(quiz_handler))
        .route("/summarize", post(summarize_handler))
        .route("/plan", post(plan_handler))
        .route("/explain-code", post(explain_code_handler))
        .route("/history", get(history_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_http_server(
    addr: &str,
    state: AppState,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    info!("Starting HTTP API server on: http://{}", addr);

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind HTTP server to {}: {}", addr, e))?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

// Errors always travel in the body; the status code is 200 either way.
fn error_body(message: impl Into<String>) -> Json<Value> {
    Json(json!({ "error": message.into() }))
}

async fn ask_handler(
    State(state): State<AppState>,
    Json(body): Json<AskRequest>,
) -> Json<Value> {
    let question = match non_empty(body.question) {
        Some(q) => q,
        None => return error_body("No question provided."),
    };

    if let Err(e) = state.history.append(Role::User, &question).await {
        error!("Failed to record user turn: {}", e);
        return error_body(format!("An error occurred: {}", e));
    }

    let answer = match
        state.chat.complete(&question, Some(prompts::ASK_SYSTEM_PROMPT), ASK_MAX_TOKENS).await
    {
        Ok(text) => text,
        Err(e) => {
            error!("Chat completion failed: {}", e);
            return error_body(format!("An error occurred: {}", e));
        }
    };

    if let Err(e) = state.history.append(Role::Assistant, &answer).await {
        error!("Failed to record assistant turn: {}", e);
        return error_body(format!("An error occurred: {}", e));
    }

    Json(json!({ "answer": answer }))
}

async fn flashcards_handler(
    State(state): State<AppState>,
    Json(body): Json<TextRequest>,
) -> Json<Value> {
    let text = match non_empty(body.text) {
        Some(t) => t,
        None => return error_body("No text provided."),
    };

    let prompt = prompts::flashcards(&text);
    match state.chat.complete(&prompt, None, GENERATION_MAX_TOKENS).await {
        Ok(raw) =>
            match extract_json_object(&raw) {
                Ok(flashcards) => Json(flashcards),
                Err(e) => {
                    error!("Flashcard extraction failed: {}", e);
                    error_body(e.to_string())
                }
            }
        Err(e) => {
            error!("Chat completion failed: {}", e);
            error_body(e.to_string())
        }
    }
}

async fn quiz_handler(
    State(state): State<AppState>,
    Json(body): Json<TextRequest>,
) -> Json<Value> {
    let text = match non_empty(body.text) {
        Some(t) => t,
        None => return error_body("No text provided."),
    };

    let prompt = prompts::quiz(&text);
    match state.chat.complete(&prompt, None, GENERATION_MAX_TOKENS).await {
        Ok(raw) =>
            match extract_json_object(&raw) {
                Ok(quiz) => Json(quiz),
                Err(e) => {
                    error!("Quiz extraction failed: {}", e);
                    error_body(e.to_string())
                }
            }
        Err(e) => {
            error!("Chat completion failed: {}", e);
            error_body(e.to_string())
        }
    }
}

async fn summarize_handler(
    State(state): State<AppState>,
    Json(body): Json<TextRequest>,
) -> Json<Value> {
    let text = match non_empty(body.text) {
        Some(t) => t,
        None => return error_body("No text provided."),
    };

    let prompt = prompts::summarize(&text);
    match state.chat.complete(&prompt, None, SUMMARY_MAX_TOKENS).await {
        Ok(summary) => Json(json!({ "summary": summary })),
        Err(e) => {
            error!("Chat completion failed: {}", e);
            error_body(e.to_string())
        }
    }
}

async fn plan_handler(
    State(state): State<AppState>,
    Json(body): Json<PlanRequest>,
) -> Json<Value> {
    let (semester_start, exam_dates) = match (
        non_empty(body.semester_start),
        non_empty(body.exam_dates),
    ) {
        (Some(start), Some(dates)) => (start, dates),
        _ => return error_body("Missing start date or exam dates."),
    };

    let prompt = prompts::plan(&semester_start, &exam_dates);
    match state.chat.complete(&prompt, None, GENERATION_MAX_TOKENS).await {
        Ok(plan) => Json(json!({ "plan": plan })),
        Err(e) => {
            error!("Chat completion failed: {}", e);
            error_body(e.to_string())
        }
    }
}

async fn explain_code_handler(
    State(state): State<AppState>,
    Json(body): Json<CodeRequest>,
) -> Json<Value> {
    let code = match non_empty(body.code) {
        Some(c) => c,
        None => return error_body("No code provided."),
    };

    let prompt = prompts::explain_code(&code);
    match state.chat.complete(&prompt, None, GENERATION_MAX_TOKENS).await {
        Ok(explanation) => Json(json!({ "explanation": explanation })),
        Err(e) => {
            error!("Chat completion failed: {}", e);
            error_body(e.to_string())
        }
    }
}

async fn history_handler(State(state): State<AppState>) -> Json<Value> {
    match state.history.list_all().await {
        Ok(messages) => Json(json!(messages)),
        Err(e) => {
            error!("Failed to read history: {}", e);
            error_body(e.to_string())
        }
    }
}
