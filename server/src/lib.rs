use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use retrieval::{rank, AnswerGenerator, Corpus, Document, StubAnswerGenerator, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(default = "default_k")]
    pub k: usize,
}
fn default_k() -> usize {
    DEFAULT_TOP_K
}

#[derive(Serialize)]
pub struct Citation {
    pub doc_id: String,
    pub title: String,
    pub snippet: String,
    pub score: f64,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub answer: String,
    pub citations: Vec<Citation>,
    pub latency_ms: f64,
}

#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<Corpus>,
    pub generator: Arc<dyn AnswerGenerator>,
}

pub fn build_app(corpus: Corpus) -> Router {
    build_app_with_generator(corpus, Arc::new(StubAnswerGenerator))
}

pub fn build_app_with_generator(corpus: Corpus, generator: Arc<dyn AnswerGenerator>) -> Router {
    let state = AppState { corpus: Arc::new(corpus), generator };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/rag/query", post(rag_query_handler))
        .route("/doc/:doc_id", get(doc_handler))
        .with_state(state)
        .layer(cors)
}

pub async fn rag_query_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let start = std::time::Instant::now();
    let k = payload.k.max(1).min(100);

    let matches = rank(&payload.query, &state.corpus, k);
    let answer = state.generator.generate(&payload.query, &matches);
    let citations: Vec<Citation> = matches
        .iter()
        .map(|m| Citation {
            doc_id: m.doc.doc_id.clone(),
            title: m.doc.title.clone(),
            snippet: m.snippet.clone(),
            score: m.score,
        })
        .collect();

    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    tracing::debug!(query = %payload.query, hits = citations.len(), latency_ms, "rag query");
    Json(ChatResponse { answer, citations, latency_ms })
}

pub async fn doc_handler(
    State(state): State<AppState>,
    Path(doc_id): Path<String>,
) -> Result<Json<Document>, (StatusCode, Json<serde_json::Value>)> {
    match state.corpus.get(&doc_id) {
        Some(doc) => Ok(Json(doc.clone())),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "not found" })),
        )),
    }
}

/// In-binary demo corpus, used when no corpus file is given.
pub fn builtin_corpus() -> Corpus {
    let docs = vec![
        Document {
            doc_id: "handbook".into(),
            title: "Engineering Handbook".into(),
            text: "Our engineering handbook covers coding standards, code review rules, and incident response.".into(),
        },
        Document {
            doc_id: "onboarding".into(),
            title: "Onboarding Guide".into(),
            text: "New joiners should set up access, read the architecture overview, and deploy to staging before shipping code.".into(),
        },
        Document {
            doc_id: "rag-notes".into(),
            title: "RAG Design Notes".into(),
            text: "Retrieval augmented generation improves factuality by grounding answers in retrieved documents using embeddings and rerankers.".into(),
        },
    ];
    Corpus::new(docs).expect("builtin corpus ids are unique")
}
