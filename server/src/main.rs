use anyhow::Result;
use axum::Router;
use clap::Parser;
use retrieval::Corpus;
use server::{build_app, builtin_corpus};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Path to a JSON corpus file (array of {doc_id, title, text}); uses the
    /// built-in demo corpus when omitted
    #[arg(long)]
    corpus: Option<String>,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let corpus = match &args.corpus {
        Some(path) => Corpus::from_json_file(path)?,
        None => builtin_corpus(),
    };
    tracing::info!(docs = corpus.len(), "corpus ready");
    let app: Router = build_app(corpus);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
