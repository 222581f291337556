use clap::Parser;
use newsdesk::application::rank_news::split_terms;
use newsdesk::cli::commands::{Cli, Commands};
use newsdesk::config::Config;
use newsdesk::NewsDesk;
use serde::Serialize;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let desk = match NewsDesk::new(&config) {
        Ok(desk) => Arc::new(desk),
        Err(e) => {
            eprintln!("Error initializing news desk: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(desk.clone(), &config, cli.command).await;
    if let Err(e) = desk.close() {
        tracing::warn!(error = %e, "store did not close cleanly");
    }
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_command(
    desk: Arc<NewsDesk>,
    config: &Config,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| config.bind.clone());
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, model = desk.model_name(), "news desk listening");
            axum::serve(listener, newsdesk::api::router(desk))
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Commands::Ingest { text, trace } => {
            if trace {
                let run = desk.ingest_traced(&text).await?;
                print_json(&serde_json::json!({
                    "outcome": run.outcome,
                    "entities": run.article.entities,
                    "stages": run.stages,
                }))?;
            } else {
                print_json(&desk.ingest(&text).await?)?;
            }
        }
        Commands::Search { query } => print_json(&desk.search(&query).await?)?,
        Commands::Resolve { query } => print_json(&desk.resolve(&query).await?)?,
        Commands::Dashboard { query } => print_json(&desk.resolve_and_fetch(&query).await?)?,
        Commands::News { terms } => print_json(&desk.fetch_news(&split_terms(&terms)).await?)?,
        Commands::Summary => print_json(&desk.market_summary().await)?,
        Commands::Ticker => print_json(&desk.market_ticker().await)?,
        Commands::Analyze { url, text } => {
            let analysis = match (url, text) {
                (Some(url), _) => desk.analyze_url(&url).await?,
                (None, Some(text)) => desk.analyze_text(&text).await,
                (None, None) => return Err("either --url or --text is required".into()),
            };
            print_json(&analysis)?;
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
