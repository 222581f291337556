use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "newsdesk", about = "Financial news desk: dedup, enrich and rank market news")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Listen address (defaults to NEWSDESK_BIND or 0.0.0.0:8002)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Feed one article through dedup, extraction and storage
    Ingest {
        text: String,
        /// Also print the pipeline stages visited
        #[arg(long)]
        trace: bool,
    },
    /// Semantic search over stored articles
    Search { query: String },
    /// Classify a free-text query without fetching market data
    Resolve { query: String },
    /// Resolve a query and fetch its dashboard data
    Dashboard { query: String },
    /// Ranked news for a comma separated list of terms
    News { terms: String },
    /// Index summary
    Summary,
    /// Large-cap ticker tape
    Ticker,
    /// Financial analysis of a document or web page
    Analyze {
        #[arg(long, conflicts_with = "text")]
        url: Option<String>,
        #[arg(long)]
        text: Option<String>,
    },
}
