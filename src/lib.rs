pub mod api;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::analyze_document::{DocumentAnalysis, DocumentAnalyst};
use crate::application::extract_entities::EntityExtractor;
use crate::application::fallback::FallbackPolicies;
use crate::application::ingest::{IngestOutcome, IngestRun, IngestUseCase};
use crate::application::market_data::{MarketDataService, MarketSummary, TickerEntry};
use crate::application::rank_news::NewsRanker;
use crate::application::resolve_and_fetch::{Dashboard, DashboardComposer};
use crate::application::resolve_query::QueryResolver;
use crate::application::search::{SearchHit, SearchUseCase};
use crate::application::similarity_gate::SimilarityGate;
use crate::application::store_article::ArticleWriter;
use crate::config::{Config, EmbeddingBackend};
use crate::domain::entities::market_quote::MarketQuote;
use crate::domain::entities::news_item::NewsItem;
use crate::domain::error::DomainError;
use crate::domain::ports::article_store::ArticleStore;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::language_model::LanguageModel;
use crate::domain::ports::news_source::NewsSource;
use crate::domain::ports::page_fetcher::PageFetcher;
use crate::domain::ports::quote_source::QuoteSource;
use crate::domain::ports::sentiment_scorer::SentimentScorer;
use crate::domain::ports::symbol_search::SymbolSearch;
use crate::domain::values::market_catalog::MARKET_SUFFIX;
use crate::domain::values::resolved_query::ResolvedQuery;
use crate::infrastructure::embeddings::hashing::HashingProvider;
use crate::infrastructure::embeddings::ollama::OllamaEmbeddings;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::feeds::newsapi::NewsApiSource;
use crate::infrastructure::feeds::yahoo::YahooQuoteSource;
use crate::infrastructure::feeds::yahoo_search::YahooSymbolSearch;
use crate::infrastructure::llm::ollama::OllamaModel;
use crate::infrastructure::sentiment::lexicon::LexiconSentiment;
use crate::infrastructure::sqlite::article_store::SqliteArticleStore;
use crate::infrastructure::web::page_text::WebPageFetcher;
use std::sync::Arc;

/// External collaborators other than the article store.
pub struct Providers {
    pub embedder: Arc<dyn EmbeddingProvider>,
    pub model: Arc<dyn LanguageModel>,
    pub news: Arc<dyn NewsSource>,
    pub quotes: Arc<dyn QuoteSource>,
    pub pages: Arc<dyn PageFetcher>,
    pub symbol_search: Option<Arc<dyn SymbolSearch>>,
    pub sentiment: Option<Arc<dyn SentimentScorer>>,
}

impl Providers {
    /// Concrete adapters selected by configuration.
    pub fn from_config(config: &Config) -> Self {
        let embedder: Arc<dyn EmbeddingProvider> = match config.embedding_backend {
            EmbeddingBackend::OpenAi => Arc::new(OpenAiProvider::new(
                config.embedding_api_key.clone(),
                config.embedding_model.clone(),
            )),
            EmbeddingBackend::Ollama => Arc::new(OllamaEmbeddings::new(
                config.ollama_url.clone(),
                config.embedding_model.clone(),
            )),
            EmbeddingBackend::Hashing => Arc::new(HashingProvider::default()),
        };

        Self {
            embedder,
            model: Arc::new(OllamaModel::new(config.ollama_url.clone(), config.llm_model.clone())),
            news: Arc::new(NewsApiSource::new(
                config.news_api_key.clone(),
                config.news_language.clone(),
            )),
            quotes: Arc::new(YahooQuoteSource::new()),
            pages: Arc::new(WebPageFetcher),
            symbol_search: Some(Arc::new(YahooSymbolSearch::new(
                config.symbol_search_timeout,
                MARKET_SUFFIX,
            ))),
            sentiment: Some(Arc::new(LexiconSentiment::new())),
        }
    }
}

pub struct NewsDesk {
    store: Arc<dyn ArticleStore>,
    model_name: String,
    ingest_uc: IngestUseCase,
    search_uc: SearchUseCase,
    resolver: Arc<QueryResolver>,
    ranker: NewsRanker,
    market: Arc<MarketDataService>,
    dashboard: DashboardComposer,
    analyst: DocumentAnalyst,
}

impl NewsDesk {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        tracing::info!(db = %config.db_path, backend = ?config.embedding_backend, "opening news desk");
        Self::with_providers(
            &config.db_path,
            Providers::from_config(config),
            FallbackPolicies::from_config(config),
        )
    }

    pub fn with_providers(
        db_path: &str,
        providers: Providers,
        policies: FallbackPolicies,
    ) -> Result<Self, DomainError> {
        let store: Arc<dyn ArticleStore> =
            Arc::new(SqliteArticleStore::open(db_path, providers.embedder.clone())?);
        Ok(Self::with_store(store, providers, policies))
    }

    /// Wire every use case around an already opened store.
    pub fn with_store(
        store: Arc<dyn ArticleStore>,
        providers: Providers,
        policies: FallbackPolicies,
    ) -> Self {
        let ingest_uc = IngestUseCase::new(
            SimilarityGate::new(store.clone()),
            EntityExtractor::new(providers.model.clone(), policies.model_output),
            ArticleWriter::new(store.clone()),
        );
        let resolver = Arc::new(QueryResolver::new(
            providers.symbol_search,
            policies.symbol_search,
        ));
        let market = Arc::new(MarketDataService::new(providers.quotes, policies.market_data));

        Self {
            model_name: providers.model.name().to_string(),
            search_uc: SearchUseCase::new(store.clone()),
            ranker: NewsRanker::new(providers.news, providers.sentiment, policies.news),
            dashboard: DashboardComposer::new(resolver.clone(), market.clone()),
            analyst: DocumentAnalyst::new(providers.model, providers.pages),
            store,
            ingest_uc,
            resolver,
            market,
        }
    }

    /// Name of the language model serving extraction and analysis.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub async fn ingest(&self, text: &str) -> Result<IngestOutcome, DomainError> {
        self.ingest_uc.execute(text).await
    }

    /// Ingest and also return the article and the pipeline stages visited.
    pub async fn ingest_traced(&self, text: &str) -> Result<IngestRun, DomainError> {
        self.ingest_uc.run(text).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, DomainError> {
        let query = non_empty(query, "query")?;
        self.search_uc.search(query).await
    }

    pub async fn resolve(&self, query: &str) -> Result<ResolvedQuery, DomainError> {
        let query = non_empty(query, "query")?;
        Ok(self.resolver.resolve(query).await)
    }

    pub async fn resolve_and_fetch(&self, query: &str) -> Result<Dashboard, DomainError> {
        let query = non_empty(query, "query")?;
        Ok(self.dashboard.compose(query).await)
    }

    pub async fn fetch_news(&self, terms: &[String]) -> Result<Vec<NewsItem>, DomainError> {
        if terms.is_empty() {
            return Err(DomainError::InvalidInput("at least one search term is required".into()));
        }
        Ok(self.ranker.rank_terms(terms).await)
    }

    pub async fn quote(&self, symbol: &str) -> Option<MarketQuote> {
        self.market.quote(symbol).await
    }

    pub async fn market_summary(&self) -> MarketSummary {
        self.market.market_summary().await
    }

    pub async fn market_ticker(&self) -> Vec<TickerEntry> {
        self.market.market_ticker().await
    }

    pub async fn analyze_text(&self, text: &str) -> DocumentAnalysis {
        self.analyst.analyze_text(text).await
    }

    pub async fn analyze_url(&self, url: &str) -> Result<DocumentAnalysis, DomainError> {
        let url = non_empty(url, "url")?;
        Ok(self.analyst.analyze_url(url).await)
    }

    /// Release the store. Call once at shutdown.
    pub fn close(&self) -> Result<(), DomainError> {
        tracing::info!("closing article store");
        self.store.close()
    }
}

fn non_empty<'a>(value: &'a str, field: &str) -> Result<&'a str, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}
