/// Text polarity in [-1.0, 1.0].
pub trait SentimentScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}
