mod common;

use common::*;
use newsdesk::application::ingest::IngestOutcome;
use newsdesk::domain::error::DomainError;

const ARTICLE: &str = "Zomato reported a sharp rise in quarterly food delivery orders across Indian metros.";

#[tokio::test]
async fn test_first_ingest_is_processed() {
    let desk = setup();
    let outcome = desk.ingest(ARTICLE).await.unwrap();
    let IngestOutcome::Processed { entities } = outcome else {
        panic!("expected processed, got {outcome:?}");
    };
    assert_eq!(entities.companies, vec!["Zomato"]);
    assert_eq!(entities.sectors, vec!["Consumer Tech"]);
}

#[tokio::test]
async fn test_exact_reingest_is_ignored() {
    let model = ScriptedModel::replying(ENTITIES_REPLY);
    let desk = desk(Providers {
        model: model.clone(),
        ..providers()
    });

    desk.ingest(ARTICLE).await.unwrap();
    let second = desk.ingest(ARTICLE).await.unwrap();

    assert_eq!(
        second,
        IngestOutcome::Ignored {
            reason: "Duplicate".into()
        }
    );
    assert_eq!(model.calls(), 1, "duplicate must not reach the model");
}

#[tokio::test]
async fn test_stage_trail() {
    let desk = setup();
    let first = desk.ingest_traced(ARTICLE).await.unwrap();
    assert_eq!(
        first.stages,
        vec!["deduplication-check", "entity-extraction", "storage", "done-stored"]
    );
    let entities = first.article.entities.unwrap();
    assert_eq!(entities.companies, vec!["Zomato"]);

    let second = desk.ingest_traced(ARTICLE).await.unwrap();
    assert_eq!(second.stages, vec!["deduplication-check", "done-duplicate"]);
    assert!(second.article.entities.is_none());
    assert_eq!(second.article.text, ARTICLE);
}

#[tokio::test]
async fn test_unrelated_articles_both_stored() {
    let desk = setup();
    desk.ingest(ARTICLE).await.unwrap();
    let other = desk
        .ingest("Monsoon rainfall lifted tractor demand in rural districts this season.")
        .await
        .unwrap();
    assert!(matches!(other, IngestOutcome::Processed { .. }));
}

const RBI_POLICY: &str = "The Reserve Bank of India kept the repo rate unchanged at 6.5 per cent on \
    Friday, with the monetary policy committee voting five to one to hold. Governor Shaktikanta Das \
    said inflation was moving closer to the four per cent target but food prices remained volatile, \
    and the central bank retained its stance of withdrawal of accommodation while raising its growth \
    forecast for the current fiscal year to 7.2 per cent.";

const AUTO_SALES: &str = "Tata Motors reported a 12 per cent jump in domestic passenger vehicle \
    sales for October, helped by strong festive demand for its Nexon and Punch models. The company \
    sold 48,337 units during the month, compared with 45,423 units a year earlier, while electric \
    vehicle volumes rose sharply as dealers cleared inventory ahead of Diwali and new charging \
    partnerships expanded across major cities.";

#[tokio::test]
async fn test_unrelated_full_length_articles_both_stored() {
    let desk = setup();
    assert!(matches!(desk.ingest(RBI_POLICY).await.unwrap(), IngestOutcome::Processed { .. }));

    let second = desk.ingest(AUTO_SALES).await.unwrap();
    assert!(matches!(second, IngestOutcome::Processed { .. }), "got {second:?}");
}

#[tokio::test]
async fn test_lightly_edited_article_is_duplicate() {
    let desk = setup();
    desk.ingest(AUTO_SALES).await.unwrap();
    let edited = AUTO_SALES.replace("Diwali", "Deepavali").replace("sharply", "strongly");
    let outcome = desk.ingest(&edited).await.unwrap();
    assert!(matches!(outcome, IngestOutcome::Ignored { .. }));
}

#[tokio::test]
async fn test_punctuation_only_text_rejected_and_pipeline_keeps_working() {
    let model = ScriptedModel::replying(ENTITIES_REPLY);
    let desk = desk(Providers {
        model: model.clone(),
        ..providers()
    });

    let err = desk.ingest("!!! --- ???").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    assert_eq!(model.calls(), 0);

    let next = desk.ingest(ARTICLE).await.unwrap();
    assert!(matches!(next, IngestOutcome::Processed { .. }), "got {next:?}");
}

#[tokio::test]
async fn test_invalid_model_json_falls_back_to_empty_entities() {
    let desk = desk(Providers {
        model: ScriptedModel::replying("Sorry, I cannot help with that."),
        ..providers()
    });
    let outcome = desk.ingest(ARTICLE).await.unwrap();
    let IngestOutcome::Processed { entities } = outcome else {
        panic!("expected processed");
    };
    assert!(entities.companies.is_empty());
    assert!(entities.sectors.is_empty());
    assert!(entities.sentiment.is_none());
}

#[tokio::test]
async fn test_bare_json_reply_is_parsed() {
    let desk = desk(Providers {
        model: ScriptedModel::replying(r#"{"companies": ["Paytm"], "sectors": ["Fintech"]}"#),
        ..providers()
    });
    let outcome = desk.ingest(ARTICLE).await.unwrap();
    let IngestOutcome::Processed { entities } = outcome else {
        panic!("expected processed");
    };
    assert_eq!(entities.companies, vec!["Paytm"]);
    assert!(entities.sentiment.is_none());
}

#[tokio::test]
async fn test_model_failure_aborts_without_storing() {
    let desk = desk(Providers {
        model: ScriptedModel::failing("connection refused"),
        ..providers()
    });
    let err = desk.ingest(ARTICLE).await.unwrap_err();
    assert!(matches!(err, DomainError::Model(_)));

    let hits = desk.search("Zomato quarterly food delivery orders").await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_empty_text_rejected() {
    let desk = setup();
    let err = desk.ingest("   ").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}
