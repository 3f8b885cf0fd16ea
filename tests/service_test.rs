use feedback_dashboard_rust::models::{NewFeedback, Sentiment, Theme};
use feedback_dashboard_rust::store::{MemoryStore, SledStore};
use feedback_dashboard_rust::FeedbackService;

fn empty_service() -> FeedbackService {
    FeedbackService::new(Box::new(MemoryStore::with_items(Vec::new()))).unwrap()
}

#[test]
fn test_first_run_seeds_demo_data() {
    let service = FeedbackService::new(Box::new(MemoryStore::new())).unwrap();
    assert_eq!(service.items().len(), 8);
    // Seeded items satisfy the derived-field invariant
    for item in service.items() {
        let classification = feedback_dashboard_rust::classify(&item.text);
        assert_eq!(item.sentiment, classification.sentiment);
        assert_eq!(item.tags, classification.tags);
    }
}

#[test]
fn test_add_feedback_classifies_and_assigns_ids() {
    let mut service = empty_service();

    let first = service
        .add_feedback(NewFeedback {
            text: "Excellent service and fast delivery!".to_string(),
            rating: Some(5),
            customer: Some("Sarah M.".to_string()),
            date: None,
        })
        .unwrap();
    let second = service
        .add_feedback(NewFeedback {
            text: "The staff was rude and we had to wait way too long.".to_string(),
            rating: Some(1),
            customer: None,
            date: None,
        })
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.sentiment, Sentiment::Positive);
    assert_eq!(second.sentiment, Sentiment::Negative);
    assert_eq!(second.customer, "Anonymous");
    assert_eq!(service.items().len(), 2);
    // Insertion order is preserved
    assert_eq!(service.items()[0].id, first.id);
}

#[test]
fn test_add_feedback_rejects_empty_text() {
    let mut service = empty_service();
    let result = service.add_feedback(NewFeedback {
        text: "   ".to_string(),
        ..NewFeedback::default()
    });
    assert!(result.is_err());
    assert!(service.items().is_empty());
}

#[test]
fn test_import_csv_uses_the_same_classification_path() {
    let mut service = empty_service();
    let csv = "feedback,rating,customer\n\
               Excellent service and fast delivery!,5,Ana\n\
               Waited 45 minutes for delivery. Extremely frustrated.,1,Bob\n\
               ,3,ignored\n";

    let added = service.import_csv(csv.as_bytes()).unwrap();
    assert_eq!(added, 2);
    assert_eq!(service.items().len(), 2);
    assert_eq!(service.items()[0].sentiment, Sentiment::Positive);
    assert_eq!(service.items()[1].sentiment, Sentiment::Negative);
    assert!(service.items()[1].tags.contains(&Theme::WaitTime));
}

#[test]
fn test_views_over_the_collection() {
    let mut service = empty_service();
    service
        .import_csv(
            "Excellent service!,5,\nGreat delicious food,5,\nThe staff was rude,1,\n".as_bytes(),
        )
        .unwrap();

    let stats = service.sentiment_stats().unwrap();
    assert_eq!(stats.positive, 2);
    assert_eq!(stats.negative, 1);
    assert_eq!(stats.headline, "Mostly Positive");

    let kpis = service.kpis();
    assert_eq!(kpis.total_feedback, 3);
    assert_eq!(kpis.most_common_complaint, "service");

    let actions = service.action_items();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].theme, Theme::Service);
}

#[test]
fn test_clear_all_does_not_reseed_demo_data() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = SledStore::open(dir.path()).unwrap();
        let mut service = FeedbackService::new(Box::new(store)).unwrap();
        assert_eq!(service.items().len(), 8);
        service.clear_all().unwrap();
    }

    // The cleared store holds an explicit empty collection, not demo data
    let store = SledStore::open(dir.path()).unwrap();
    let service = FeedbackService::new(Box::new(store)).unwrap();
    assert!(service.items().is_empty());
}

#[test]
fn test_purge_brings_demo_data_back() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = SledStore::open(dir.path()).unwrap();
        let mut service = FeedbackService::new(Box::new(store)).unwrap();
        service.purge().unwrap();
        assert!(service.items().is_empty());
    }

    let store = SledStore::open(dir.path()).unwrap();
    let service = FeedbackService::new(Box::new(store)).unwrap();
    assert_eq!(service.items().len(), 8);
}
