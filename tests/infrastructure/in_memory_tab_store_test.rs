use tabforge::application::ports::{TabFactory, TabStore};
use tabforge::infrastructure::generation::LinkTabFactory;
use tabforge::infrastructure::persistence::InMemoryTabStore;

fn records(range: std::ops::Range<u64>) -> Vec<tabforge::domain::TabRecord> {
    let factory = LinkTabFactory::default();
    range.map(|i| factory.produce(i)).collect()
}

#[tokio::test]
async fn given_append_without_persist_then_count_is_unchanged() {
    let store = InMemoryTabStore::new();

    store.append(&records(0..10)).await;

    assert_eq!(store.current_count().await, 0);
    assert!(store.persisted_records().await.is_empty());
}

#[tokio::test]
async fn given_persist_after_append_then_count_reflects_working_set() {
    let store = InMemoryTabStore::new();

    store.append(&records(0..10)).await;
    store.persist().await.expect("persist");

    assert_eq!(store.current_count().await, 10);
    assert_eq!(store.persisted_records().await, records(0..10));
}

#[tokio::test]
async fn given_multiple_commits_then_counts_accumulate() {
    let store = InMemoryTabStore::new();

    store.append(&records(0..100)).await;
    store.persist().await.expect("persist");
    store.append(&records(100..150)).await;
    store.persist().await.expect("persist");

    assert_eq!(store.current_count().await, 150);
}

#[tokio::test]
async fn given_preloaded_records_then_they_count_as_persisted() {
    let store = InMemoryTabStore::new();

    store.preload(records(0..7)).await;

    assert_eq!(store.current_count().await, 7);
    assert_eq!(store.persisted_records().await, records(0..7));
}
