//! End-to-end retrieval tests across the memory crate.
//!
//! These tests wire real stores and retrievers together (with deterministic
//! embeddings) and verify the store-then-retrieve flow, owner isolation,
//! persistence, and both degraded-retrieval policies.

use mindvault_integration_tests::{FailingEmbeddings, KeywordEmbeddings};
use mindvault_memory::{
    ContextRetriever, FileVectorStore, InMemoryVectorStore, JournalStore, KnowledgeBase,
    KnowledgeRetriever, VectorStore, NO_KNOWLEDGE_SENTINEL,
};
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_store_then_retrieve_roundtrip() {
    let store = Arc::new(InMemoryVectorStore::new());
    let embeddings = Arc::new(KeywordEmbeddings);
    let journal = JournalStore::new(embeddings.clone(), store.clone());
    let retriever = ContextRetriever::new(embeddings, store);

    journal
        .store("u1", "Felt anxious before the presentation")
        .await
        .unwrap();
    journal.store("u1", "A calm Sunday morning").await.unwrap();

    let results = retriever.retrieve("u1", "anxious thoughts", 5).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], "Felt anxious before the presentation");
}

#[tokio::test]
async fn test_owner_partitions_are_isolated() {
    let store = Arc::new(InMemoryVectorStore::new());
    let embeddings = Arc::new(KeywordEmbeddings);
    let journal = JournalStore::new(embeddings.clone(), store.clone());
    let retriever = ContextRetriever::new(embeddings, store);

    journal.store("alice", "anxious about the move").await.unwrap();
    journal.store("bob", "anxious about exams").await.unwrap();

    let alice = retriever.retrieve("alice", "anxious", 10).await.unwrap();
    assert_eq!(alice, vec!["anxious about the move".to_string()]);

    let bob = retriever.retrieve("bob", "anxious", 10).await.unwrap();
    assert_eq!(bob, vec!["anxious about exams".to_string()]);

    let nobody = retriever.retrieve("carol", "anxious", 10).await.unwrap();
    assert!(nobody.is_empty());
}

#[tokio::test]
async fn test_entries_survive_file_store_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vault.json");
    let embeddings = Arc::new(KeywordEmbeddings);

    {
        let store = Arc::new(FileVectorStore::new(path.clone()).unwrap());
        let journal = JournalStore::new(embeddings.clone(), store);
        journal.store("u1", "anxious about travel").await.unwrap();
    }

    let store = Arc::new(FileVectorStore::new(path).unwrap());
    let retriever = ContextRetriever::new(embeddings, store);
    let results = retriever.retrieve("u1", "anxious", 5).await.unwrap();
    assert_eq!(results, vec!["anxious about travel".to_string()]);
}

#[tokio::test]
async fn test_similarity_failure_falls_back_to_recency() {
    let store = Arc::new(InMemoryVectorStore::new());
    let good = Arc::new(KeywordEmbeddings);
    let journal = JournalStore::new(good, store.clone());
    journal.store("u1", "first entry").await.unwrap();
    journal.store("u1", "second entry").await.unwrap();
    journal.store("u1", "third entry").await.unwrap();

    // The query embedding fails, so similarity cannot run; the owner still
    // gets their entries back, newest first, truncated to the limit.
    let retriever = ContextRetriever::new(Arc::new(FailingEmbeddings), store);
    let results = retriever.retrieve("u1", "anything", 2).await.unwrap();
    assert_eq!(
        results,
        vec!["third entry".to_string(), "second entry".to_string()]
    );
}

#[tokio::test]
async fn test_knowledge_failure_yields_sentinel_not_error() {
    let store = Arc::new(InMemoryVectorStore::new());
    let base = KnowledgeBase::new(Arc::new(KeywordEmbeddings), store.clone());
    base.ingest_text("doc", "Calm breathing exercises help.")
        .await
        .unwrap();

    let retriever = KnowledgeRetriever::new(Arc::new(FailingEmbeddings), store);
    let snippets = retriever.retrieve("anything", 3).await;
    assert_eq!(snippets, vec![NO_KNOWLEDGE_SENTINEL.to_string()]);
}

#[tokio::test]
async fn test_journal_failure_never_touches_knowledge_policy() {
    // The two degraded policies stay independent: an empty journal is an
    // empty result, while an empty knowledge corpus is also an empty result
    // (the sentinel is reserved for failures).
    let store = Arc::new(InMemoryVectorStore::new());
    let embeddings = Arc::new(KeywordEmbeddings);

    let context = ContextRetriever::new(embeddings.clone(), store.clone());
    assert!(context.retrieve("u1", "anything", 5).await.unwrap().is_empty());

    let knowledge = KnowledgeRetriever::new(embeddings, store.clone());
    assert!(knowledge.retrieve("anything", 3).await.is_empty());

    assert_eq!(
        store
            .count(&mindvault_memory::MetadataFilter::new())
            .await
            .unwrap(),
        0
    );
}
