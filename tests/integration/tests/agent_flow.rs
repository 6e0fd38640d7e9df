//! End-to-end agent tests: feedback generation and personality answering
//! wired to real stores and retrievers, with scripted providers.

use mindvault_agent::{
    AgentError, FeedbackGenerator, FeedbackResult, PersonalityResponder, DEFAULT_FEEDBACK_MESSAGE,
    NOT_ENOUGH_DATA_MESSAGE,
};
use mindvault_integration_tests::{KeywordEmbeddings, ScriptedChat};
use mindvault_memory::{
    ContextRetriever, InMemoryVectorStore, JournalStore, KnowledgeBase, KnowledgeRetriever,
    NO_KNOWLEDGE_SENTINEL,
};
use std::sync::Arc;

fn responder(
    store: Arc<InMemoryVectorStore>,
    provider: Arc<ScriptedChat>,
) -> PersonalityResponder {
    let embeddings = Arc::new(KeywordEmbeddings);
    PersonalityResponder::new(
        ContextRetriever::new(embeddings.clone(), store.clone()),
        KnowledgeRetriever::new(embeddings, store),
        provider,
        "gpt-4",
    )
}

#[tokio::test]
async fn test_full_journal_then_ask_flow() {
    let store = Arc::new(InMemoryVectorStore::new());
    let embeddings = Arc::new(KeywordEmbeddings);
    let journal = JournalStore::new(embeddings.clone(), store.clone());
    let base = KnowledgeBase::new(embeddings.clone(), store.clone());

    // Feedback for a new entry
    let feedback_provider = ScriptedChat::replying(
        r#"{"mood":"anxious","clarityScore":6,"summary":"s","insight":"i","suggestedAction":"a"}"#,
    );
    let generator = FeedbackGenerator::new(feedback_provider.clone(), "gpt-4");
    let feedback = generator
        .generate("I feel anxious about tomorrow's interview")
        .await
        .unwrap();
    let parsed = FeedbackResult::parse(&feedback).unwrap();
    assert_eq!(parsed.mood, "anxious");

    // Store the entry and some expert knowledge
    journal
        .store("u1", "I feel anxious about tomorrow's interview")
        .await
        .unwrap();
    base.ingest_text("cbt", "Name the anxious thought, then test it.")
        .await
        .unwrap();

    // Ask about it: the system prompt must carry both contexts
    let answer_provider = ScriptedChat::replying("You anticipate worst cases before interviews.");
    let responder = responder(store, answer_provider.clone());
    let answer = responder.respond("u1", "How do I handle anxious days?").await.unwrap();

    assert_eq!(answer, "You anticipate worst cases before interviews.");
    assert_eq!(answer_provider.call_count(), 1);
    let system = answer_provider.last_system().unwrap();
    assert!(system.contains("I feel anxious about tomorrow's interview"));
    assert!(system.contains("Name the anxious thought, then test it."));
}

#[tokio::test]
async fn test_responder_short_circuits_without_entries() {
    let store = Arc::new(InMemoryVectorStore::new());
    let provider = ScriptedChat::replying("should never be seen");
    let responder = responder(store, provider.clone());

    let answer = responder.respond("empty-owner", "Am I an optimist?").await.unwrap();
    assert_eq!(answer, NOT_ENOUGH_DATA_MESSAGE);
    // Insufficient data costs nothing: no generation call was made
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_responder_ignores_other_owners_entries() {
    let store = Arc::new(InMemoryVectorStore::new());
    let embeddings = Arc::new(KeywordEmbeddings);
    let journal = JournalStore::new(embeddings, store.clone());
    journal.store("alice", "alice's anxious entry").await.unwrap();

    let provider = ScriptedChat::replying("answer");
    let responder = responder(store, provider.clone());

    let answer = responder.respond("bob", "Am I anxious?").await.unwrap();
    assert_eq!(answer, NOT_ENOUGH_DATA_MESSAGE);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_empty_knowledge_corpus_still_answers() {
    let store = Arc::new(InMemoryVectorStore::new());
    let embeddings = Arc::new(KeywordEmbeddings);
    let journal = JournalStore::new(embeddings, store.clone());
    journal.store("u1", "a calm reflection").await.unwrap();

    let provider = ScriptedChat::replying("grounded answer");
    let responder = responder(store, provider.clone());

    // No knowledge ingested: the expert context is simply empty, never the
    // sentinel and never an error.
    let answer = responder.respond("u1", "What calms me down?").await.unwrap();
    assert_eq!(answer, "grounded answer");
    let system = provider.last_system().unwrap();
    assert!(!system.contains(NO_KNOWLEDGE_SENTINEL));
}

#[tokio::test]
async fn test_generation_failure_surfaces_as_agent_error() {
    let store = Arc::new(InMemoryVectorStore::new());
    let embeddings = Arc::new(KeywordEmbeddings);
    let journal = JournalStore::new(embeddings, store.clone());
    journal.store("u1", "an entry").await.unwrap();

    let responder = responder(store, ScriptedChat::failing());
    let err = responder.respond("u1", "question").await.unwrap_err();
    assert!(matches!(err, AgentError::Generation(_)));
}

#[tokio::test]
async fn test_feedback_is_never_empty() {
    let generator = FeedbackGenerator::new(ScriptedChat::replying("   "), "gpt-4");
    let feedback = generator.generate("entry").await.unwrap();
    assert_eq!(feedback, DEFAULT_FEEDBACK_MESSAGE);
}
