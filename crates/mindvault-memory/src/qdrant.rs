//! Qdrant-backed vector store.
//!
//! Talks to a Qdrant server over its REST API. The collection is created on
//! connect if absent, with the configured dimensionality and cosine
//! distance. A payload index on the insertion timestamp backs the
//! most-recent-inserted ordering of [`VectorStore::scan`].

use crate::store::{MetadataFilter, VectorStore};
use crate::{MemoryError, Result, VaultEntry};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::{debug, info};

/// Payload key for the entry text.
const PAYLOAD_CONTENT: &str = "content";
/// Payload key for the RFC 3339 creation timestamp.
const PAYLOAD_CREATED_AT: &str = "created_at";
/// Payload key for the numeric insertion timestamp (scroll ordering).
const PAYLOAD_CREATED_AT_TS: &str = "created_at_ts";

/// Vector store backed by a Qdrant collection.
pub struct QdrantVectorStore {
    client: Client,
    base_url: String,
    collection: String,
}

impl QdrantVectorStore {
    /// Connect to a Qdrant server, creating the collection if it does not
    /// exist.
    ///
    /// `dimension` must match the embedding model in use; an existing
    /// collection with a different dimensionality has to be recreated out of
    /// band.
    pub async fn connect(
        url: impl Into<String>,
        collection: impl Into<String>,
        dimension: usize,
    ) -> Result<Self> {
        let store = Self {
            client: Client::new(),
            base_url: url.into().trim_end_matches('/').to_string(),
            collection: collection.into(),
        };
        store.ensure_collection(dimension).await?;
        Ok(store)
    }

    fn collection_url(&self) -> String {
        format!("{}/collections/{}", self.base_url, self.collection)
    }

    /// Create the collection (and the timestamp payload index) if absent.
    async fn ensure_collection(&self, dimension: usize) -> Result<()> {
        let response = self.client.get(self.collection_url()).send().await?;
        if response.status().is_success() {
            debug!(collection = %self.collection, "Qdrant collection exists");
            return Ok(());
        }
        if response.status().as_u16() != 404 {
            return Err(MemoryError::store(format!(
                "Qdrant collection check failed: {}",
                response.status()
            )));
        }

        let body = json!({
            "vectors": { "size": dimension, "distance": "Cosine" }
        });
        let response = self
            .client
            .put(self.collection_url())
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(MemoryError::store(format!(
                "Failed to create Qdrant collection: {}",
                text
            )));
        }
        info!(collection = %self.collection, dimension, "Created Qdrant collection");

        // Range index so scans can be ordered by insertion time server-side.
        let body = json!({
            "field_name": PAYLOAD_CREATED_AT_TS,
            "field_schema": "integer"
        });
        let response = self
            .client
            .put(format!("{}/index", self.collection_url()))
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(MemoryError::store(format!(
                "Failed to create Qdrant payload index: {}",
                text
            )));
        }

        Ok(())
    }

    /// Convert a metadata filter into a Qdrant filter clause.
    fn to_qdrant_filter(filter: &MetadataFilter) -> Option<Value> {
        if filter.conditions().is_empty() {
            return None;
        }
        let must: Vec<Value> = filter
            .conditions()
            .iter()
            .map(|(key, value)| json!({ "key": key, "match": { "value": value } }))
            .collect();
        Some(json!({ "must": must }))
    }

    /// Build the payload for an entry: content, timestamps, and metadata
    /// flattened alongside them.
    fn to_payload(entry: &VaultEntry) -> Value {
        let mut payload = serde_json::Map::new();
        payload.insert(PAYLOAD_CONTENT.to_string(), json!(entry.content));
        payload.insert(PAYLOAD_CREATED_AT.to_string(), json!(entry.created_at));
        payload.insert(
            PAYLOAD_CREATED_AT_TS.to_string(),
            json!(entry.created_at.timestamp_micros()),
        );
        for (key, value) in &entry.metadata {
            payload.insert(key.clone(), value.clone());
        }
        Value::Object(payload)
    }

    /// Rebuild a [`VaultEntry`] from a scored point or scroll record.
    fn from_point(id: &Value, payload: &Value, vector: &Value) -> Result<VaultEntry> {
        let id = id
            .as_str()
            .map(ToString::to_string)
            .unwrap_or_else(|| id.to_string());

        let payload = payload
            .as_object()
            .ok_or_else(|| MemoryError::retrieval("Qdrant point has no payload"))?;

        let content = payload
            .get(PAYLOAD_CONTENT)
            .and_then(Value::as_str)
            .ok_or_else(|| MemoryError::retrieval("Qdrant payload missing content"))?
            .to_string();

        let created_at: DateTime<Utc> = payload
            .get(PAYLOAD_CREATED_AT)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Utc::now);

        let embedding: Vec<f32> = serde_json::from_value(vector.clone()).unwrap_or_default();

        let metadata: HashMap<String, Value> = payload
            .iter()
            .filter(|(key, _)| {
                !matches!(
                    key.as_str(),
                    PAYLOAD_CONTENT | PAYLOAD_CREATED_AT | PAYLOAD_CREATED_AT_TS
                )
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(VaultEntry {
            id,
            content,
            embedding,
            metadata,
            created_at,
        })
    }
}

#[async_trait]
impl VectorStore for QdrantVectorStore {
    async fn insert(&self, entry: VaultEntry) -> Result<()> {
        self.insert_batch(vec![entry]).await
    }

    async fn insert_batch(&self, entries: Vec<VaultEntry>) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let points: Vec<Value> = entries
            .iter()
            .map(|entry| {
                json!({
                    "id": entry.id,
                    "vector": entry.embedding,
                    "payload": Self::to_payload(entry),
                })
            })
            .collect();

        let response = self
            .client
            .put(format!("{}/points?wait=true", self.collection_url()))
            .json(&json!({ "points": points }))
            .send()
            .await?;

        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(MemoryError::store(format!("Qdrant upsert failed: {}", text)));
        }
        Ok(())
    }

    async fn search(
        &self,
        query: &[f32],
        filter: &MetadataFilter,
        limit: usize,
    ) -> Result<Vec<(VaultEntry, f32)>> {
        let mut body = json!({
            "vector": query,
            "limit": limit,
            "with_payload": true,
            "with_vector": true,
        });
        if let Some(qdrant_filter) = Self::to_qdrant_filter(filter) {
            body["filter"] = qdrant_filter;
        }

        let response = self
            .client
            .post(format!("{}/points/search", self.collection_url()))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(MemoryError::retrieval(format!(
                "Qdrant search failed: {}",
                text
            )));
        }

        let body: Value = response.json().await?;
        let points = body
            .get("result")
            .and_then(Value::as_array)
            .ok_or_else(|| MemoryError::retrieval("Malformed Qdrant search response"))?;

        points
            .iter()
            .map(|point| {
                let entry = Self::from_point(
                    point.get("id").unwrap_or(&Value::Null),
                    point.get("payload").unwrap_or(&Value::Null),
                    point.get("vector").unwrap_or(&Value::Null),
                )?;
                let score = point
                    .get("score")
                    .and_then(Value::as_f64)
                    .unwrap_or_default() as f32;
                Ok((entry, score))
            })
            .collect()
    }

    async fn scan(&self, filter: &MetadataFilter, limit: usize) -> Result<Vec<VaultEntry>> {
        let mut body = json!({
            "limit": limit,
            "with_payload": true,
            "with_vector": true,
            "order_by": { "key": PAYLOAD_CREATED_AT_TS, "direction": "desc" },
        });
        if let Some(qdrant_filter) = Self::to_qdrant_filter(filter) {
            body["filter"] = qdrant_filter;
        }

        let response = self
            .client
            .post(format!("{}/points/scroll", self.collection_url()))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(MemoryError::retrieval(format!(
                "Qdrant scroll failed: {}",
                text
            )));
        }

        let body: Value = response.json().await?;
        let points = body
            .pointer("/result/points")
            .and_then(Value::as_array)
            .ok_or_else(|| MemoryError::retrieval("Malformed Qdrant scroll response"))?;

        points
            .iter()
            .map(|point| {
                Self::from_point(
                    point.get("id").unwrap_or(&Value::Null),
                    point.get("payload").unwrap_or(&Value::Null),
                    point.get("vector").unwrap_or(&Value::Null),
                )
            })
            .collect()
    }

    async fn count(&self, filter: &MetadataFilter) -> Result<usize> {
        let mut body = json!({ "exact": true });
        if let Some(qdrant_filter) = Self::to_qdrant_filter(filter) {
            body["filter"] = qdrant_filter;
        }

        let response = self
            .client
            .post(format!("{}/points/count", self.collection_url()))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(MemoryError::retrieval(format!(
                "Qdrant count failed: {}",
                text
            )));
        }

        let body: Value = response.json().await?;
        body.pointer("/result/count")
            .and_then(Value::as_u64)
            .map(|n| n as usize)
            .ok_or_else(|| MemoryError::retrieval("Malformed Qdrant count response"))
    }
}
