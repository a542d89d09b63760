use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::transcription::model::{ItemResult, Job, JobStatus};

/// Process-wide in-memory job map. Jobs are visible to readers as soon as
/// they are created and are never evicted within the process lifetime.
#[derive(Clone, Default)]
pub struct JobStore {
    jobs: Arc<RwLock<HashMap<Uuid, Job>>>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh random job id and inserts the job as `in_progress`
    /// with empty results, before any network activity happens.
    pub async fn create(&self, callback_url: String) -> Uuid {
        let id = Uuid::new_v4();
        self.jobs.write().await.insert(id, Job::new(callback_url));
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<Job> {
        self.jobs.read().await.get(&id).cloned()
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.jobs.read().await.contains_key(&id)
    }

    /// Publishes the final results. Status and results are swapped under one
    /// write lock so readers never see `completed` with a half-built list.
    pub async fn complete(&self, id: Uuid, results: Vec<ItemResult>) {
        if let Some(job) = self.jobs.write().await.get_mut(&id) {
            job.status = JobStatus::Completed;
            job.results = results;
        }
    }

    /// Attaches a callback-delivery diagnostic to a completed job. Does not
    /// change the job status.
    pub async fn record_callback_error(&self, id: Uuid, message: String) {
        if let Some(job) = self.jobs.write().await.get_mut(&id) {
            job.callback_error = Some(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn created_job_is_immediately_visible_and_in_progress() {
        let store = JobStore::new();
        let id = store.create("http://cb.example".into()).await;

        let job = store.get(id).await.unwrap();
        assert_eq!(job.status, JobStatus::InProgress);
        assert_eq!(job.callback_url, "http://cb.example");
        assert!(job.results.is_empty());
        assert!(job.callback_error.is_none());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = JobStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
        assert!(!store.contains(Uuid::new_v4()).await);
    }

    #[tokio::test]
    async fn complete_publishes_status_and_results_together() {
        let store = JobStore::new();
        let id = store.create("http://cb.example".into()).await;

        let results = vec![
            ItemResult::transcript("a", "first".into()),
            ItemResult::error("b", "failed".into()),
        ];
        store.complete(id, results.clone()).await;

        let job = store.get(id).await.unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.results, results);

        // Reads after completion are idempotent.
        let again = store.get(id).await.unwrap();
        assert_eq!(again.results, job.results);
    }

    #[tokio::test]
    async fn callback_error_does_not_change_status() {
        let store = JobStore::new();
        let id = store.create("http://cb.example".into()).await;
        store.complete(id, vec![]).await;

        store.record_callback_error(id, "connection refused".into()).await;

        let job = store.get(id).await.unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.callback_error.as_deref(), Some("connection refused"));
    }

    #[tokio::test]
    async fn jobs_are_independent_across_concurrent_completions() {
        let store = JobStore::new();
        let a = store.create("http://a".into()).await;
        let b = store.create("http://b".into()).await;

        let (sa, sb) = (store.clone(), store.clone());
        let ta = tokio::spawn(async move {
            sa.complete(a, vec![ItemResult::transcript("a", "one".into())]).await
        });
        let tb = tokio::spawn(async move {
            sb.complete(b, vec![ItemResult::error("b", "two".into())]).await
        });
        ta.await.unwrap();
        tb.await.unwrap();

        assert_eq!(store.get(a).await.unwrap().results[0].transcript.as_deref(), Some("one"));
        assert_eq!(store.get(b).await.unwrap().results[0].error.as_deref(), Some("two"));
    }
}
