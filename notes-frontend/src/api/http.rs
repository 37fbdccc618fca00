//! Typed HTTP client for the notes REST API.

use super::{NotesApi, TransportError};
use crate::config::defaults;
use async_trait::async_trait;
use notes_types::{Note, NoteDraft, NoteId};
use reqwest::{Client, RequestBuilder, Response, header};
use serde::de::DeserializeOwned;

/// Join a base URL and a path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub struct HttpNotesApi {
    base_url: String,
    client: Client,
}

impl HttpNotesApi {
    /// Create a client rooted at `base_url`. Empty means the default origin.
    pub fn new(base_url: &str) -> Self {
        let base_url = if base_url.trim().is_empty() {
            defaults::ORIGIN
        } else {
            base_url.trim()
        };
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn note_url(&self, id: &NoteId) -> String {
        self.url(&format!("/notes/{}", urlencoding::encode(id.as_str())))
    }

    async fn send(
        &self,
        request: RequestBuilder,
        context: &'static str,
    ) -> Result<Response, TransportError> {
        let resp = request
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                log::warn!("[API] Failed to {}: {}", context, e);
                TransportError::from(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            log::warn!("[API] Failed to {}: HTTP {}", context, status);
            return Err(TransportError::Status {
                status: status.as_u16(),
                context,
            });
        }

        Ok(resp)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &'static str,
    ) -> Result<T, TransportError> {
        let resp = self.send(request, context).await?;
        resp.json::<T>().await.map_err(|e| {
            log::warn!("[API] Failed to parse response ({}): {}", context, e);
            TransportError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn list(&self, query: &str) -> Result<Vec<Note>, TransportError> {
        let mut request = self.client.get(self.url("/notes"));
        if !query.is_empty() {
            request = request.query(&[("q", query)]);
        }
        log::debug!("[API] GET /notes (q={:?})", query);
        self.send_json(request, "fetch notes").await
    }

    async fn create(&self, draft: &NoteDraft) -> Result<Note, TransportError> {
        log::debug!("[API] POST /notes");
        let request = self.client.post(self.url("/notes")).json(draft);
        self.send_json(request, "create note").await
    }

    async fn update(&self, id: &NoteId, draft: &NoteDraft) -> Result<Note, TransportError> {
        log::debug!("[API] PUT /notes/{}", id);
        let request = self.client.put(self.note_url(id)).json(draft);
        self.send_json(request, "update note").await
    }

    async fn delete(&self, id: &NoteId) -> Result<(), TransportError> {
        log::debug!("[API] DELETE /notes/{}", id);
        let request = self.client.delete(self.note_url(id));
        self.send(request, "delete note").await?;
        Ok(())
    }
}
