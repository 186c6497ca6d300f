//! HTTP gateway to the externally owned collection API.
//!
//! Status codes on mutations mirror the remote service's contract: 404 when the
//! record is not in the expected collection, 400 with a `detail` body when the
//! action is rejected (e.g. already verified), 429 while a bulk completion is
//! running. Everything else is a transport failure.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::workflows::registration::{
    ActionError, Collection, CollectionStore, CompletionReport, TransportError, VolunteerId,
    VolunteerRecord,
};

/// `reqwest`-backed [`CollectionStore`] implementation.
pub struct HttpCollectionStore {
    client: Client,
    base_url: String,
}

impl HttpCollectionStore {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TransportError::new(err.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn collection_url(&self, collection: Collection) -> String {
        format!("{}/collection/{}", self.base_url, collection.segment())
    }

    fn record_url(&self, collection: Collection, id: VolunteerId) -> String {
        format!("{}/{id}", self.collection_url(collection))
    }

    async fn post_mutation(&self, url: &str) -> Result<reqwest::Response, ActionError> {
        debug!(%url, "posting mutation");
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(|err| ActionError::Transport(transport(err)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response.json::<ErrorBody>().await.ok().and_then(|b| b.detail);
        Err(classify_failure(status, detail))
    }
}

#[async_trait]
impl CollectionStore for HttpCollectionStore {
    async fn list(&self, collection: Collection) -> Result<Vec<VolunteerRecord>, TransportError> {
        let url = self.collection_url(collection);
        let response = self.client.get(&url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::new(format!(
                "listing '{collection}' returned {status}"
            )));
        }

        response.json().await.map_err(transport)
    }

    async fn fetch(
        &self,
        collection: Collection,
        id: VolunteerId,
    ) -> Result<Option<VolunteerRecord>, TransportError> {
        let url = self.record_url(collection, id);
        let response = self.client.get(&url).send().await.map_err(transport)?;

        match response.status() {
            status if status.is_success() => {
                let record = response.json().await.map_err(transport)?;
                Ok(Some(record))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(TransportError::new(format!(
                "probing '{collection}' for {id} returned {status}"
            ))),
        }
    }

    async fn verify(&self, id: VolunteerId) -> Result<(), ActionError> {
        let url = format!("{}/verify", self.record_url(Collection::New, id));
        self.post_mutation(&url).await.map(|_| ())
    }

    async fn approve(&self, id: VolunteerId) -> Result<(), ActionError> {
        let url = format!("{}/approve", self.record_url(Collection::Waiting, id));
        self.post_mutation(&url).await.map(|_| ())
    }

    async fn complete_all(&self) -> Result<CompletionReport, ActionError> {
        let url = format!("{}/mailing/approve-all", self.base_url);
        let response = self.post_mutation(&url).await?;

        let body: CompletionBody = response
            .json()
            .await
            .map_err(|err| ActionError::Transport(transport(err)))?;
        Ok(CompletionReport {
            completed: body.completed,
        })
    }
}

/// Error payload shape used by the remote service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Success payload of the bulk completion endpoint.
#[derive(Debug, Deserialize)]
struct CompletionBody {
    #[serde(default)]
    completed: Vec<String>,
}

fn transport(err: reqwest::Error) -> TransportError {
    TransportError::new(err.to_string())
}

fn classify_failure(status: StatusCode, detail: Option<String>) -> ActionError {
    match status {
        StatusCode::NOT_FOUND => ActionError::NotFound,
        StatusCode::BAD_REQUEST => {
            ActionError::Rejected(detail.unwrap_or_else(|| "request rejected".to_string()))
        }
        StatusCode::TOO_MANY_REQUESTS => ActionError::Busy,
        status => ActionError::Transport(TransportError::new(
            detail.unwrap_or_else(|| format!("mutation returned {status}")),
        )),
    }
}
