use std::marker::PhantomData;

use async_trait::async_trait;
use contracts::domain::a002_service::OneOrMany;
use contracts::domain::common::{ListRecord, RecordKey};
use contracts::shared::list::ListError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::AbortSignal;

use super::source::{RecordSource, SourceError};
use crate::shared::api_utils::{api_url, bearer};
use crate::shared::request::failure_message;

/// Records behind a REST collection like `/api/services/`.
///
/// `GET` on the collection path lists (one object or an array), `POST` creates,
/// `PUT`/`DELETE` on `{path}/{id}` update and delete. Every call carries the
/// session's bearer token and its caller's abort signal.
pub struct HttpSource<T> {
    collection_path: &'static str,
    token: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> HttpSource<T> {
    pub fn new(collection_path: &'static str, token: impl Into<String>) -> Self {
        Self {
            collection_path,
            token: token.into(),
            _record: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        api_url(self.collection_path)
    }

    fn item_url(&self, id: &impl RecordKey) -> String {
        format!(
            "{}/{}",
            api_url(self.collection_path.trim_end_matches('/')),
            id.as_string()
        )
    }

    fn authorized(&self, builder: RequestBuilder, signal: &Option<AbortSignal>) -> RequestBuilder {
        builder
            .header("Authorization", &bearer(&self.token))
            .abort_signal(signal.as_ref())
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, SourceError> {
    builder
        .send()
        .await
        .map_err(|e| SourceError::Remote(format!("Failed to send request: {}", e)))
}

async fn send_json(builder: RequestBuilder, body: &impl Serialize) -> Result<Response, SourceError> {
    builder
        .json(body)
        .map_err(|e| SourceError::Remote(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| SourceError::Remote(format!("Failed to send request: {}", e)))
}

/// 404 on an item URL means the id is unknown; any other failure is remote.
async fn check(response: Response, id: Option<String>) -> Result<Response, SourceError> {
    if response.ok() {
        return Ok(response);
    }
    if let (404, Some(id)) = (response.status(), id) {
        return Err(ListError::not_found(id).into());
    }
    Err(SourceError::Remote(
        failure_message(&response, "Request failed").await,
    ))
}

async fn read<R: DeserializeOwned>(response: Response) -> Result<R, SourceError> {
    response
        .json::<R>()
        .await
        .map_err(|e| SourceError::Remote(format!("Failed to parse response: {}", e)))
}

#[async_trait(?Send)]
impl<T> RecordSource<T> for HttpSource<T>
where
    T: ListRecord + DeserializeOwned + 'static,
    T::Draft: Serialize,
    T::Patch: Serialize,
{
    async fn list(&self, signal: Option<AbortSignal>) -> Result<Vec<T>, SourceError> {
        let request = self.authorized(Request::get(&self.collection_url()), &signal);
        let response = send(request).await?;
        let body: OneOrMany<T> = read(check(response, None).await?).await?;
        Ok(body.into_vec())
    }

    async fn create(&self, draft: T::Draft, signal: Option<AbortSignal>) -> Result<T, SourceError> {
        let request = self.authorized(Request::post(&self.collection_url()), &signal);
        let response = send_json(request, &draft).await?;
        read(check(response, None).await?).await
    }

    async fn update(
        &self,
        id: &T::Id,
        patch: T::Patch,
        signal: Option<AbortSignal>,
    ) -> Result<T, SourceError> {
        let request = self.authorized(Request::put(&self.item_url(id)), &signal);
        let response = send_json(request, &patch).await?;
        read(check(response, Some(id.as_string())).await?).await
    }

    async fn delete(&self, id: &T::Id, signal: Option<AbortSignal>) -> Result<(), SourceError> {
        let request = self.authorized(Request::delete(&self.item_url(id)), &signal);
        let response = send(request).await?;
        check(response, Some(id.as_string())).await?;
        Ok(())
    }
}
