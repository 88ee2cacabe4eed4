use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::domain::{User, UserId};

use super::{RemoteError, RemoteResult, UserRemote};

/// Public demo collection speaking the json-server dialect.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

const PAGE_PARAM: &str = "_page";
const LIMIT_PARAM: &str = "_limit";

/// [`UserRemote`] over plain JSON HTTP:
///
/// - list: `GET {endpoint}?_page=N&_limit=M`
/// - create: `POST {endpoint}`
/// - update: `PUT {endpoint}/{id}`
/// - delete: `DELETE {endpoint}/{id}`
#[derive(Debug, Clone)]
pub struct HttpUserRemote {
    client: Client,
    endpoint: Url,
}

impl HttpUserRemote {
    pub fn new(endpoint: Url) -> RemoteResult<Self> {
        if endpoint.cannot_be_a_base() {
            return Err(RemoteError::endpoint(format!(
                "'{endpoint}' cannot address collection items"
            )));
        }
        let client = Client::builder()
            .build()
            .map_err(|err| RemoteError::network(err.to_string()))?;
        Ok(Self { client, endpoint })
    }

    /// Accepts loose input such as `localhost:3000/users`: a missing scheme
    /// becomes `http://` and a trailing slash is dropped.
    pub fn parse(raw: &str) -> RemoteResult<Self> {
        let normalized = normalize_endpoint(raw);
        if normalized != raw {
            warn!(from = raw, to = %normalized, "normalized collection endpoint");
        }
        let endpoint = Url::parse(&normalized)
            .map_err(|err| RemoteError::endpoint(format!("{normalized}: {err}")))?;
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn item_url(&self, id: &UserId) -> RemoteResult<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteError::endpoint(format!("'{}' has no path", self.endpoint)))?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }
}

fn normalize_endpoint(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

fn ensure_success(response: Response) -> RemoteResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RemoteError::status(status.as_u16()))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> RemoteResult<T> {
    let response = ensure_success(response)?;
    response
        .json::<T>()
        .await
        .map_err(|err| RemoteError::decode(err.to_string()))
}

#[async_trait]
impl UserRemote for HttpUserRemote {
    #[instrument(
        name = "userdesk.http.list_page",
        skip_all,
        fields(endpoint = %self.endpoint, page = page, limit = limit)
    )]
    async fn list_page(&self, page: u32, limit: u32) -> RemoteResult<Vec<User>> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[(PAGE_PARAM, page), (LIMIT_PARAM, limit)])
            .send()
            .await?;
        let users: Vec<User> = read_json(response).await?;
        debug!(count = users.len(), "page received");
        Ok(users)
    }

    #[instrument(name = "userdesk.http.create", skip_all, fields(endpoint = %self.endpoint))]
    async fn create(&self, user: &User) -> RemoteResult<User> {
        let body = User {
            id: None,
            ..user.clone()
        };
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;
        read_json(response).await
    }

    #[instrument(name = "userdesk.http.update", skip_all, fields(user_id = %id))]
    async fn update(&self, id: &UserId, user: &User) -> RemoteResult<User> {
        let url = self.item_url(id)?;
        let response = self.client.put(url).json(user).send().await?;
        read_json(response).await
    }

    #[instrument(name = "userdesk.http.delete", skip_all, fields(user_id = %id))]
    async fn delete(&self, id: &UserId) -> RemoteResult<()> {
        let url = self.item_url(id)?;
        let response = self.client.delete(url).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}
