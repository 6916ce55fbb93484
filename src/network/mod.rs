use reqwest::{Client, Response};

pub const API_URL: &str = "https://jsonplaceholder.typicode.com/comments";

#[derive(Clone, Debug)]
pub struct DataService {
    client: Client,
    endpoint: String,
}

impl DataService {
    pub fn new() -> Self {
        Self::with_endpoint(API_URL)
    }

    /// Crate-internal so the public accessor can only ever target `API_URL`.
    pub(crate) fn with_endpoint(endpoint: impl Into<String>) -> Self {
        DataService {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues one GET against the endpoint. Transport failures and non-2xx
    /// statuses come back as the client's own error, untouched.
    pub async fn fetch_data(&self) -> reqwest::Result<Response> {
        let response = self.client.get(&self.endpoint).send().await?;
        response.error_for_status()
    }
}

impl Default for DataService {
    fn default() -> Self {
        Self::new()
    }
}
