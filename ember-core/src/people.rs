use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use ember_store::Person;

use crate::error::FetchError;

/// Default host of the fake-data generator.
pub const DEFAULT_FAKER_BASE_URL: &str = "https://fakerapi.it";

/// Anything able to produce a list of people on demand.
#[async_trait]
pub trait PeopleSource: Send + Sync {
    async fn fetch(&self, quantity: u8) -> Result<Vec<Person>, FetchError>;
}

#[derive(Debug, Deserialize)]
struct FakerResponse {
    #[serde(default)]
    data: Vec<Person>,
}

/// `reqwest`-backed client for the fakerapi.it custom endpoint.
#[derive(Clone, Debug)]
pub struct FakerClient {
    http: reqwest::Client,
    base_url: String,
}

impl FakerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    /// Full request URL for `quantity` people.
    pub fn request_url(&self, quantity: u8) -> String {
        format!(
            "{}/api/v2/custom?_quantity={quantity}&_locale=en_US&uuid=uuid&first_name=firstName&last_name=lastName&birthday=date",
            self.base_url
        )
    }
}

#[async_trait]
impl PeopleSource for FakerClient {
    async fn fetch(&self, quantity: u8) -> Result<Vec<Person>, FetchError> {
        let url = self.request_url(quantity);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let people = parse_people(&body)?;
        debug!(quantity, received = people.len(), "people API responded");

        Ok(people)
    }
}

/// Decode a fakerapi.it response body. A missing `data` array yields no people.
pub fn parse_people(body: &str) -> Result<Vec<Person>, FetchError> {
    let response: FakerResponse = serde_json::from_str(body)?;
    Ok(response.data)
}
