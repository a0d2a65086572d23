//! UMA HTTP client implementation

use crate::error::{Resource, UmaError};
use crate::models::{Champion, Node, War};
use crate::route::{QueryValue, Route};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.rexians.tk/";

/// Body sent by the API alongside a failed lookup
#[derive(Deserialize)]
struct ErrorBody {
    details: Value,
}

impl ErrorBody {
    /// Strings are kept as sent, other values in their JSON form
    fn into_message(self) -> Option<String> {
        match self.details {
            Value::Null => None,
            Value::String(text) => Some(text),
            other => Some(other.to_string()),
        }
    }
}

/// The main UMA HTTP client
///
/// Owns a single connection pool shared by every request. Requests may be
/// issued concurrently from the same client; call [`UmaClient::close`] once
/// done with it.
///
/// # Example
///
/// ```no_run
/// use uma_http_client::UmaClient;
///
/// # async fn run() -> Result<(), uma_http_client::UmaError> {
/// let client = UmaClient::new()?;
///
/// let champ = client.get_champion("Ghost", 6, 5).await?;
/// println!("{} has {} prestige", champ.name, champ.prestige);
///
/// let node = client.get_node(42).await?;
/// println!("{}: {}", node.node_name, node.node_info);
///
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct UmaClient {
    client: reqwest::Client,
    base_url: String,
}

impl UmaClient {
    /// Create a new client against the public API
    ///
    /// # Errors
    ///
    /// Returns `UmaError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, UmaError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use uma_http_client::UmaClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = UmaClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> UmaClientBuilder {
        UmaClientBuilder::new()
    }

    /// The API root every route is built on, always ending in `/`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a champion at the given tier and rank
    ///
    /// # Arguments
    ///
    /// * `champion` - The champion's name (e.g. "Ghost"), percent-encoded on the wire
    /// * `tier` - The star tier, 1-6
    /// * `rank` - The rank within the tier, 1-5
    ///
    /// # Returns
    ///
    /// The champion's stats, abilities and metadata at that tier and rank.
    ///
    /// # Errors
    ///
    /// * `UmaError::Api` - The API answered with HTTP 500
    /// * `UmaError::ChampionLookup` - The champion was not found, the tier or
    ///   rank was rejected, or the request never got a response
    /// * `UmaError::MalformedPayload` - The API answered 200 without a valid champion
    ///
    /// # Example
    ///
    /// ```no_run
    /// use uma_http_client::UmaClient;
    ///
    /// # async fn run() -> Result<(), uma_http_client::UmaError> {
    /// let client = UmaClient::new()?;
    /// let champ = client.get_champion("Ghost", 6, 5).await?;
    /// println!("{} ({}): {} hp", champ.name, champ.class_tag, champ.hp);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_champion(
        &self,
        champion: &str,
        tier: u8,
        rank: u8,
    ) -> Result<Champion, UmaError> {
        let route = Route::new(&self.base_url, "champs/?").query(&[
            ("champ", QueryValue::Text(champion)),
            ("tier", QueryValue::Int(tier.into())),
            ("rank", QueryValue::Int(rank.into())),
        ]);

        self.fetch(Resource::Champion, route, Champion::from_slice)
            .await
    }

    /// Fetch a war map node by id
    ///
    /// # Arguments
    ///
    /// * `node` - The node id, appended to the path as `nodes/<node>`
    ///
    /// # Errors
    ///
    /// * `UmaError::Api` - The API answered with HTTP 500
    /// * `UmaError::NodeLookup` - Unknown node id, or no response
    /// * `UmaError::MalformedPayload` - The API answered 200 without a valid node
    ///
    /// # Example
    ///
    /// ```no_run
    /// use uma_http_client::{UmaClient, UmaError};
    ///
    /// # async fn run() -> Result<(), UmaError> {
    /// let client = UmaClient::new()?;
    /// match client.get_node(42).await {
    ///     Ok(node) => println!("{}: {}", node.node_name, node.node_info),
    ///     Err(UmaError::NodeLookup { message }) => println!("No such node: {:?}", message),
    ///     Err(e) => return Err(e),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_node(&self, node: u32) -> Result<Node, UmaError> {
        let route = Route::new(&self.base_url, "nodes/").positional(node);
        self.fetch(Resource::Node, route, Node::from_slice).await
    }

    /// Fetch the current state of a war tier
    ///
    /// # Arguments
    ///
    /// * `tier` - The war tier, appended to the path as `war/<tier>`
    ///
    /// # Returns
    ///
    /// The tier's node groupings, difficulty, multiplier and rank.
    ///
    /// # Errors
    ///
    /// * `UmaError::Api` - The API answered with HTTP 500
    /// * `UmaError::WarLookup` - Unknown tier, or no response
    /// * `UmaError::MalformedPayload` - The API answered 200 without a valid war tier
    pub async fn get_war(&self, tier: u32) -> Result<War, UmaError> {
        let route = Route::new(&self.base_url, "war/").positional(tier);
        self.fetch(Resource::War, route, War::from_slice).await
    }

    /// Close the client and release its connection pool
    ///
    /// Consumes the client, so no request can be issued afterwards.
    pub fn close(self) {
        tracing::debug!(base_url = %self.base_url, "closing client");
        drop(self.client);
    }

    /// Perform a GET on `route` and decode the body as the given resource
    async fn fetch<T>(
        &self,
        resource: Resource,
        route: Route,
        decode: fn(&[u8]) -> Result<T, serde_json::Error>,
    ) -> Result<T, UmaError> {
        tracing::debug!(%resource, url = route.url(), "requesting");

        let response = self.client.get(route.url()).send().await.map_err(|e| {
            tracing::debug!(%resource, error = %e, "request failed");
            resource.lookup_error(None)
        })?;

        let status = response.status();
        tracing::trace!(%resource, %status, "received response");

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            return Err(UmaError::Api);
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::debug!(%resource, error = %e, "reading body failed");
            resource.lookup_error(None)
        })?;

        if status != StatusCode::OK {
            let details = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_message);
            return Err(resource.lookup_error(details));
        }

        decode(&body).map_err(|source| UmaError::MalformedPayload { resource, source })
    }
}

/// Builder for configuring a UMA client
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use uma_http_client::UmaClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Default client
/// let client = UmaClient::builder().build()?;
///
/// // Custom base URL for testing
/// let client = UmaClient::builder()
///     .base_url("http://localhost:1234")?
///     .build()?;
///
/// // Full control over the transport
/// let client = UmaClient::builder()
///     .client_builder(
///         reqwest::Client::builder()
///             .connect_timeout(Duration::from_secs(5))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct UmaClientBuilder {
    base_url: Option<reqwest::Url>,
    timeout: Option<Duration>,
    client_builder: Option<reqwest::ClientBuilder>,
}

impl UmaClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL for the client
    ///
    /// A trailing `/` is added when missing, since routes are appended to it
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed, or if it carries a query
    /// or fragment that routes would be appended into.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, UmaError> {
        let url = url
            .into_url()
            .map_err(|e| UmaError::ClientInit(format!("Invalid base URL: {}", e)))?;
        if url.cannot_be_a_base() || url.query().is_some() || url.fragment().is_some() {
            return Err(UmaError::ClientInit(format!(
                "Base URL must be a plain path without query or fragment: {}",
                url
            )));
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// Set a total timeout for each request
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom HTTP client builder
    ///
    /// This allows full customization of the HTTP client (proxies, TLS, etc.).
    /// A timeout set through [`UmaClientBuilder::timeout`] is still applied on top.
    pub fn client_builder(mut self, builder: reqwest::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client, eagerly creating its connection pool
    ///
    /// # Errors
    ///
    /// Returns `UmaError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<UmaClient, UmaError> {
        let mut base_url = match self.base_url {
            Some(url) => url.to_string(),
            None => DEFAULT_BASE_URL.to_string(),
        };
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let mut builder = self.client_builder.unwrap_or_else(|| {
            reqwest::Client::builder()
                .use_rustls_tls()
                .user_agent(concat!("uma-http-client/", env!("CARGO_PKG_VERSION")))
        });
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| UmaError::ClientInit(e.to_string()))?;

        Ok(UmaClient { client, base_url })
    }
}
