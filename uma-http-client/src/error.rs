//! Error types for the UMA HTTP client

use std::fmt;
use thiserror::Error;

/// Message carried by [`UmaError::Api`]
pub const API_ERROR_MESSAGE: &str = "There is an error with the api. Please be patient";

/// The kinds of record the API serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Champion,
    Node,
    War,
}

impl Resource {
    /// Build the lookup error matching this resource
    pub fn lookup_error(self, message: Option<String>) -> UmaError {
        match self {
            Resource::Champion => UmaError::ChampionLookup { message },
            Resource::Node => UmaError::NodeLookup { message },
            Resource::War => UmaError::WarLookup { message },
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resource::Champion => "champion",
            Resource::Node => "node",
            Resource::War => "war",
        })
    }
}

/// Errors that can occur when using the UMA client
#[derive(Error, Debug)]
pub enum UmaError {
    /// The API answered with HTTP 500
    #[error("{}", API_ERROR_MESSAGE)]
    Api,

    /// Fetching a champion failed
    #[error("{}", .message.as_deref().unwrap_or("Champion lookup failed"))]
    ChampionLookup {
        /// Detail message supplied by the API, if any
        message: Option<String>,
    },

    /// Fetching a node failed
    #[error("{}", .message.as_deref().unwrap_or("Node lookup failed"))]
    NodeLookup {
        /// Detail message supplied by the API, if any
        message: Option<String>,
    },

    /// Fetching a war tier failed
    #[error("{}", .message.as_deref().unwrap_or("War lookup failed"))]
    WarLookup {
        /// Detail message supplied by the API, if any
        message: Option<String>,
    },

    /// A successful response did not hold a valid record
    #[error("Malformed {resource} payload: {source}")]
    MalformedPayload {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}

impl UmaError {
    /// The resource this error relates to, if any
    pub fn resource(&self) -> Option<Resource> {
        match self {
            UmaError::ChampionLookup { .. } => Some(Resource::Champion),
            UmaError::NodeLookup { .. } => Some(Resource::Node),
            UmaError::WarLookup { .. } => Some(Resource::War),
            UmaError::MalformedPayload { resource, .. } => Some(*resource),
            UmaError::Api | UmaError::ClientInit(_) => None,
        }
    }

    /// The message attached to this error, if any
    ///
    /// For lookup errors this is the API's `details` text; [`UmaError::Api`]
    /// always yields [`API_ERROR_MESSAGE`].
    pub fn message(&self) -> Option<&str> {
        match self {
            UmaError::Api => Some(API_ERROR_MESSAGE),
            UmaError::ChampionLookup { message }
            | UmaError::NodeLookup { message }
            | UmaError::WarLookup { message } => message.as_deref(),
            UmaError::ClientInit(message) => Some(message.as_str()),
            UmaError::MalformedPayload { .. } => None,
        }
    }
}
