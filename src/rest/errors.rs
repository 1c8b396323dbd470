//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for entity and listing operations,
//! extending the transport-level [`HttpError`] with schema violations and
//! malformed listing payloads.
//!
//! # Error Handling
//!
//! - [`ResourceError::UnknownField`]: a field was read or written that the
//!   resource does not declare. This is a programming error and is never
//!   retried.
//! - [`ResourceError::InvalidPagination`]: a `page` or `limit` filter that is
//!   not a positive integer, or a `page` whose offset overflows `u64`.
//! - [`ResourceError::PathResolutionFailed`]: deleting a record that has no id,
//!   or creating one that already has an id or belongs to a singleton.
//! - [`ResourceError::MalformedResponse`]: a listing body without `total` or
//!   `items`.
//! - [`ResourceError::Http`]: the server rejected the request, or accepted it
//!   with an `updateCount` other than one.
//!
//! # Example
//!
//! ```rust,ignore
//! use ecwid_api::rest::ResourceError;
//!
//! match profile.save(&client).await {
//!     Ok(()) => println!("saved"),
//!     Err(e) if e.is_semantic_failure() => println!("ambiguous update: {e}"),
//!     Err(e) if e.is_http_failure() => println!("rejected: {e}"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

use std::fmt;

use crate::clients::HttpError;
use thiserror::Error;

/// Whether a field was being read or written when it was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldAccess {
    /// The field was read.
    Read,
    /// The field was written.
    Write,
}

impl fmt::Display for FieldAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("readable"),
            Self::Write => f.write_str("writable"),
        }
    }
}

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use ecwid_api::rest::{FieldAccess, ResourceError};
///
/// let error = ResourceError::UnknownField {
///     resource: "profile",
///     field: "color".to_string(),
///     access: FieldAccess::Write,
/// };
/// assert_eq!(error.to_string(), "profile has no writable field 'color'");
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The field is not declared for this access on the resource.
    #[error("{resource} has no {access} field '{field}'")]
    UnknownField {
        /// The URL root of the resource (e.g., "profile", "orders").
        resource: &'static str,
        /// The local field name that was requested.
        field: String,
        /// Whether the field was being read or written.
        access: FieldAccess,
    },

    /// A pagination filter could not be used.
    #[error("Invalid pagination parameter {name}={value}: expected a positive integer with an offset that fits in u64")]
    InvalidPagination {
        /// The filter name (`page` or `limit`).
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// List parameters could not be turned into a query string.
    #[error("Failed to serialize params: {0}")]
    InvalidParams(#[source] serde_json::Error),

    /// The record's id does not allow the operation: `delete` needs an id,
    /// `create` needs a resource with ids and a record without one.
    #[error("Cannot resolve path for {resource}::{operation}")]
    PathResolutionFailed {
        /// The URL root of the resource.
        resource: &'static str,
        /// The operation being attempted ("delete" or "create").
        operation: &'static str,
    },

    /// The server returned a body this crate cannot interpret.
    #[error("Malformed response from {resource}: {message}")]
    MalformedResponse {
        /// The path or resource the response came from.
        resource: String,
        /// What was wrong with the body.
        message: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns `true` when the server rejected the request.
    #[must_use]
    pub const fn is_http_failure(&self) -> bool {
        matches!(self, Self::Http(HttpError::Response(_)))
    }

    /// Returns `true` when the server accepted a mutation but reported an
    /// `updateCount` other than one.
    #[must_use]
    pub const fn is_semantic_failure(&self) -> bool {
        matches!(self, Self::Http(HttpError::Update(_)))
    }

    /// Returns the HTTP status code for rejected requests.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(HttpError::Response(e)) => Some(e.code),
            _ => None,
        }
    }

    pub(crate) fn malformed(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            resource: resource.into(),
            message: message.into(),
        }
    }
}
