//! Classification of completed responses.
//!
//! Every response that comes back from a [`Transport`](crate::clients::Transport)
//! is turned into exactly one [`ResponseOutcome`]. Only `Success` bodies flow
//! onward; the other variants end the calling operation with an error.
//!
//! The Ecwid API sometimes answers a mutation with `200 OK` while the body says
//! `"updateCount": 0` (nothing matched) or a number above one. Those responses
//! are [`ResponseOutcome::SemanticFailure`], kept distinct from rejected
//! requests so callers can tell "request rejected" apart from "request
//! ambiguous".
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::clients::{HttpResponse, ResponseOutcome};
//! use serde_json::json;
//!
//! let response = HttpResponse::new(200, "https://app.ecwid.com/api/v3/1/profile", json!({"updateCount": 0}));
//! let outcome = ResponseOutcome::interpret(response);
//! assert!(matches!(outcome, ResponseOutcome::SemanticFailure(_)));
//! ```

use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError, UpdateCountError, EXPECTED_UPDATE_COUNT};
use crate::clients::HttpResponse;

/// Key of the update counter in mutation responses.
pub const UPDATE_COUNT_KEY: &str = "updateCount";

/// The classification of one completed transport call.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// The call succeeded; carries the parsed body.
    Success(Value),
    /// The server rejected the request.
    HttpFailure(HttpResponseError),
    /// The server accepted the request but did not update exactly one record.
    SemanticFailure(UpdateCountError),
}

impl ResponseOutcome {
    /// Classifies a response using its status code as the transport-level
    /// success flag.
    #[must_use]
    pub fn interpret(response: HttpResponse) -> Self {
        let succeeded = response.is_ok();
        Self::classify(
            response.code,
            succeeded,
            response.body,
            response.url,
            response.reason,
        )
    }

    /// Classifies a completed call from its parts.
    ///
    /// - `succeeded == false` gives `HttpFailure`, with the body kept verbatim.
    /// - A JSON object body whose `updateCount` is present and not `1` gives
    ///   `SemanticFailure`.
    /// - Anything else is `Success`.
    ///
    /// Reads never carry `updateCount`, so running this on them is a no-op
    /// beyond the status check.
    #[must_use]
    pub fn classify(
        code: u16,
        succeeded: bool,
        body: Value,
        url: String,
        reason: Option<String>,
    ) -> Self {
        if !succeeded {
            return Self::HttpFailure(HttpResponseError {
                code,
                reason,
                url,
                body: HttpResponse::render_body(&body),
            });
        }

        if let Some(actual) = unexpected_update_count(&body) {
            tracing::warn!(%url, %actual, "Ecwid reported an unexpected update count");
            return Self::SemanticFailure(UpdateCountError {
                expected: EXPECTED_UPDATE_COUNT,
                actual,
                url,
                body: HttpResponse::render_body(&body),
            });
        }

        Self::Success(body)
    }

    /// Returns `true` for [`ResponseOutcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Converts the outcome into the body or the matching [`HttpError`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for `HttpFailure` and
    /// [`HttpError::Update`] for `SemanticFailure`.
    pub fn into_result(self) -> Result<Value, HttpError> {
        match self {
            Self::Success(body) => Ok(body),
            Self::HttpFailure(error) => Err(HttpError::Response(error)),
            Self::SemanticFailure(error) => Err(HttpError::Update(error)),
        }
    }
}

fn unexpected_update_count(body: &Value) -> Option<Value> {
    let count = body.as_object()?.get(UPDATE_COUNT_KEY)?;
    if count.is_null() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let expected = EXPECTED_UPDATE_COUNT as f64;
    if count.as_f64() == Some(expected) {
        None
    } else {
        Some(count.clone())
    }
}
