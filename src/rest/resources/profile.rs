//! Store profile resource.
//!
//! This module provides the [`Profile`] resource and its [`ProfileApi`]
//! endpoint. The profile is a singleton: it has no id and is always read from
//! and written to `profile`.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut profile = client.profile().get().await?;
//! println!("Country: {:?}", profile.country_code());
//!
//! profile.set_country_code("US");
//! profile.save(&client).await?;
//! ```

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{Client, Transport};
use crate::rest::resource::{readers, resource_type, writers};
use crate::rest::resources::listing;
use crate::rest::{FieldSpec, Listing, Resource, ResourceError, ResourceSchema};

static PROFILE_SCHEMA: ResourceSchema = ResourceSchema {
    root: "profile",
    id_key: None,
    fields: &[
        FieldSpec::writable("company", "company"),
        FieldSpec::writable("city", "city"),
        FieldSpec::writable("country_code", "countryCode"),
        FieldSpec::writable("state_or_province_code", "stateOrProvinceCode"),
        FieldSpec::writable("currency", "currency"),
        FieldSpec::writable("currency_prefix", "currencyPrefix"),
        FieldSpec::writable("taxes", "taxes"),
    ],
};

resource_type!(
    /// The store profile: company details, location, currency and taxes.
    Profile, PROFILE_SCHEMA
);

readers!(Profile {
    /// Company details as returned by Ecwid.
    company: Value,
    city: String,
    /// Two-letter ISO country code.
    country_code: String,
    state_or_province_code: String,
    /// Three-letter ISO currency code.
    currency: String,
    /// Symbol printed before prices (e.g. `$`).
    currency_prefix: String,
    /// Configured taxes.
    taxes: Vec<Value>,
});

writers!(Profile {
    company: Value,
    city: String,
    country_code: String,
    state_or_province_code: String,
    currency: String,
    currency_prefix: String,
    taxes: Vec<Value>,
});

impl Profile {
    /// Alias for [`country_code`](Self::country_code).
    #[must_use]
    pub fn code(&self) -> Option<String> {
        self.country_code()
    }
}

/// Endpoint for the store profile.
#[derive(Debug)]
pub struct ProfileApi<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> ProfileApi<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Fetches the store profile.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails and
    /// [`ResourceError::MalformedResponse`] if the body is not an object.
    pub async fn get(&self) -> Result<Profile, ResourceError> {
        let body = self.client.get(PROFILE_SCHEMA.root, None).await?;
        Profile::from_value(body)
    }

    /// Lists profiles through the paginated listing contract.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPagination`] for a bad `page` or `limit`.
    pub fn all(
        &self,
        filters: HashMap<String, String>,
    ) -> Result<Listing<'a, T, Profile>, ResourceError> {
        listing(self.client, filters)
    }
}
