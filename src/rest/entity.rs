//! Attribute-backed resource records with dirty tracking.
//!
//! This module provides [`Entity`], the record type underlying every Ecwid
//! resource. An entity keeps the attributes it was loaded with (under their
//! upstream keys), remembers which writable fields were changed locally, and
//! sends only those fields when saved.
//!
//! # How It Works
//!
//! Field access goes through the entity's [`ResourceSchema`]: reading an
//! undeclared field, or writing a field that is not writable, fails with
//! [`ResourceError::UnknownField`]. A successful write records the field in
//! the dirty set without touching the network. [`Entity::save`] serializes the
//! dirty set and clears it only after the server confirms the update;
//! [`Entity::create`] adds a new record and keeps the id the server assigns.
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::rest::{Entity, FieldSpec, ResourceSchema};
//! use serde_json::json;
//!
//! static CITY: ResourceSchema = ResourceSchema {
//!     root: "cities",
//!     id_key: Some("id"),
//!     fields: &[
//!         FieldSpec::read_only("id", "id"),
//!         FieldSpec::writable("country_code", "countryCode"),
//!     ],
//! };
//!
//! let mut city = Entity::from_value(&CITY, json!({"id": 7, "countryCode": "FR"})).unwrap();
//! assert!(!city.is_dirty());
//!
//! city.write("country_code", "US").unwrap();
//! assert_eq!(city.read("country_code").unwrap(), Some(&json!("US")));
//! assert_eq!(city.changed_fields(), json!({"countryCode": "US"}));
//! assert_eq!(city.path(), "cities/7");
//!
//! assert!(city.write("id", 8).is_err());
//! ```

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::clients::{Client, Transport};
use crate::rest::{FieldAccess, ResourceError, ResourceSchema};

/// One remote resource record.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    schema: &'static ResourceSchema,
    attributes: Map<String, Value>,
    dirty: BTreeSet<&'static str>,
}

impl Entity {
    /// Creates an entity with no attributes.
    #[must_use]
    pub fn new(schema: &'static ResourceSchema) -> Self {
        Self::from_attributes(schema, Map::new())
    }

    /// Creates a clean entity from attributes received from the API.
    #[must_use]
    pub const fn from_attributes(
        schema: &'static ResourceSchema,
        attributes: Map<String, Value>,
    ) -> Self {
        Self {
            schema,
            attributes,
            dirty: BTreeSet::new(),
        }
    }

    /// Creates a clean entity from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedResponse`] if `value` is not an object.
    pub fn from_value(schema: &'static ResourceSchema, value: Value) -> Result<Self, ResourceError> {
        match value {
            Value::Object(attributes) => Ok(Self::from_attributes(schema, attributes)),
            other => Err(ResourceError::malformed(
                schema.root,
                format!("expected a JSON object, got {other}"),
            )),
        }
    }

    /// Returns the schema this entity was created with.
    #[must_use]
    pub const fn schema(&self) -> &'static ResourceSchema {
        self.schema
    }

    /// Returns the resource type, which is also its URL root.
    #[must_use]
    pub const fn resource_type(&self) -> &'static str {
        self.schema.root
    }

    /// Returns the identifier, if the resource has one and it is set.
    ///
    /// Numeric ids are rendered in decimal.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        let key = self.schema.id_key?;
        match self.attributes.get(key)? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// Returns every attribute under its upstream key.
    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Returns the current value of a declared field.
    ///
    /// Missing and `null` attributes read as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownField`] if the field is not declared.
    pub fn read(&self, field: &str) -> Result<Option<&Value>, ResourceError> {
        let spec = self
            .schema
            .field(field)
            .ok_or_else(|| self.unknown_field(field, FieldAccess::Read))?;
        Ok(self.attributes.get(spec.upstream).filter(|v| !v.is_null()))
    }

    /// Reads a declared field and converts it to `V`.
    ///
    /// Returns `None` when the field is undeclared, absent, or of another type.
    #[must_use]
    pub fn value_as<V: DeserializeOwned>(&self, field: &str) -> Option<V> {
        let value = self.read(field).ok().flatten()?;
        V::deserialize(value).ok()
    }

    /// Sets a writable field and marks it dirty.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownField`] if the field is not writable.
    pub fn write(&mut self, field: &str, value: impl Into<Value>) -> Result<(), ResourceError> {
        let spec = self
            .schema
            .writable_field(field)
            .ok_or_else(|| self.unknown_field(field, FieldAccess::Write))?;
        self.attributes.insert(spec.upstream.to_string(), value.into());
        self.dirty.insert(spec.local);
        Ok(())
    }

    /// Writes a field the caller knows to be writable.
    ///
    /// Generated setters are checked against their schemas in tests.
    pub(crate) fn assign(&mut self, field: &'static str, value: Value) {
        let written = self.write(field, value);
        debug_assert!(
            written.is_ok(),
            "{field} is not writable on {}",
            self.schema.root
        );
        if let Err(error) = written {
            tracing::error!(%error, "Dropped a write from a generated setter");
        }
    }

    /// Returns `true` if any field was written since load or the last save.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Returns the local names of the dirty fields, in name order.
    pub fn dirty_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dirty.iter().copied()
    }

    /// Returns the dirty fields as a JSON object keyed by upstream name.
    #[must_use]
    pub fn changed_fields(&self) -> Value {
        let changes = self
            .dirty
            .iter()
            .filter_map(|local| self.schema.upstream_key(local))
            .map(|key| {
                let value = self.attributes.get(key).cloned().unwrap_or(Value::Null);
                (key.to_string(), value)
            })
            .collect();
        Value::Object(changes)
    }

    /// Forgets all local changes as unsaved.
    pub fn mark_clean(&mut self) {
        self.dirty.clear();
    }

    /// Returns the path of this record relative to the store URL.
    ///
    /// `root/id` when the record has an id, otherwise the root.
    #[must_use]
    pub fn path(&self) -> String {
        match self.id() {
            Some(id) => format!("{}/{id}", self.schema.root),
            None => self.schema.root.to_string(),
        }
    }

    /// Persists the dirty fields with a PUT to [`path`](Self::path).
    ///
    /// Nothing is sent when no field is dirty. The dirty set is cleared only
    /// when the server confirms the update; on any failure the written values
    /// and the dirty set are left as they were.
    ///
    /// New records are added with [`create`](Self::create) instead.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] with [`HttpError::Response`] if the
    /// request was rejected, or with [`HttpError::Update`] if the server
    /// reported an `updateCount` other than one.
    ///
    /// [`HttpError::Response`]: crate::clients::HttpError::Response
    /// [`HttpError::Update`]: crate::clients::HttpError::Update
    pub async fn save<T: Transport>(&mut self, client: &Client<T>) -> Result<(), ResourceError> {
        if !self.is_dirty() {
            return Ok(());
        }

        client.put(&self.path(), self.changed_fields(), None).await?;
        self.mark_clean();
        Ok(())
    }

    /// Adds this record to the store with a POST to the resource root.
    ///
    /// The dirty fields form the body. The id returned by the server is kept,
    /// so later [`save`](Self::save) and [`delete`](Self::delete) calls target
    /// the new record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// id field or the record already has an id, and [`ResourceError::Http`]
    /// if the request fails.
    pub async fn create<T: Transport>(&mut self, client: &Client<T>) -> Result<(), ResourceError> {
        let Some(id_key) = self.schema.id_key.filter(|_| self.id().is_none()) else {
            return Err(ResourceError::PathResolutionFailed {
                resource: self.schema.root,
                operation: "create",
            });
        };

        let created = client
            .post(self.schema.root, self.changed_fields(), None)
            .await?;
        if let Some(id) = created.get(id_key).filter(|id| !id.is_null()) {
            self.attributes.insert(id_key.to_string(), id.clone());
        }
        self.mark_clean();
        Ok(())
    }

    /// Deletes this record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the record has no id,
    /// and [`ResourceError::Http`] if the request fails.
    pub async fn delete<T: Transport>(&self, client: &Client<T>) -> Result<(), ResourceError> {
        if self.id().is_none() {
            return Err(ResourceError::PathResolutionFailed {
                resource: self.schema.root,
                operation: "delete",
            });
        }
        client.delete(&self.path(), None).await?;
        Ok(())
    }

    fn unknown_field(&self, field: &str, access: FieldAccess) -> ResourceError {
        ResourceError::UnknownField {
            resource: self.schema.root,
            field: field.to_string(),
            access,
        }
    }
}
