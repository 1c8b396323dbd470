//! Resource trait and accessor generation.
//!
//! This module defines the [`Resource`] trait, implemented by every typed
//! Ecwid record (Profile, Order, Product, Category, Person). A resource is a
//! thin wrapper around an [`Entity`] tied to one static [`ResourceSchema`];
//! it derefs to the entity, so `save`, `delete`, `read` and `write` are
//! available on every resource.
//!
//! # Implementing a Resource
//!
//! Inside this crate a resource is declared in three steps:
//!
//! 1. A `static` [`ResourceSchema`] listing its fields
//! 2. `resource_type!` to create the wrapper and implement [`Resource`]
//! 3. `readers!` and `writers!` to generate typed accessors
//!
//! ```rust,ignore
//! static WIDGET_SCHEMA: ResourceSchema = ResourceSchema {
//!     root: "widgets",
//!     id_key: Some("id"),
//!     fields: &[
//!         FieldSpec::read_only("id", "id"),
//!         FieldSpec::writable("display_name", "displayName"),
//!     ],
//! };
//!
//! resource_type!(
//!     /// A widget.
//!     Widget, WIDGET_SCHEMA
//! );
//!
//! readers!(Widget {
//!     display_name: String,
//! });
//!
//! writers!(Widget {
//!     display_name: String,
//! });
//! ```

use std::fmt::Display;

use serde_json::{Map, Value};

use crate::clients::{Client, Transport};
use crate::rest::{Entity, ResourceError, ResourceSchema};

/// A typed Ecwid record backed by an [`Entity`].
#[allow(async_fn_in_trait)]
pub trait Resource: Sized {
    /// The resource name used in messages (e.g., "Product").
    const NAME: &'static str;

    /// Returns the field table shared by every record of this type.
    fn schema() -> &'static ResourceSchema;

    /// Wraps an entity created with this type's schema.
    fn from_entity(entity: Entity) -> Self;

    /// Creates a clean record from raw API attributes.
    #[must_use]
    fn from_attributes(attributes: Map<String, Value>) -> Self {
        Self::from_entity(Entity::from_attributes(Self::schema(), attributes))
    }

    /// Creates a clean record from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedResponse`] if `value` is not an object.
    fn from_value(value: Value) -> Result<Self, ResourceError> {
        Entity::from_value(Self::schema(), value).map(Self::from_entity)
    }

    /// Creates an empty record, to be filled with setters and saved.
    #[must_use]
    fn blank() -> Self {
        Self::from_entity(Entity::new(Self::schema()))
    }

    /// Fetches one record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails and
    /// [`ResourceError::MalformedResponse`] if the body is not an object.
    async fn find<T: Transport>(
        client: &Client<T>,
        id: impl Display,
    ) -> Result<Self, ResourceError> {
        let path = format!("{}/{id}", Self::schema().root);
        let body = client.get(&path, None).await?;
        Self::from_value(body)
    }
}

/// Declares a resource wrapper around [`Entity`] and implements [`Resource`].
macro_rules! resource_type {
    ($(#[$meta:meta])* $name:ident, $schema:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name($crate::rest::Entity);

        impl $crate::rest::Resource for $name {
            const NAME: &'static str = stringify!($name);

            fn schema() -> &'static $crate::rest::ResourceSchema {
                &$schema
            }

            fn from_entity(entity: $crate::rest::Entity) -> Self {
                debug_assert_eq!(entity.schema().root, $schema.root);
                Self(entity)
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::rest::Entity;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}

/// Generates `fn field(&self) -> Option<Type>` for declared fields.
macro_rules! readers {
    ($name:ident { $($(#[$meta:meta])* $field:ident: $ty:ty),* $(,)? }) => {
        impl $name {
            #[cfg(test)]
            pub(crate) const READER_FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

            $(
                $(#[$meta])*
                #[must_use]
                pub fn $field(&self) -> Option<$ty> {
                    self.value_as(stringify!($field))
                }
            )*
        }
    };
}

/// Generates `fn set_field(&mut self, value) -> &mut Self` for writable fields.
macro_rules! writers {
    ($name:ident { $($field:ident: $ty:ty),* $(,)? }) => {
        $crate::paste::paste! {
            impl $name {
                #[cfg(test)]
                pub(crate) const SETTER_FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

                $(
                    #[doc = concat!("Sets `", stringify!($field), "` and marks it for the next save.")]
                    pub fn [<set_ $field>](&mut self, value: impl Into<$ty>) -> &mut Self {
                        let value: $ty = value.into();
                        self.assign(stringify!($field), ::serde_json::Value::from(value));
                        self
                    }
                )*
            }
        }
    };
}

pub(crate) use readers;
pub(crate) use resource_type;
pub(crate) use writers;
