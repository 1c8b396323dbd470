//! Static field tables for resource types.
//!
//! Every resource type declares one [`ResourceSchema`]: its URL root, the key
//! that holds its identifier (if any), and a table mapping local snake_case
//! accessor names to upstream camelCase keys. Schemas are `'static` and shared
//! by reference between every entity of that type.
//!
//! # Example
//!
//! ```rust
//! use ecwid_api::rest::{FieldSpec, ResourceSchema};
//!
//! static WIDGET: ResourceSchema = ResourceSchema {
//!     root: "widgets",
//!     id_key: Some("id"),
//!     fields: &[
//!         FieldSpec::read_only("id", "id"),
//!         FieldSpec::writable("display_name", "displayName"),
//!     ],
//! };
//!
//! assert_eq!(WIDGET.upstream_key("display_name"), Some("displayName"));
//! assert_eq!(WIDGET.local_name("displayName"), Some("display_name"));
//! assert!(WIDGET.writable_field("id").is_none());
//! ```

/// One declared field of a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Accessor name used in Rust code.
    pub local: &'static str,
    /// Key used on the wire.
    pub upstream: &'static str,
    /// Whether the field may be written and saved.
    pub writable: bool,
}

impl FieldSpec {
    /// Declares a field that can only be read.
    #[must_use]
    pub const fn read_only(local: &'static str, upstream: &'static str) -> Self {
        Self {
            local,
            upstream,
            writable: false,
        }
    }

    /// Declares a field that can be read and written.
    #[must_use]
    pub const fn writable(local: &'static str, upstream: &'static str) -> Self {
        Self {
            local,
            upstream,
            writable: true,
        }
    }
}

/// The immutable description of one resource type.
#[derive(Debug, PartialEq, Eq)]
pub struct ResourceSchema {
    /// URL root segment (e.g. `"profile"`, `"orders"`).
    pub root: &'static str,
    /// Upstream key of the identifier, or `None` for singleton resources.
    pub id_key: Option<&'static str>,
    /// Declared fields. Every writable field is also readable.
    pub fields: &'static [FieldSpec],
}

impl ResourceSchema {
    /// Looks up a readable field by its local name.
    #[must_use]
    pub fn field(&self, local: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.local == local)
    }

    /// Looks up a writable field by its local name.
    #[must_use]
    pub fn writable_field(&self, local: &str) -> Option<&'static FieldSpec> {
        self.field(local).filter(|spec| spec.writable)
    }

    /// Translates a local name to its upstream key.
    #[must_use]
    pub fn upstream_key(&self, local: &str) -> Option<&'static str> {
        self.field(local).map(|spec| spec.upstream)
    }

    /// Translates an upstream key back to its local name.
    #[must_use]
    pub fn local_name(&self, upstream: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|spec| spec.upstream == upstream)
            .map(|spec| spec.local)
    }

    /// Iterates the local names of all writable fields.
    pub fn writable_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|spec| spec.writable)
            .map(|spec| spec.local)
    }
}
