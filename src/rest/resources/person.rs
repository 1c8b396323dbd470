//! Person resource: the billing and shipping contacts of an order.

use crate::rest::resource::{readers, resource_type, writers};
use crate::rest::{FieldSpec, ResourceSchema};

static PERSON_SCHEMA: ResourceSchema = ResourceSchema {
    root: "persons",
    id_key: None,
    fields: &[
        FieldSpec::read_only("name", "name"),
        FieldSpec::read_only("company_name", "companyName"),
        FieldSpec::read_only("street", "street"),
        FieldSpec::read_only("city", "city"),
        FieldSpec::writable("country_code", "countryCode"),
        FieldSpec::read_only("country_name", "countryName"),
        FieldSpec::read_only("postal_code", "postalCode"),
        FieldSpec::read_only("state_or_province_code", "stateOrProvinceCode"),
        FieldSpec::read_only("state_or_province_name", "stateOrProvinceName"),
        FieldSpec::read_only("phone", "phone"),
    ],
};

resource_type!(
    /// A contact person attached to an order.
    Person, PERSON_SCHEMA
);

readers!(Person {
    name: String,
    company_name: String,
    street: String,
    city: String,
    country_code: String,
    country_name: String,
    postal_code: String,
    state_or_province_code: String,
    state_or_province_name: String,
    phone: String,
});

writers!(Person {
    country_code: String,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{FieldAccess, Resource, ResourceError};
    use serde_json::json;

    #[test]
    fn test_reads_address() {
        let person = Person::from_value(json!({
            "name": "Ada Lovelace",
            "street": "1 Main St",
            "countryCode": "GB",
            "postalCode": "N1"
        }))
        .unwrap();
        assert_eq!(person.name(), Some("Ada Lovelace".to_string()));
        assert_eq!(person.postal_code(), Some("N1".to_string()));
        assert_eq!(person.phone(), None);
    }

    #[test]
    fn test_only_country_code_is_writable() {
        assert_eq!(
            PERSON_SCHEMA.writable_fields().collect::<Vec<_>>(),
            vec!["country_code"]
        );

        let mut person = Person::blank();
        person.set_country_code("US");
        assert_eq!(person.country_code(), Some("US".to_string()));

        let err = person.write("city", "Paris").unwrap_err();
        assert!(matches!(
            err,
            ResourceError::UnknownField {
                resource: "persons",
                access: FieldAccess::Write,
                ..
            }
        ));
    }
}
