//! Customer entity.

use serde::{Deserialize, Serialize};

use super::id::CustomerId;

/// A persisted customer.
///
/// On the wire the name fields use the short keys `fname` and `lname`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Customer {
    /// Server-assigned identifier.
    pub id: CustomerId,
    /// Given name.
    #[serde(rename = "fname")]
    pub first_name: String,
    /// Family name, if provided.
    #[serde(rename = "lname")]
    pub last_name: Option<String>,
    /// Email address, unique across all customers.
    pub email: String,
}

/// Payload for creating a customer.
///
/// Carries no `id`: identifiers are always generated server-side, and an `id`
/// key in the incoming JSON is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    #[serde(rename = "fname")]
    pub first_name: String,
    #[serde(rename = "lname", default)]
    pub last_name: Option<String>,
    pub email: String,
}

impl NewCustomer {
    /// Attach a server-assigned ID, producing the persisted shape.
    #[must_use]
    pub fn with_id(self, id: CustomerId) -> Customer {
        Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_customer_uses_short_name_keys() {
        let customer = Customer {
            id: "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap(),
            first_name: "Ada".to_string(),
            last_name: Some("Lovelace".to_string()),
            email: "ada@example.com".to_string(),
        };

        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
                "fname": "Ada",
                "lname": "Lovelace",
                "email": "ada@example.com",
            })
        );
    }

    #[test]
    fn test_missing_last_name_serializes_as_null() {
        let customer = NewCustomer {
            first_name: "Grace".to_string(),
            last_name: None,
            email: "grace@example.com".to_string(),
        }
        .with_id(CustomerId::generate());

        let value = serde_json::to_value(&customer).unwrap();
        assert!(value["lname"].is_null());
    }

    #[test]
    fn test_new_customer_ignores_client_id() {
        let parsed: NewCustomer = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "fname": "Ada",
            "email": "ada@example.com",
        }))
        .unwrap();

        assert_eq!(parsed.first_name, "Ada");
        assert_eq!(parsed.last_name, None);
    }

    #[test]
    fn test_new_customer_requires_first_name_and_email() {
        assert!(serde_json::from_value::<NewCustomer>(json!({"email": "a@b.c"})).is_err());
        assert!(serde_json::from_value::<NewCustomer>(json!({"fname": "Ada"})).is_err());
    }
}
