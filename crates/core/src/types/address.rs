//! Address entity.

use serde::{Deserialize, Serialize};

use super::id::{AddressId, CustomerId};

/// A persisted postal address belonging to exactly one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Address {
    pub id: AddressId,
    /// Owning customer.
    pub customer_id: CustomerId,
    /// Free-form label such as "home" or "work".
    pub nickname: Option<String>,
    pub street1: String,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
}

/// Payload for creating an address.
///
/// The owning customer comes from the request path, never from the body; any
/// `id` or `customer_id` keys in the incoming JSON are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAddress {
    #[serde(default)]
    pub nickname: Option<String>,
    pub street1: String,
    #[serde(default)]
    pub street2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
}

impl NewAddress {
    /// Attach server-assigned IDs, producing the persisted shape.
    #[must_use]
    pub fn with_ids(self, id: AddressId, customer_id: CustomerId) -> Address {
        Address {
            id,
            customer_id,
            nickname: self.nickname,
            street1: self.street1,
            street2: self.street2,
            city: self.city,
            state: self.state,
            zipcode: self.zipcode,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_body_customer_id_is_ignored() {
        let path_customer = CustomerId::generate();
        let body: NewAddress = serde_json::from_value(json!({
            "customer_id": "00000000-0000-0000-0000-000000000000",
            "nickname": "home",
            "street1": "12 St James's Square",
            "city": "London",
        }))
        .unwrap();

        let address = body.with_ids(AddressId::generate(), path_customer);
        assert_eq!(address.customer_id, path_customer);
        assert_eq!(address.nickname.as_deref(), Some("home"));
        assert_eq!(address.street2, None);
    }

    #[test]
    fn test_street1_is_required() {
        let result = serde_json::from_value::<NewAddress>(json!({"city": "London"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_address_wire_keys() {
        let address = NewAddress {
            street1: "1 Main St".to_string(),
            zipcode: Some("02134".to_string()),
            ..NewAddress::default()
        }
        .with_ids(AddressId::generate(), CustomerId::generate());

        let value = serde_json::to_value(&address).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "city",
                "customer_id",
                "id",
                "nickname",
                "state",
                "street1",
                "street2",
                "zipcode"
            ]
        );
        assert_eq!(value["zipcode"], "02134");
    }
}
