use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    domain::UserId,
    payload::{self, FromPayload},
    port::ApiHandle,
    Result,
};

/// Sender of a message or initiator of a query.
///
/// Referenced by other entities, never owned across updates: every decoded
/// update carries its own freshly built copy.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl FromPayload for User {
    const ENTITY: &'static str = "user";

    fn from_map(map: &mut Map<String, Value>, _api: &ApiHandle) -> Result<Self> {
        Ok(Self {
            id: UserId(payload::req_i64(Self::ENTITY, map, "id")?),
            first_name: payload::req_str(Self::ENTITY, map, "first_name")?,
            last_name: payload::opt_str(Self::ENTITY, map, "last_name")?,
            username: payload::opt_str(Self::ENTITY, map, "username")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{port::testing, Error};

    #[test]
    fn decodes_full_and_minimal_users() {
        let api = testing::noop();

        let full = User::decode(
            Some(json!({
                "id": 1234,
                "first_name": "Kian",
                "last_name": "A",
                "username": "kian"
            })),
            &api,
        )
        .unwrap()
        .unwrap();
        assert_eq!(full.id, UserId(1234));
        assert_eq!(full.username.as_deref(), Some("kian"));

        let minimal = User::decode(Some(json!({"id": 5, "first_name": "N"})), &api)
            .unwrap()
            .unwrap();
        assert_eq!(minimal.last_name, None);
        assert_eq!(minimal.username, None);
    }

    #[test]
    fn missing_id_is_a_payload_error() {
        let api = testing::noop();
        let err = User::decode(Some(json!({"first_name": "N"})), &api).unwrap_err();
        assert!(matches!(err, Error::Payload { entity: "user", .. }));
    }
}
