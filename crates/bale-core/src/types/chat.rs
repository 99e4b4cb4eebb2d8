use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    domain::ChatId,
    payload::{self, FromPayload},
    port::ApiHandle,
    Result,
};

/// Conversation a message belongs to (private chat, group or channel).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chat {
    pub id: ChatId,
    /// Server key `type`; renamed because `type` is reserved in Rust.
    pub kind: String,
    pub title: Option<String>,
    pub username: Option<String>,
}

impl FromPayload for Chat {
    const ENTITY: &'static str = "chat";

    fn from_map(map: &mut Map<String, Value>, _api: &ApiHandle) -> Result<Self> {
        Ok(Self {
            id: ChatId(payload::req_i64(Self::ENTITY, map, "id")?),
            kind: payload::req_str(Self::ENTITY, map, "type")?,
            title: payload::opt_str(Self::ENTITY, map, "title")?,
            username: payload::opt_str(Self::ENTITY, map, "username")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::port::testing;

    #[test]
    fn renames_the_type_key() {
        let api = testing::noop();
        let chat = Chat::decode(
            Some(json!({"id": -99, "type": "group", "title": "devs"})),
            &api,
        )
        .unwrap()
        .unwrap();
        assert_eq!(chat.id, ChatId(-99));
        assert_eq!(chat.kind, "group");
        assert_eq!(chat.title.as_deref(), Some("devs"));
        assert_eq!(chat.username, None);
    }
}
