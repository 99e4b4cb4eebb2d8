use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    domain::MessageId,
    errors::Error,
    payload::{self, FromPayload},
    port::ApiHandle,
    types::{Chat, User},
    Result,
};

/// A chat message.
///
/// Inside a callback query this may be a stale reference: the server does not
/// guarantee content or date there, so both stay optional.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Message {
    pub message_id: MessageId,
    pub chat: Chat,
    /// Server key `from`. Absent for channel posts.
    pub from_user: Option<User>,
    /// Unix send time. Absent on stale references.
    pub date: Option<DateTime<Utc>>,
    pub text: Option<String>,
    pub caption: Option<String>,
}

impl FromPayload for Message {
    const ENTITY: &'static str = "message";

    fn from_map(map: &mut Map<String, Value>, api: &ApiHandle) -> Result<Self> {
        Ok(Self {
            message_id: MessageId(payload::req_i64(Self::ENTITY, map, "message_id")?),
            chat: payload::req_entity(Self::ENTITY, map, "chat", api)?,
            from_user: User::decode(payload::take(map, "from"), api)?,
            date: payload::opt_i64(Self::ENTITY, map, "date")?
                .map(decode_date)
                .transpose()?,
            text: payload::opt_str(Self::ENTITY, map, "text")?,
            caption: payload::opt_str(Self::ENTITY, map, "caption")?,
        })
    }
}

fn decode_date(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(|| Error::Payload {
        entity: Message::ENTITY,
        detail: format!("field `date`: timestamp {secs} out of range"),
    })
}
