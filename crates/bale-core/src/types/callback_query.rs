use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    payload::{self, FromPayload},
    port::ApiHandle,
    types::{Message, User},
    Result,
};

/// An incoming callback query from an inline-keyboard button.
///
/// Retains the API handle it was decoded with so [`CallbackQuery::answer`]
/// can reach the platform without the caller re-supplying a client.
#[derive(Clone, Serialize)]
pub struct CallbackQuery {
    /// Unique identifier for this query.
    pub id: String,
    /// Server key `from`.
    pub from_user: User,
    /// Message with the originating button. Content and date may be absent
    /// when the message is too old.
    pub message: Option<Message>,
    /// Set when the query originates from an inline-mode message.
    pub inline_message_id: Option<String>,
    /// Opaque payload attached to the pressed button. The originating message
    /// may no longer contain a button with this data.
    pub data: Option<String>,
    #[serde(skip)]
    api: ApiHandle,
}

impl CallbackQuery {
    /// Alias for [`CallbackQuery::from_user`].
    pub fn user(&self) -> &User {
        &self.from_user
    }

    /// Acknowledge the query: clears the client-side loading state and
    /// optionally shows `text` as a toast, or as an alert when `show_alert`.
    ///
    /// Issues exactly one outward call; transport failures propagate
    /// unchanged from the port.
    pub async fn answer(
        &self,
        text: Option<&str>,
        show_alert: bool,
        cache_time: Option<u32>,
    ) -> Result<()> {
        self.api
            .answer_callback_query(&self.id, text, show_alert, cache_time)
            .await
    }
}

impl FromPayload for CallbackQuery {
    const ENTITY: &'static str = "callback_query";

    fn from_map(map: &mut Map<String, Value>, api: &ApiHandle) -> Result<Self> {
        Ok(Self {
            id: payload::req_str(Self::ENTITY, map, "id")?,
            from_user: payload::req_entity(Self::ENTITY, map, "from", api)?,
            message: Message::decode(payload::take(map, "message"), api)?,
            inline_message_id: payload::opt_str(Self::ENTITY, map, "inline_message_id")?,
            data: payload::opt_str(Self::ENTITY, map, "data")?,
            api: Arc::clone(api),
        })
    }
}

// The retained handle is not part of the query's identity; equality and Debug
// cover the data fields only.
impl PartialEq for CallbackQuery {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.from_user == other.from_user
            && self.message == other.message
            && self.inline_message_id == other.inline_message_id
            && self.data == other.data
    }
}

impl fmt::Debug for CallbackQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackQuery")
            .field("id", &self.id)
            .field("from_user", &self.from_user)
            .field("message", &self.message)
            .field("inline_message_id", &self.inline_message_id)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
