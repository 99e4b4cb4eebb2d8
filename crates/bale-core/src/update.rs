use std::cmp::Ordering;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    domain::UpdateId,
    payload::{self, FromPayload},
    port::ApiHandle,
    types::{CallbackQuery, Message, PreCheckoutQuery},
    Result,
};

/// One event delivered from the Bale servers.
///
/// A well-formed server payload populates at most one variant. The decoder
/// does not enforce that: a multi-variant payload keeps every variant it
/// carried and is logged. [`Update::kind`] picks the first populated variant
/// in the envelope's fixed key order. Unknown top-level keys are ignored.
#[derive(Clone, Debug, Serialize)]
pub struct Update {
    pub update_id: UpdateId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_checkout_query: Option<PreCheckoutQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,
}

/// The variant kinds an update may carry, in the envelope's fixed key order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateKind {
    PreCheckoutQuery,
    CallbackQuery,
    Message,
    EditedMessage,
}

impl Update {
    pub const PRE_CHECKOUT_QUERY: &'static str = "pre_checkout_query";
    pub const CALLBACK_QUERY: &'static str = "callback_query";
    pub const MESSAGE: &'static str = "message";
    pub const EDITED_MESSAGE: &'static str = "edited_message";

    /// The populated variant, first in the fixed key order. `None` when the
    /// server delivered an update kind this crate does not model.
    pub fn kind(&self) -> Option<UpdateKind> {
        if self.pre_checkout_query.is_some() {
            Some(UpdateKind::PreCheckoutQuery)
        } else if self.callback_query.is_some() {
            Some(UpdateKind::CallbackQuery)
        } else if self.message.is_some() {
            Some(UpdateKind::Message)
        } else if self.edited_message.is_some() {
            Some(UpdateKind::EditedMessage)
        } else {
            None
        }
    }

    fn populated_variants(&self) -> usize {
        usize::from(self.pre_checkout_query.is_some())
            + usize::from(self.callback_query.is_some())
            + usize::from(self.message.is_some())
            + usize::from(self.edited_message.is_some())
    }
}

impl FromPayload for Update {
    const ENTITY: &'static str = "update";

    /// Each variant key is popped exactly once, in fixed order. A malformed
    /// nested payload aborts the whole update; the absent keys decode to
    /// `None` variants.
    fn from_map(map: &mut Map<String, Value>, api: &ApiHandle) -> Result<Self> {
        let pre_checkout_query =
            PreCheckoutQuery::decode(payload::take(map, Self::PRE_CHECKOUT_QUERY), api)?;
        let callback_query =
            CallbackQuery::decode(payload::take(map, Self::CALLBACK_QUERY), api)?;
        let message = Message::decode(payload::take(map, Self::MESSAGE), api)?;
        let edited_message = Message::decode(payload::take(map, Self::EDITED_MESSAGE), api)?;

        let update = Self {
            update_id: UpdateId(payload::req_i64(Self::ENTITY, map, "update_id")?),
            pre_checkout_query,
            callback_query,
            message,
            edited_message,
        };

        if update.populated_variants() > 1 {
            tracing::warn!(
                update_id = update.update_id.0,
                "update payload carries more than one variant"
            );
        }

        Ok(update)
    }
}

// Updates order and compare by sequence number alone; variant contents never
// participate. Cross-type comparisons do not compile.
impl PartialEq for Update {
    fn eq(&self, other: &Self) -> bool {
        self.update_id == other.update_id
    }
}

impl Eq for Update {}

impl PartialOrd for Update {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Update {
    fn cmp(&self, other: &Self) -> Ordering {
        self.update_id.cmp(&other.update_id)
    }
}
