use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    payload::{self, FromPayload},
    port::ApiHandle,
    types::User,
    Result,
};

/// An incoming pre-checkout query: the final confirmation step of an invoice
/// payment.
///
/// Bale expects an answer within the payment window via
/// [`crate::ApiPort::answer_pre_checkout_query`]; this entity only carries
/// the data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PreCheckoutQuery {
    /// Unique transaction identifier.
    pub id: String,
    /// Server key `from`: the paying user.
    pub from_user: User,
    /// ISO-4217 code; always `"IRR"` on Bale.
    pub currency: String,
    /// Total price in the smallest units of the currency.
    pub total_amount: i64,
    /// Bot-specified payload from the originating invoice.
    pub invoice_payload: String,
}

impl PreCheckoutQuery {
    /// Alias for [`PreCheckoutQuery::from_user`].
    pub fn user(&self) -> &User {
        &self.from_user
    }
}

impl FromPayload for PreCheckoutQuery {
    const ENTITY: &'static str = "pre_checkout_query";

    fn from_map(map: &mut Map<String, Value>, api: &ApiHandle) -> Result<Self> {
        Ok(Self {
            id: payload::req_str(Self::ENTITY, map, "id")?,
            from_user: payload::req_entity(Self::ENTITY, map, "from", api)?,
            currency: payload::req_str(Self::ENTITY, map, "currency")?,
            total_amount: payload::req_i64(Self::ENTITY, map, "total_amount")?,
            invoice_payload: payload::req_str(Self::ENTITY, map, "invoice_payload")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{domain::UserId, port::testing, Error};

    #[test]
    fn decodes_a_payment_query() {
        let api = testing::noop();
        let query = PreCheckoutQuery::decode(
            Some(json!({
                "id": "pc1",
                "from": {"id": 11, "first_name": "Kian"},
                "currency": "IRR",
                "total_amount": 50_000,
                "invoice_payload": "order-7"
            })),
            &api,
        )
        .unwrap()
        .unwrap();

        assert_eq!(query.id, "pc1");
        assert_eq!(query.user().id, UserId(11));
        assert_eq!(query.currency, "IRR");
        assert_eq!(query.total_amount, 50_000);
        assert_eq!(query.invoice_payload, "order-7");
    }

    #[test]
    fn every_field_is_required() {
        let api = testing::noop();
        let err = PreCheckoutQuery::decode(
            Some(json!({
                "id": "pc1",
                "from": {"id": 11, "first_name": "Kian"},
                "total_amount": 50_000,
                "invoice_payload": "order-7"
            })),
            &api,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Payload { entity: "pre_checkout_query", .. }));
        assert!(err.to_string().contains("`currency`"));
    }
}
