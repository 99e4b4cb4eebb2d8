//! Leaf entities decoded from Bale update payloads.

pub mod callback_query;
pub mod chat;
pub mod message;
pub mod pre_checkout_query;
pub mod user;

pub use callback_query::CallbackQuery;
pub use chat::Chat;
pub use message::Message;
pub use pre_checkout_query::PreCheckoutQuery;
pub use user::User;
