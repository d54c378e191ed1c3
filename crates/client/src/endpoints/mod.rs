//! REST API endpoint implementations.
//!
//! Each function issues exactly one request; caching and fan-out live in
//! [`crate::client`].

mod creature;
mod health;
mod request;
mod search;
mod sprite;
pub mod url_encoding;

pub use creature::get_creature;
pub use health::get_health;
pub use request::send_request;
pub use search::search_names;
pub use sprite::fetch_sprite;
