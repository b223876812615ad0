//! Resource types mirroring the Paybook Sync v1 API.
//!
//! Field names follow the wire format; timestamps arrive as unix seconds and decode into
//! [`OffsetDateTime`](time::OffsetDateTime).

pub mod account;
pub mod catalogue;
pub mod credential;
pub mod session;
pub mod user;

pub use account::*;
pub use catalogue::*;
pub use credential::*;
pub use session::*;
pub use user::*;
