// Domain layer module exports
// The relay's core state lives here, independent of the HTTP layer

pub mod errors;
pub mod message;
pub mod store;

pub use errors::{RelayError, RelayResult};
pub use message::Message;
pub use store::{RelayStore, SendReceipt};
