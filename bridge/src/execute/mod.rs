//! Execute handlers for the Stream Bridge contract.
//!
//! - `lifecycle` - Initialize, endpoint registration reply, pause/unpause
//! - `config` - Trusted remotes, coin map and asset registration
//! - `stream` - Stream creation and local withdrawal
//! - `messaging` - Inbound delivery and outbound withdraw requests

mod config;
mod lifecycle;
mod messaging;
mod stream;

pub use config::*;
pub use lifecycle::*;
pub use messaging::*;
pub use stream::*;
