//! Discord gateway integration.
//!
//! Everything that talks to the Discord SDK lives here, keeping the
//! whitelist flows in `interactions` platform-free:
//!
//! - `handler` - gateway event handler dispatching interactions to the router
//! - `registrar` - global slash command registration on gateway ready
//! - `ui` - embed, button and modal builders plus the component custom ids

mod handler;
mod registrar;
mod ui;

pub use crate::discord::handler::Handler;
