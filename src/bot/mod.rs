//! Chat command handling: parsing, flows, card formatting and the Discord adapter

pub mod command;
pub mod discord;
pub mod formatting;
pub mod router;

pub use command::Command;
pub use formatting::{CardField, CardFormatter, MovieCard};
pub use router::{CommandRouter, IncomingMessage, Reply, ReplyTarget};
