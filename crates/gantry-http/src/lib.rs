//! gantry-http - HTTP-backed resource gateway implementation.

mod api;
mod client;
mod gateway;

pub use api::{ChatPrompt, ChatReply, Welcome};
pub use client::RestClient;
pub use gateway::HttpGateway;
