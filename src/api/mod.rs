pub(crate) mod client;
pub(crate) mod session;
pub(crate) mod types;

pub(crate) use client::{ApiClient, DEFAULT_SERVER};
pub(crate) use session::Session;
