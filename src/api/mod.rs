pub mod client;

pub use client::{ApiClient, FilePayload, MinutesService};
