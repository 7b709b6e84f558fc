//! HTTP layer: low-level client and the uniform response envelope.

pub mod client;
pub mod envelope;

pub use client::FinanceHttp;
pub use envelope::Envelope;
