//! Email delivery for submitted forms

mod client;
mod error;
mod traits;

pub use client::EmailJsClient;
pub use error::SendError;
pub use traits::{Mailer, SendReceipt};

#[cfg(test)]
pub use traits::MockMailer;
