//! Prompt channel adapters.

mod stream;

pub use stream::StreamChannel;
