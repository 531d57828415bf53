//! Wallet adapters.

mod keystore;

pub use keystore::KeystoreLocator;
