//! Credentials and access tokens used to authenticate Graph API calls.

pub mod credentials;
pub mod secret;
pub mod token;

pub use credentials::*;
pub use secret::*;
pub use token::*;
