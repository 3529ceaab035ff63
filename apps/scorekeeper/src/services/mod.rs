pub mod sessions;

pub use sessions::{RegistryError, SessionId, SessionRegistry};
