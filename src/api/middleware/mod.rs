//! API middleware components

pub mod logging;
pub mod recovery;
pub mod security;

pub use logging::logging_middleware;
pub use recovery::panic_recovery_layer;
pub use security::security_headers_middleware;
