//! Infrastructure layer - Registry implementation and process services

pub mod logging;
pub mod user;
