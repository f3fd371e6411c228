//! Domain-level frontend features and their shared state. Routes import these
//! modules to keep view code focused.

pub(crate) mod auth;
