//! Inbound interfaces feeding orders into the application layer.

pub mod csv;
