//! Request and response DTOs

pub mod quote;
