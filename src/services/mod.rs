//! Services coordinating the result view with the web layer.

pub mod search;
