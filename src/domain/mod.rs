//! Domain types shared by the transport and the result view.

pub mod search;
