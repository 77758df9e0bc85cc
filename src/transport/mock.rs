//! Mock transport for isolating the view and binding in tests.

use mockall::mock;

use crate::transport::{SearchFuture, SearchTransport};

mock! {
    pub Transport {}

    impl SearchTransport for Transport {
        fn search(&self, query: &str) -> SearchFuture;
    }
}
