//! Request helper extensions.

use salvo::{http::header::AUTHORIZATION, prelude::Request};

use padel_app::store::Caller;

pub(crate) trait RequestExt {
    /// The caller identity to forward to the store.
    fn caller(&self) -> Caller;
}

impl RequestExt for Request {
    fn caller(&self) -> Caller {
        Caller::from_header(
            self.headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok()),
        )
    }
}
