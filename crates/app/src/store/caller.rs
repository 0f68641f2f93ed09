//! Per-request caller identity.

/// Identity of the client on whose behalf a store call is made.
///
/// The inbound `Authorization` header is forwarded unchanged so the store's
/// row-level policies see the end user rather than the server key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    authorization: Option<String>,
}

impl Caller {
    /// A caller without an `Authorization` header of its own.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A caller that presented the given `Authorization` header value.
    ///
    /// Blank values are treated as absent.
    #[must_use]
    pub fn from_header(value: Option<&str>) -> Self {
        Self {
            authorization: value
                .filter(|value| !value.trim().is_empty())
                .map(ToOwned::to_owned),
        }
    }

    /// The forwarded `Authorization` header value, if any.
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }
}
