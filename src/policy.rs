use crate::origin::AllowedOrigins;

/// Strategy used to decide whether a cross-origin request may proceed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CorsPolicy {
    /// Every origin is accepted.
    #[default]
    AllowAll,
    /// Only origins present in the configured [`AllowedOrigins`].
    AllowSpecific,
    /// Only requests without an `Origin` header.
    AllowSameOrigin,
    /// Every request carrying an `Origin` header is rejected.
    BlockAll,
}

impl CorsPolicy {
    /// An empty `origin` means the request carried no `Origin` header.
    pub fn allows(self, origin: &str, origins: &AllowedOrigins) -> bool {
        match self {
            CorsPolicy::AllowAll => true,
            CorsPolicy::AllowSpecific => origin.is_empty() || origins.allows(origin),
            CorsPolicy::AllowSameOrigin => origin.is_empty(),
            CorsPolicy::BlockAll => false,
        }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
