//! Well-known revocation context labels.
//!
//! Contexts subdivide one storage backend into independent logical
//! denylists: revoking a key under one context says nothing about the same
//! key under another. These constants are a naming convention only; any
//! label within the backend's context limit works.

/// Revoked authorization codes.
pub const AUTHORIZATION_CODE: &str = "revocation:authorization-code";

/// Revoked access tokens, tracked by token identifier.
pub const ACCESS_TOKEN: &str = "revocation:access-token";

/// Revoked refresh tokens, tracked by token identifier.
pub const REFRESH_TOKEN: &str = "revocation:refresh-token";
