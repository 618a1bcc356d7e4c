//! Request middleware.
//!
//! - [`auth`]: bearer token verification and the [`auth::AuthUser`] extractor
//! - [`role`]: role allow-lists and the [`role::protect`] router helper
//!
//! # Request flow for a protected route
//!
//! 1. `authenticate` verifies `Authorization: Bearer <token>` and attaches
//!    `AuthUser` to the request, or answers 401
//! 2. `require_roles` checks the caller's role against the route's allow-list,
//!    or answers 403
//! 3. validation extractors check path, query and body, or answer 400
//! 4. the controller runs

pub mod auth;
pub mod role;
