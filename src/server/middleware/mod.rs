//! Request middleware: bearer authentication, security headers, CORS and rate limiting.

pub mod auth;
pub mod rate_limit;
pub mod security;

#[cfg(test)]
mod test;
