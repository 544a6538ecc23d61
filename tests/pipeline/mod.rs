//! End-to-end pipeline tests
//!
//! - Surface walking and documentation collection over a small web API
//! - Constructor suppression for positional records
//! - Call-site classification from source text
//! - JSON shape of collected entries (`serde` feature)

pub mod tests_call_sites;
pub mod tests_collect;
#[cfg(feature = "serde")]
pub mod tests_serde;
