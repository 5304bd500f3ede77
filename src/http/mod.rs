//! HTTP protocol layer module
//!
//! Protocol helpers decoupled from the request dispatch logic: the fixed
//! isolation header set, MIME mapping, and response builders.

pub mod isolation;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_500_response, build_options_response,
};
