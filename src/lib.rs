//! costguard - static cost analysis for graph-shaped queries
//!
//! Prices a query document before execution and flags it for rejection when
//! the configured budget is exceeded.

pub mod analysis;
pub mod ast;
pub mod observability;
pub mod pipeline;
pub mod policy;
pub mod schema;
