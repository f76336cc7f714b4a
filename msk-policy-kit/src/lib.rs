//! This crate provides the core business logic for MSK Policy Kit:
//! - Cluster ARN decomposition and derived topic/group ARN synthesis
//! - Least-privilege IAM policy generation for producer, consumer, and
//!   administrative MSK workload roles
//!

mod arn;
mod error;
mod synthesis;
mod types;

// Re-exports for a small, focused public API
pub use arn::{group_arn, synthesize, topic_arn, Arn, ResourceKind};
pub use error::{ArnError, ArnResult};
pub use synthesis::{
    admin_policy, build_allow_policy, build_single_statement, consumer_policy, producer_policy,
};
pub use types::{Effect, PolicyDocument, Statement, POLICY_VERSION};
