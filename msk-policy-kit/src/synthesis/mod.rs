//! Policy synthesis (deterministic JSON generation)

pub mod policy_builder;

pub use policy_builder::{
    admin_policy, build_allow_policy, build_single_statement, consumer_policy, producer_policy,
};
