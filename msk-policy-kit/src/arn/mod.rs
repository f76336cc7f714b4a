//! Cluster ARN decomposition and derived ARN synthesis.
//!
//! MSK scopes IAM permissions to per-resource ARNs that are derived from the
//! cluster ARN rather than returned by any API:
//!
//! ```text
//! Cluster   arn:aws:kafka:region:account-id:cluster/cluster-name/cluster-uuid
//! Topic     arn:aws:kafka:region:account-id:topic/cluster-name/cluster-uuid/topic-name
//! Group     arn:aws:kafka:region:account-id:group/cluster-name/cluster-uuid/group-name
//! ```
//!
//! The colon/slash grammar is a fixed provider contract; it is validated
//! defensively here because a malformed ARN always indicates an upstream
//! bug (an unprovisioned cluster, a provider format change) that must
//! surface immediately instead of being defaulted away.

use std::fmt;
use std::str::FromStr;

use crate::error::{ArnError, ArnResult};

/// Structured form of a cluster ARN. A transient value type: constructed
/// per call, never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arn {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account: String,
    pub resource_type: String,
    pub resource_name: String,
    pub resource_id: String,
}

impl Arn {
    /// Parses a cluster ARN of the form
    /// `arn:{partition}:{service}:{region}:{account}:cluster/{name}/{uuid}`.
    ///
    /// Splits on two axes: the colon-delimited prefix (six fields), then the
    /// slash-delimited resource triple within the sixth field. Pure string
    /// parsing, no provider calls.
    pub fn parse_cluster(input: &str) -> ArnResult<Self> {
        let fields: Vec<&str> = input.splitn(6, ':').collect();
        if fields.len() < 6 {
            return Err(ArnError::malformed(
                input,
                format!("expected 6 colon-delimited fields, found {}", fields.len()),
            ));
        }
        if fields[0] != "arn" {
            return Err(ArnError::malformed(
                input,
                format!("expected leading literal \"arn\", found {:?}", fields[0]),
            ));
        }

        let segments: Vec<&str> = fields[5].split('/').collect();
        if segments.len() != 3 {
            return Err(ArnError::malformed(
                input,
                format!(
                    "expected cluster/{{name}}/{{uuid}} in the resource field, found {:?}",
                    fields[5]
                ),
            ));
        }
        if segments[0] != "cluster" {
            return Err(ArnError::malformed(
                input,
                format!("expected resource type \"cluster\", found {:?}", segments[0]),
            ));
        }

        Ok(Self {
            partition: fields[1].to_string(),
            service: fields[2].to_string(),
            region: fields[3].to_string(),
            account: fields[4].to_string(),
            resource_type: segments[0].to_string(),
            resource_name: segments[1].to_string(),
            resource_id: segments[2].to_string(),
        })
    }

    /// Synthesizes the ARN of a topic or group belonging to this cluster.
    ///
    /// Partition, service, region, account, and the cluster's name/uuid pair
    /// are preserved; only the resource type changes and the leaf name is
    /// appended. `leaf_name` is not validated: the wildcard `*` is a
    /// legitimate value for group-scoped grants.
    pub fn derived(&self, kind: ResourceKind, leaf_name: &str) -> String {
        format!(
            "arn:{}:{}:{}:{}:{}/{}/{}/{}",
            self.partition,
            self.service,
            self.region,
            self.account,
            kind.as_str(),
            self.resource_name,
            self.resource_id,
            leaf_name
        )
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}/{}/{}",
            self.partition,
            self.service,
            self.region,
            self.account,
            self.resource_type,
            self.resource_name,
            self.resource_id
        )
    }
}

/// Resource types that can be derived from a cluster ARN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Topic,
    Group,
}

impl ResourceKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::Group => "group",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = ArnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "topic" => Ok(Self::Topic),
            "group" => Ok(Self::Group),
            other => Err(ArnError::InvalidResourceType {
                given: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthesizes a derived ARN from a cluster ARN and a string resource type.
///
/// The string layer exists for callers that receive the resource type as
/// input (CLI arguments, config); `resource_type` must be `"topic"` or
/// `"group"`. Deterministic and side-effect free.
pub fn synthesize(cluster_arn: &str, resource_type: &str, leaf_name: &str) -> ArnResult<String> {
    let kind = resource_type.parse::<ResourceKind>()?;
    Ok(Arn::parse_cluster(cluster_arn)?.derived(kind, leaf_name))
}

/// Derives the topic ARN for `topic_name` on the given cluster.
pub fn topic_arn(cluster_arn: &str, topic_name: &str) -> ArnResult<String> {
    Ok(Arn::parse_cluster(cluster_arn)?.derived(ResourceKind::Topic, topic_name))
}

/// Derives the consumer-group ARN for `group_name` on the given cluster.
pub fn group_arn(cluster_arn: &str, group_name: &str) -> ArnResult<String> {
    Ok(Arn::parse_cluster(cluster_arn)?.derived(ResourceKind::Group, group_name))
}
