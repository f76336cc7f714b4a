//! Least-privilege policy builders for MSK workload roles.
//!
//! Each builder derives the topic/group ARNs it needs from the cluster ARN
//! and emits exactly the statements the corresponding role requires:
//! producers write one topic, consumers read one topic under one group,
//! administrators additionally reach the cluster control plane.

use log::debug;

use crate::arn::{Arn, ResourceKind};
use crate::error::ArnResult;
use crate::types::{PolicyDocument, Statement};

/// Build a single allow statement over the given actions and resources.
pub fn build_single_statement(actions: Vec<String>, resources: Vec<String>) -> Statement {
    Statement::allow(actions, resources)
}

/// Assemble statements into an attachable policy document.
pub fn build_allow_policy(statements: Vec<Statement>) -> PolicyDocument {
    PolicyDocument::new(statements)
}

/// Policy for a producer principal: connect to the cluster, write and
/// describe one topic, maintain any consumer group.
pub fn producer_policy(cluster_arn: &str, topic_name: &str) -> ArnResult<PolicyDocument> {
    let cluster = Arn::parse_cluster(cluster_arn)?;
    let topic = cluster.derived(ResourceKind::Topic, topic_name);
    let any_group = cluster.derived(ResourceKind::Group, "*");
    debug!("producer grants scoped to topic {topic}");

    Ok(build_allow_policy(vec![
        build_single_statement(
            actions(&["kafka-cluster:Connect"]),
            vec![cluster.to_string()],
        )
        .with_sid("AllowClusterConnect"),
        build_single_statement(
            actions(&["kafka-cluster:WriteData", "kafka-cluster:DescribeTopic"]),
            vec![topic],
        )
        .with_sid("AllowTopicProduce"),
        build_single_statement(
            actions(&["kafka-cluster:AlterGroup", "kafka-cluster:DescribeGroup"]),
            vec![any_group],
        )
        .with_sid("AllowGroupMaintenance"),
    ]))
}

/// Policy for a consumer principal: a single statement covering the consumer
/// group, the subscribed topic, and the cluster itself.
pub fn consumer_policy(
    cluster_arn: &str,
    topic_name: &str,
    group_name: &str,
) -> ArnResult<PolicyDocument> {
    let cluster = Arn::parse_cluster(cluster_arn)?;
    let topic = cluster.derived(ResourceKind::Topic, topic_name);
    let group = cluster.derived(ResourceKind::Group, group_name);
    debug!("consumer grants scoped to topic {topic} and group {group}");

    Ok(build_allow_policy(vec![build_single_statement(
        actions(&[
            "kafka-cluster:Connect",
            "kafka-cluster:DescribeGroup",
            "kafka-cluster:AlterGroup",
            "kafka-cluster:DescribeTopic",
            "kafka-cluster:ReadData",
            "kafka-cluster:ReadGroup",
            "kafka-cluster:DescribeClusterDynamicConfiguration",
        ]),
        vec![group, topic, cluster.to_string()],
    )
    .with_sid("AllowTopicConsume")]))
}

/// Policy for an administrative principal (bastion-host role): cluster
/// control-plane access plus full read/write on one topic.
pub fn admin_policy(cluster_arn: &str, topic_name: &str) -> ArnResult<PolicyDocument> {
    let cluster = Arn::parse_cluster(cluster_arn)?;
    let topic = cluster.derived(ResourceKind::Topic, topic_name);
    let any_group = cluster.derived(ResourceKind::Group, "*");
    debug!("admin grants scoped to topic {topic}");

    Ok(build_allow_policy(vec![
        build_single_statement(
            actions(&[
                "kafka:ListClusters",
                "kafka:GetBootstrapBrokers",
                "kafka:DescribeCluster",
                "kafka-cluster:Connect",
                "kafka-cluster:AlterCluster",
            ]),
            vec![cluster.to_string()],
        )
        .with_sid("AllowClusterAdministration"),
        build_single_statement(
            actions(&[
                "kafka-cluster:WriteData",
                "kafka-cluster:ReadData",
                "kafka-cluster:*Topic*",
            ]),
            vec![topic],
        )
        .with_sid("AllowTopicAdministration"),
        build_single_statement(
            actions(&["kafka-cluster:AlterGroup", "kafka-cluster:DescribeGroup"]),
            vec![any_group],
        )
        .with_sid("AllowGroupMaintenance"),
    ]))
}

fn actions(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}
