use std::process::Command;

use predicates::prelude::*;

const CLUSTER_ARN: &str = "arn:aws:kafka:eu-west-1:111122223333:cluster/demo-cluster/abcd-1234";

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_msk-policy-kit"))
}

#[test]
fn help_lists_subcommands() {
    let out = bin().arg("--help").output().expect("failed to run --help");
    let s = String::from_utf8_lossy(&out.stdout);
    for subcommand in ["derive", "producer", "consumer", "admin"] {
        assert!(s.contains(subcommand), "help should mention {subcommand}: {s}");
    }
}

#[test]
fn test_derive_topic_arn() {
    let output = bin()
        .args([
            "derive",
            "--cluster-arn",
            CLUSTER_ARN,
            "--kind",
            "topic",
            "--name",
            "orders",
        ])
        .output()
        .expect("failed to run derive");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        "arn:aws:kafka:eu-west-1:111122223333:topic/demo-cluster/abcd-1234/orders"
    );
}

#[test]
fn test_derive_rejects_unknown_kind() {
    let output = bin()
        .args([
            "derive",
            "--cluster-arn",
            CLUSTER_ARN,
            "--kind",
            "subscription",
            "--name",
            "x",
        ])
        .output()
        .expect("failed to run derive");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid derived resource type"),
        "stderr was: {stderr}"
    );
}

#[test]
fn test_malformed_cluster_arn_exits_two() {
    let output = bin()
        .args([
            "producer",
            "--cluster-arn",
            "arn:aws:kafka:us-east-1",
            "--topic",
            "messages",
        ])
        .output()
        .expect("failed to run producer");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed ARN"), "stderr was: {stderr}");
}

#[test]
fn test_producer_policy_json_shape() {
    let output = bin()
        .args(["producer", "--cluster-arn", CLUSTER_ARN, "--topic", "messages"])
        .output()
        .expect("failed to run producer");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let policy: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");

    assert_eq!(policy["Version"], "2012-10-17");
    let statements = policy["Statement"].as_array().expect("Statement array");
    assert_eq!(statements.len(), 3);
    assert!(predicate::str::contains(
        "arn:aws:kafka:eu-west-1:111122223333:topic/demo-cluster/abcd-1234/messages"
    )
    .eval(&stdout));
}

#[test]
fn test_consumer_policy_generates_group_id_when_omitted() {
    let output = bin()
        .args(["consumer", "--cluster-arn", CLUSTER_ARN, "--topic", "messages"])
        .output()
        .expect("failed to run consumer");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let policy: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");

    let resources = policy["Statement"][0]["Resource"]
        .as_array()
        .expect("Resource array");
    let group_prefix = "arn:aws:kafka:eu-west-1:111122223333:group/demo-cluster/abcd-1234/";
    assert!(
        resources
            .iter()
            .any(|r| r.as_str().is_some_and(|s| s.starts_with(group_prefix))),
        "no generated group ARN in {resources:?}"
    );
}

#[test]
fn test_consumer_policy_pins_explicit_group() {
    let output = bin()
        .args([
            "consumer",
            "--cluster-arn",
            CLUSTER_ARN,
            "--topic",
            "messages",
            "--group",
            "order-readers",
        ])
        .output()
        .expect("failed to run consumer");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(
        "arn:aws:kafka:eu-west-1:111122223333:group/demo-cluster/abcd-1234/order-readers"
    ));
}

#[test]
fn test_admin_policy_includes_control_plane_actions() {
    let output = bin()
        .args(["admin", "--cluster-arn", CLUSTER_ARN, "--topic", "messages"])
        .output()
        .expect("failed to run admin");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("kafka:GetBootstrapBrokers"), "stdout was: {stdout}");
}
