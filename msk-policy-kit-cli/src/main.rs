//! Command-line adapter over the MSK Policy Kit library.
//!
//! Emits policy JSON on stdout and diagnostics on stderr so the output can
//! be piped straight into `aws iam put-role-policy` or an IaC template.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use msk_policy_kit::{
    admin_policy, consumer_policy, producer_policy, synthesize, PolicyDocument,
};
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "msk-policy-kit",
    version,
    about = "Derive MSK resource ARNs and least-privilege IAM policies from a cluster ARN"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the derived topic or group ARN for a cluster
    Derive {
        /// ARN of the MSK cluster
        #[arg(long)]
        cluster_arn: String,
        /// Derived resource type: "topic" or "group"
        #[arg(long)]
        kind: String,
        /// Topic or consumer-group name (the wildcard "*" is accepted)
        #[arg(long)]
        name: String,
    },
    /// Emit the policy for a producer principal
    Producer {
        #[arg(long)]
        cluster_arn: String,
        #[arg(long)]
        topic: String,
    },
    /// Emit the policy for a consumer principal
    Consumer {
        #[arg(long)]
        cluster_arn: String,
        #[arg(long)]
        topic: String,
        /// Consumer group id; generated when omitted
        #[arg(long)]
        group: Option<String>,
    },
    /// Emit the policy for an administrative (bastion-host) principal
    Admin {
        #[arg(long)]
        cluster_arn: String,
        #[arg(long)]
        topic: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Derive {
            cluster_arn,
            kind,
            name,
        } => {
            println!("{}", synthesize(&cluster_arn, &kind, &name)?);
        }
        Commands::Producer { cluster_arn, topic } => {
            emit(&producer_policy(&cluster_arn, &topic)?)?;
        }
        Commands::Consumer {
            cluster_arn,
            topic,
            group,
        } => {
            // Mirrors the event-source wiring: each consumer deployment gets
            // a fresh group id unless one is pinned explicitly.
            let group_id = group.unwrap_or_else(|| Uuid::new_v4().to_string());
            log::info!("consumer group id: {group_id}");
            emit(&consumer_policy(&cluster_arn, &topic, &group_id)?)?;
        }
        Commands::Admin { cluster_arn, topic } => {
            emit(&admin_policy(&cluster_arn, &topic)?)?;
        }
    }
    Ok(())
}

fn emit(policy: &PolicyDocument) -> Result<()> {
    println!("{}", policy.to_json_pretty()?);
    Ok(())
}
