//! `ordain new-order`

use super::parse_owner;
use anyhow::Result;
use clap::Args;
use ordain_core::{NewOrderNotice, OrderRegistry};
use std::time::Duration;
use tracing::info;

/// Arguments for announcing a new order
#[derive(Debug, Clone, Args)]
pub struct NewOrderArgs {
    /// Principal creating the order
    #[arg(long)]
    pub creator: String,

    /// User to receive access (repeatable)
    #[arg(long = "user", required = true)]
    pub users: Vec<String>,

    /// Label being requested (repeatable)
    #[arg(long = "label", required = true)]
    pub labels: Vec<String>,

    /// Owner asked to delegate, as OWNER=DISPLAY_NAME (repeatable)
    #[arg(long = "owner", value_parser = parse_owner)]
    pub owners: Vec<(String, String)>,

    /// Requested duration in seconds
    #[arg(long, default_value_t = 3600)]
    pub duration_secs: u64,

    /// Duration as shown in messages; defaults to `<seconds>s`
    #[arg(long)]
    pub duration_label: Option<String>,

    /// Number of delegations requested
    #[arg(long, default_value_t = 1)]
    pub uses: u32,
}

/// Store the order, then announce it
pub async fn run(registry: &OrderRegistry, args: NewOrderArgs) -> Result<()> {
    let owner_names: Vec<String> = args.owners.iter().map(|(o, _)| o.clone()).collect();
    let order = registry.create_order(
        args.creator,
        Duration::from_secs(args.duration_secs),
        owner_names,
        args.users,
        args.labels,
    );
    info!(order = %order.id(), "Created order");

    let duration = args
        .duration_label
        .unwrap_or_else(|| format!("{}s", args.duration_secs));
    let notice = NewOrderNotice::for_order(
        &order,
        duration,
        args.uses,
        args.owners.into_iter().collect(),
    );
    registry.notify_new_order(&notice).await?;

    println!("{}", order.id());
    Ok(())
}
