//! `ordain delegation`

use anyhow::Result;
use clap::Args;
use ordain_core::OrderRegistry;

/// Arguments for announcing a delegation
#[derive(Debug, Clone, Args)]
pub struct DelegationArgs {
    /// Owner who delegated
    #[arg(long)]
    pub delegator: String,

    /// User who received the delegation
    #[arg(long)]
    pub delegatee: String,

    /// Order the delegation counts toward
    #[arg(long)]
    pub order_num: String,

    /// Duration as shown in the message
    #[arg(long)]
    pub duration: String,

    /// Delegated label (repeatable)
    #[arg(long = "label", required = true)]
    pub labels: Vec<String>,
}

/// Announce the delegation
pub async fn run(registry: &OrderRegistry, args: DelegationArgs) -> Result<()> {
    registry
        .notify_delegation(
            &args.delegator,
            &args.delegatee,
            &args.order_num,
            &args.duration,
            &args.labels,
        )
        .await?;
    Ok(())
}
