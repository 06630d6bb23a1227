//! `ordain fulfilled`

use anyhow::Result;
use clap::Args;
use ordain_core::OrderRegistry;

/// Arguments for announcing fulfillment
#[derive(Debug, Clone, Args)]
pub struct FulfilledArgs {
    /// User whose order was fulfilled
    #[arg(long)]
    pub name: String,

    /// Fulfilled order
    #[arg(long)]
    pub order_num: String,
}

/// Announce the fulfillment
pub async fn run(registry: &OrderRegistry, args: FulfilledArgs) -> Result<()> {
    registry.notify_order_fulfilled(&args.name, &args.order_num).await?;
    Ok(())
}
