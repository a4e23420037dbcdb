//! Open positions example: print every open MEXC futures position.
//! Usage: open-positions

use std::sync::Arc;

use anyhow::{Context, Result};
use clients_mexc::{MexcContractClient, MexcContractClientConfig};

fn format_opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    utils::load_dotenv()?;
    utils::init_tracing();

    let config = MexcContractClientConfig::from_env().context("failed to load MEXC config")?;
    let client = Arc::new(reqwest::Client::builder().build()?);
    let mexc = MexcContractClient::new(client, config);

    let positions = mexc
        .open_positions()
        .await
        .context("failed to fetch open positions")?;
    println!("Open positions: {}", positions.len());
    for pos in positions {
        println!("---");
        println!("  symbol:         {}", pos.symbol);
        println!("  side:           {}", pos.side());
        println!("  hold_vol:       {}", format_opt(pos.hold_vol));
        println!("  hold_avg_price: {}", pos.hold_avg_price);
        println!("  leverage:       {}", format_opt(pos.leverage));
    }

    Ok(())
}
