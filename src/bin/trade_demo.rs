//! Manual end-to-end driver for the trading core: logs a scripted wallet
//! in, pulls balances through a running proxy, and prints what the UI
//! would show.
//!
//! Usage:
//!   YETI_API_URL=http://localhost:3000 WALLET_ADDRESS=0x... \
//!     cargo run --bin trade_demo

use yeti_backend::constants::TRACKED_TOKENS;
use yeti_backend::trade::{
    Action, AuthProvider, ProxyClient, ScriptedWallet, TradeController, TradeState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url =
        std::env::var("YETI_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let address = std::env::var("WALLET_ADDRESS")
        .map_err(|_| anyhow::anyhow!("WALLET_ADDRESS is required"))?;

    let mut wallet = ScriptedWallet::new(address);
    wallet.login();

    let mut controller =
        TradeController::new(TradeState::default(), ProxyClient::new(base_url));
    controller.sync_session(&wallet).await;

    println!("chain:  {}", controller.state.chain.label());
    println!("wallet: {}", controller.state.wallet.as_deref().unwrap_or("-"));
    println!("fetch:  {:?}", controller.state.fetch);
    for token in TRACKED_TOKENS.iter() {
        println!(
            "{:>5}  {}",
            token.symbol,
            controller.state.display_balance(token.symbol)
        );
    }

    controller.dispatch(Action::SetHalf).await;
    println!("50% -> pay amount {}", controller.state.pay_amount);
    controller.dispatch(Action::SetMax).await;
    println!("Max -> pay amount {}", controller.state.pay_amount);

    Ok(())
}
