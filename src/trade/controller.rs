use async_trait::async_trait;

use super::session::AuthProvider;
use super::state::{Action, Effect, RawBalances, TradeState};

/// Where balances come from. The real implementation talks to the balance
/// proxy; tests script the outcome.
#[async_trait]
pub trait BalanceSource {
    async fn fetch_balances(
        &self,
        chain_id: u64,
        address: &str,
    ) -> std::result::Result<RawBalances, String>;
}

/// Couples the pure state machine with a balance source: dispatch an
/// action, run whatever effect it emits, feed the outcome back in.
pub struct TradeController<S> {
    pub state: TradeState,
    source: S,
}

impl<S: BalanceSource> TradeController<S> {
    pub fn new(state: TradeState, source: S) -> Self {
        Self { state, source }
    }

    pub async fn dispatch(&mut self, action: Action) {
        let mut next = self.state.update(action);
        while let Some(effect) = next.take() {
            next = self.run(effect).await;
        }
    }

    /// Mirrors provider transitions into the state machine: a fresh or
    /// changed address connects, a dropped session disconnects.
    pub async fn sync_session(&mut self, provider: &dyn AuthProvider) {
        if !provider.is_ready() {
            return;
        }
        if provider.is_authenticated() {
            if let Some(address) = provider.address() {
                if self.state.wallet.as_deref() != Some(address.as_str()) {
                    self.dispatch(Action::Connected { address }).await;
                }
            }
        } else if self.state.wallet.is_some() {
            self.dispatch(Action::Disconnected).await;
        }
    }

    async fn run(&mut self, effect: Effect) -> Option<Effect> {
        match effect {
            Effect::FetchBalances {
                seq,
                chain_id,
                address,
            } => {
                let outcome = self.source.fetch_balances(chain_id, &address).await;
                self.state.update(Action::BalancesLoaded { seq, outcome })
            }
        }
    }
}
