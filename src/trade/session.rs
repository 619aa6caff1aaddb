/// Capability surface of the external identity provider. The core never
/// looks behind it: any provider exposing these five members can drive the
/// interface, and the controller only reacts to transitions in their
/// values.
pub trait AuthProvider {
    fn login(&mut self);
    fn logout(&mut self);
    fn is_ready(&self) -> bool;
    fn is_authenticated(&self) -> bool;
    fn address(&self) -> Option<String>;
}

/// Scripted provider for tests and the demo binary: login succeeds
/// immediately and always yields the configured address.
#[derive(Debug, Clone)]
pub struct ScriptedWallet {
    address: String,
    authenticated: bool,
}

impl ScriptedWallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            authenticated: false,
        }
    }
}

impl AuthProvider for ScriptedWallet {
    fn login(&mut self) {
        self.authenticated = true;
    }

    fn logout(&mut self) {
        self.authenticated = false;
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn address(&self) -> Option<String> {
        if self.authenticated {
            Some(self.address.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_wallet_exposes_address_only_while_logged_in() {
        let mut wallet = ScriptedWallet::new("0xabc");
        assert!(wallet.is_ready());
        assert!(!wallet.is_authenticated());
        assert_eq!(wallet.address(), None);

        wallet.login();
        assert!(wallet.is_authenticated());
        assert_eq!(wallet.address().as_deref(), Some("0xabc"));

        wallet.logout();
        assert_eq!(wallet.address(), None);
    }
}
