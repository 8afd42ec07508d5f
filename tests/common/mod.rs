use bb84_otp::{KeyExchange, KeySource, Result};

/// Key source that hands out the same exchange on every call.
pub struct FixedKeys {
    exchange: KeyExchange,
    pub calls: usize,
}

impl FixedKeys {
    pub fn new(success: bool, alice_key: &[bool], bob_key: &[bool]) -> Self {
        Self {
            exchange: KeyExchange {
                success,
                alice_key: alice_key.to_vec(),
                bob_key: bob_key.to_vec(),
            },
            calls: 0,
        }
    }

    pub fn matching(key: &[bool]) -> Self {
        Self::new(true, key, key)
    }
}

impl KeySource for FixedKeys {
    fn exchange(&mut self) -> Result<KeyExchange> {
        self.calls += 1;
        Ok(self.exchange.clone())
    }
}
