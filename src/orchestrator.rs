//! Runs one exchange end to end: simulate, encode, encrypt, decrypt.

use log::{debug, warn};

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::key_encoder::{encode_key, key_fingerprint};
use crate::key_source::KeySource;
use crate::otp::Cipher;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    Simulate,
    Encode,
    Encrypt,
    Decrypt,
    Done,
}

impl Stage {
    pub fn next(self) -> Stage {
        match self {
            Stage::Simulate => Stage::Encode,
            Stage::Encode => Stage::Encrypt,
            Stage::Encrypt => Stage::Decrypt,
            Stage::Decrypt | Stage::Done => Stage::Done,
        }
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub success: bool,
    pub alice_key: String,
    pub bob_key: String,
    pub ciphertext: String,
    pub plaintext: String,
}

impl RunReport {
    pub fn round_trip_ok(&self, message: &str) -> bool {
        self.plaintext == message
    }
}

pub struct Orchestrator<S, C> {
    source: S,
    cipher: C,
    config: RunConfig,
    stage: Stage,
}

impl<S: KeySource, C: Cipher> Orchestrator<S, C> {
    pub fn new(source: S, cipher: C, config: RunConfig) -> Self {
        Self {
            source,
            cipher,
            config,
            stage: Stage::Simulate,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn run(&mut self) -> Result<RunReport> {
        self.stage = Stage::Simulate;
        let exchange = self.source.exchange()?;
        if !exchange.success {
            if self.config.require_success {
                return Err(Error::ExchangeFailed);
            }
            warn!("key exchange reported failure, continuing anyway");
        }
        if exchange.alice_key.len() != exchange.bob_key.len() {
            return Err(Error::KeyLengthMismatch {
                alice: exchange.alice_key.len(),
                bob: exchange.bob_key.len(),
            });
        }

        self.advance();
        let alice_key = encode_key(&exchange.alice_key);
        let bob_key = encode_key(&exchange.bob_key);
        debug!(
            "alice key {} bob key {} ({} bits)",
            key_fingerprint(&alice_key),
            key_fingerprint(&bob_key),
            alice_key.len()
        );

        self.advance();
        let ciphertext = self.cipher.encrypt(&self.config.message, &alice_key)?;

        self.advance();
        let plaintext = self.cipher.decrypt(&ciphertext, &bob_key)?;

        self.advance();
        Ok(RunReport {
            success: exchange.success,
            alice_key,
            bob_key,
            ciphertext,
            plaintext,
        })
    }

    fn advance(&mut self) {
        let next = self.stage.next();
        debug!("{:?} -> {:?}", self.stage, next);
        self.stage = next;
    }
}
