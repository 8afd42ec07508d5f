//! Where raw key material comes from.
//!
//! The orchestrator only sees the [`KeySource`] contract: one call, returning
//! a success flag plus Alice's and Bob's raw keys. [`SimulatedExchange`] is the
//! in-process BB84 simulation behind it; tests swap in fixed keys.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bb84::{run_round, sift, Round};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::error_correction::cascade_correction;

/// Outcome of one key exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyExchange {
    /// Whether the exchange completed without detected eavesdropping or excess noise.
    pub success: bool,
    pub alice_key: Vec<bool>,
    pub bob_key: Vec<bool>,
}

pub trait KeySource {
    /// Runs one exchange. `Err` means the source could not run at all; a
    /// compromised exchange is reported through [`KeyExchange::success`].
    fn exchange(&mut self) -> Result<KeyExchange>;
}

/// Statistics of the most recent simulated exchange.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeStats {
    pub rounds: usize,
    pub sifted: usize,
    pub sampled: usize,
    pub qber: f64,
    pub disclosed_parities: usize,
}

/// BB84 over a simulated channel.
pub struct SimulatedExchange {
    config: SimulationConfig,
    rng: StdRng,
    last_stats: Option<ExchangeStats>,
}

impl SimulatedExchange {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            last_stats: None,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn last_stats(&self) -> Option<&ExchangeStats> {
        self.last_stats.as_ref()
    }

    fn sample_size(&self, sifted: usize) -> usize {
        if sifted == 0 || self.config.sample_fraction == 0.0 {
            return 0;
        }
        let size = (self.config.sample_fraction * sifted as f64).ceil() as usize;
        size.clamp(1, sifted)
    }
}

impl KeySource for SimulatedExchange {
    fn exchange(&mut self) -> Result<KeyExchange> {
        let rounds: Vec<Round> = (0..self.config.rounds)
            .map(|_| {
                run_round(
                    self.config.eavesdrop_probability,
                    self.config.noise_probability,
                    &mut self.rng,
                )
            })
            .collect();

        let (mut alice_key, mut bob_key) = sift(&rounds);
        let sifted = alice_key.len();

        // The sample is disclosed publicly, so it leaves the key.
        let sampled = self.sample_size(sifted);
        let alice_rest = alice_key.split_off(sampled);
        let bob_rest = bob_key.split_off(sampled);
        let errors = alice_key
            .iter()
            .zip(&bob_key)
            .filter(|(a, b)| a != b)
            .count();
        let qber = if sampled == 0 {
            0.0
        } else {
            errors as f64 / sampled as f64
        };

        let mut disclosed_parities = 0;
        let bob_rest = if self.config.reconcile {
            let correction = cascade_correction(&alice_rest, &bob_rest)?;
            disclosed_parities = correction.disclosed_parities;
            correction.bits
        } else {
            bob_rest
        };

        let success = !alice_rest.is_empty() && qber <= self.config.qber_threshold;
        debug!(
            "sifted {sifted} of {} rounds, sampled {sampled}, {errors} sample errors",
            self.config.rounds
        );
        info!(
            "bb84 exchange: {} key bits, qber {qber:.3}, success {success}",
            alice_rest.len()
        );

        self.last_stats = Some(ExchangeStats {
            rounds: self.config.rounds,
            sifted,
            sampled,
            qber,
            disclosed_parities,
        });

        Ok(KeyExchange {
            success,
            alice_key: alice_rest,
            bob_key: bob_rest,
        })
    }
}
