use crate::error::{Error, Result};

/// Message sent through the pad when nothing else is configured.
pub const DEFAULT_MESSAGE: &str = "hello quantum world";

/// Error rate above which an exchange is treated as compromised.
pub const DEFAULT_QBER_THRESHOLD: f64 = 0.11;

/// Parameters for one simulated BB84 exchange.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of qubits Alice prepares and sends.
    pub rounds: usize,
    /// Probability that the channel flips a qubit in transit.
    pub noise_probability: f64,
    /// Probability that an eavesdropper intercepts and resends a qubit.
    pub eavesdrop_probability: f64,
    /// Share of the sifted key sacrificed to estimate the error rate.
    pub sample_fraction: f64,
    /// Highest tolerated quantum bit error rate.
    pub qber_threshold: f64,
    /// Run parity reconciliation on Bob's key after sifting.
    pub reconcile: bool,
    /// Fixed RNG seed; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 128,
            noise_probability: 0.0,
            eavesdrop_probability: 0.0,
            sample_fraction: 0.25,
            qber_threshold: DEFAULT_QBER_THRESHOLD,
            reconcile: false,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Lossless channel with 5% bit flips.
    pub fn noisy() -> Self {
        Self {
            noise_probability: 0.05,
            ..Self::default()
        }
    }

    /// Every qubit goes through an intercept-resend attacker.
    pub fn intercepted() -> Self {
        Self {
            eavesdrop_probability: 1.0,
            ..Self::default()
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(Error::InvalidConfig("rounds must be at least 1".into()));
        }
        for (name, value) in [
            ("noise_probability", self.noise_probability),
            ("eavesdrop_probability", self.eavesdrop_probability),
            ("sample_fraction", self.sample_fraction),
            ("qber_threshold", self.qber_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must lie in [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// What the orchestrator sends and how strict it is about the exchange.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub message: String,
    /// Abort before encryption when the key source reports failure.
    pub require_success: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            require_success: true,
        }
    }
}
