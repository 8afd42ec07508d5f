// lib.rs
pub mod bb84;
pub mod bb84_states;
pub mod config;
pub mod error;
pub mod error_correction;
pub mod key_encoder;
pub mod key_source;
pub mod orchestrator;
pub mod otp;

pub use config::{RunConfig, SimulationConfig};
pub use error::{Error, Result};
pub use key_encoder::encode_key;
pub use key_source::{KeyExchange, KeySource, SimulatedExchange};
pub use orchestrator::{Orchestrator, RunReport, Stage};
pub use otp::{Cipher, OneTimePad};
