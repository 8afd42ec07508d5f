use std::process::ExitCode;

use bb84_otp::{
    OneTimePad, Orchestrator, Result, RunConfig, RunReport, SimulatedExchange, SimulationConfig,
};
use log::error;

fn run() -> Result<RunReport> {
    let source = SimulatedExchange::new(SimulationConfig::default())?;
    Orchestrator::new(source, OneTimePad, RunConfig::default()).run()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(report) => {
            println!("Cipher Text:  {}", report.ciphertext);
            println!("{}", report.plaintext);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("run aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
