// src/simulation/load_parameters.rs

use serde_yaml::from_reader;
use std::error::Error;
use std::fs::File;

use crate::config::{PendulumParameters, Scenario};

/// 振り子パラメータの読み込み
pub fn load_pendulum_parameters(path: &str) -> Result<PendulumParameters, Box<dyn Error>> {
    let file = File::open(path)?;
    let params: PendulumParameters = from_reader(file)?;
    Ok(params)
}

/// シナリオの読み込み
pub fn load_scenario(path: &str) -> Result<Scenario, Box<dyn Error>> {
    let file = File::open(path)?;
    let scenario: Scenario = from_reader(file)?;
    Ok(scenario)
}
