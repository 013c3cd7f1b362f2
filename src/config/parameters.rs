// src/config/parameters.rs

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct PendulumParameters {
    pub theta0: f64,     // 初期振幅（rad）、全振り子で共通
    pub arm_length: f64, // 腕の長さ L (m)
    pub gravity: f64,    // 重力加速度 g (m/s²)
}
