// src/config/scenario.rs

use serde::Deserialize;

use crate::models::pendulum::IntegrationMethod;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub step: f64,        // 時間ステップ h。1/β に比べ十分小さくすること（h=100 は NaN を生む）
    pub data_size: usize, // 履歴バッファの容量（プロット用サンプル数）
    pub cycles: usize,    // 実行ステップ数（ドライバ側の設定）
    pub pendulums: Vec<PendulumInstance>,
}

#[derive(Debug, Deserialize)]
pub struct PendulumInstance {
    pub id: String,
    pub method: IntegrationMethod,
}
