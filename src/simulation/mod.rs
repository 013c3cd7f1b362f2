// src/simulation/mod.rs

pub mod csv;
pub mod error;
pub mod framework;
pub mod history;
pub mod load_parameters;

use crate::models::pendulum::Pendulum;
use crate::simulation::history::AngleHistory;

/// シミュレーションの全体状態を表す構造体
///
/// 生成後、time・pendulums・histories のみが advance ごとに変化する。
/// 物理定数（theta0, beta, beta2）とステップ幅は生成時に固定される。
pub struct SimulationState {
    pub time: f64,                     // シミュレーション時刻 (s)
    pub step: f64,                     // 時間ステップ h (s)
    pub theta0: f64,                   // 初期振幅（rad）
    pub beta: f64,                     // sqrt(g/L)
    pub beta2: f64,                    // β²
    pub pendulums: Vec<Pendulum>,      // 各振り子の状態
    pub histories: Vec<AngleHistory>,  // 各振り子の角度履歴
}
