// src/simulation/framework.rs

use crate::config::{PendulumParameters, Scenario};
use crate::models::motion::update_pendulums;
use crate::models::pendulum::Pendulum;
use crate::simulation::error::SimulationError;
use crate::simulation::history::{AngleHistory, AngleSample};
use crate::simulation::SimulationState;

/// シミュレーションステートの初期化
///
/// 設定を検証し、t = 0、θ = θ0、ω = 0、履歴は空の初期状態を構築する。
/// β = sqrt(g/L) と β² はここで一度だけ計算され、以後変化しない。
///
/// # エラー
/// - 振り子が0個、step ≤ 0、arm_length ≤ 0、gravity ≤ 0、data_size = 0 の
///   いずれかの場合は `SimulationError::InvalidConfiguration`
pub fn initialize_simulation_state(
    parameters: &PendulumParameters,
    scenario: &Scenario,
) -> Result<SimulationState, SimulationError> {
    if scenario.pendulums.is_empty() {
        return Err(SimulationError::InvalidConfiguration(
            "振り子が1つも定義されていません".to_string(),
        ));
    }
    if scenario.step <= 0.0 {
        return Err(SimulationError::InvalidConfiguration(format!(
            "step は正の値でなければなりません: {}",
            scenario.step
        )));
    }
    if parameters.arm_length <= 0.0 {
        return Err(SimulationError::InvalidConfiguration(format!(
            "arm_length は正の値でなければなりません: {}",
            parameters.arm_length
        )));
    }
    if parameters.gravity <= 0.0 {
        return Err(SimulationError::InvalidConfiguration(format!(
            "gravity は正の値でなければなりません: {}",
            parameters.gravity
        )));
    }
    if scenario.data_size == 0 {
        return Err(SimulationError::InvalidConfiguration(
            "data_size は正の値でなければなりません".to_string(),
        ));
    }

    let beta = (parameters.gravity / parameters.arm_length).sqrt();

    // 振り子の初期化
    let pendulums: Vec<Pendulum> = scenario
        .pendulums
        .iter()
        .map(|p| Pendulum {
            id: p.id.clone(),
            method: p.method,
            theta: parameters.theta0,
            omega: 0.0,
        })
        .collect();

    // 履歴バッファの初期化
    let histories: Vec<AngleHistory> = pendulums
        .iter()
        .map(|_| AngleHistory::new(scenario.data_size))
        .collect();

    Ok(SimulationState {
        time: 0.0,
        step: scenario.step,
        theta0: parameters.theta0,
        beta,
        beta2: beta * beta,
        pendulums,
        histories,
    })
}

/// シミュレーションステップの実行
///
/// 全振り子を1ステップ進め、各振り子の (ステップ前時刻, 新しい角度) を
/// 履歴に追加した後、時刻を h だけ進める。解析解の振り子はステップ後の
/// 時刻で評価されるため、currentAngle は常に θ0·cos(β·t) と一致する。
///
/// NaN 検査やクランプは行わない。ステップ幅が特性時間 1/β に比べて
/// 大きすぎる場合（例: h = 100）、オイラー法・RK4 の値は非有限になる。
pub fn execute_simulation_step(state: &mut SimulationState) {
    let t_next = state.time + state.step;

    state.pendulums = update_pendulums(
        &state.pendulums,
        t_next,
        state.theta0,
        state.beta,
        state.beta2,
        state.step,
    );

    // 履歴への追加（サンプル時刻はステップ前の時刻）
    for (pendulum, history) in state.pendulums.iter().zip(state.histories.iter_mut()) {
        history.push(state.time, pendulum.theta);
    }

    state.time = t_next;
}

/// 振り子 i の現在角度
pub fn current_angle(state: &SimulationState, index: usize) -> Result<f64, SimulationError> {
    state
        .pendulums
        .get(index)
        .map(|p| p.theta)
        .ok_or(SimulationError::IndexOutOfRange {
            index,
            count: state.pendulums.len(),
        })
}

/// 振り子 i の角度履歴のスナップショット（古い順）
pub fn angle_history(
    state: &SimulationState,
    index: usize,
) -> Result<Vec<AngleSample>, SimulationError> {
    state
        .histories
        .get(index)
        .map(|h| h.snapshot())
        .ok_or(SimulationError::IndexOutOfRange {
            index,
            count: state.pendulums.len(),
        })
}

/// 現在のシミュレーション時刻
pub fn current_time(state: &SimulationState) -> f64 {
    state.time
}
