// src/models/pendulum.rs

use serde::Deserialize;

use crate::math::{analytic_angle, euler_step, runge_kutta4_step};

/// 積分手法の種別
///
/// 各振り子は生成時にいずれか1つの手法に束縛され、実行中に変更されない。
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMethod {
    Analytical,
    Euler,
    RungeKutta4,
}

/// 振り子の構造体
#[derive(Debug, Clone, PartialEq)]
pub struct Pendulum {
    pub id: String,
    pub method: IntegrationMethod, // 積分手法
    pub theta: f64,                // 角度（rad）
    pub omega: f64,                // 角速度（rad/s）
}

/// 振り子の状態を1ステップ進める純粋な関数
///
/// 手法ごとの更新規則:
/// - Analytical: θ = θ0·cos(β·t_next)。線形化方程式の厳密解であり、ω は使用しない。
/// - Euler: 前進オイラー法。θ・ω とも更新前の値から増分を計算する。
/// - RungeKutta4: 古典的4次ルンゲ・クッタ法。
///
/// # 引数
/// - `pendulum`: 現在の振り子のデータ
/// - `t_next`: ステップ後のシミュレーション時刻（解析解の評価時刻）
/// - `theta0`: 初期振幅（rad）
/// - `beta`: sqrt(g/L)
/// - `beta2`: β²
/// - `h`: 時間ステップ
///
/// # 戻り値
/// - 更新後の振り子のデータ
pub fn step_pendulum(
    pendulum: &Pendulum,
    t_next: f64,
    theta0: f64,
    beta: f64,
    beta2: f64,
    h: f64,
) -> Pendulum {
    let (new_theta, new_omega) = match pendulum.method {
        IntegrationMethod::Analytical => (analytic_angle(theta0, beta, t_next), pendulum.omega),
        IntegrationMethod::Euler => euler_step(pendulum.theta, pendulum.omega, beta2, h),
        IntegrationMethod::RungeKutta4 => {
            runge_kutta4_step(pendulum.theta, pendulum.omega, beta2, h)
        }
    };

    Pendulum {
        id: pendulum.id.clone(),
        method: pendulum.method,
        theta: new_theta,
        omega: new_omega,
    }
}
