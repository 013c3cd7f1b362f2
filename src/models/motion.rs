// src/models/motion.rs

use crate::models::pendulum::{step_pendulum, Pendulum};

/// 全振り子の更新処理
///
/// 各振り子に束縛された積分手法を適用し、更新後の振り子列を返す。
/// 振り子同士は独立であり、相互作用はない。
///
/// # 引数
/// - `pendulums`: 現在の振り子列
/// - `t_next`: ステップ後のシミュレーション時刻
/// - `theta0`: 初期振幅（rad）
/// - `beta`: sqrt(g/L)
/// - `beta2`: β²
/// - `h`: 時間ステップ
pub fn update_pendulums(
    pendulums: &[Pendulum],
    t_next: f64,
    theta0: f64,
    beta: f64,
    beta2: f64,
    h: f64,
) -> Vec<Pendulum> {
    pendulums
        .iter()
        .map(|pendulum| step_pendulum(pendulum, t_next, theta0, beta, beta2, h))
        .collect()
}
