// src/math/integrator.rs

/// 振り子の運動方程式 θ'' = -β²·sin(θ) を一階連立系に直した導関数
///
/// y' = f1(θ, ω) = ω
fn f1(_theta: f64, omega: f64) -> f64 {
    omega
}

/// z' = f2(θ, ω) = -β²·sin(θ)
fn f2(beta2: f64, theta: f64, _omega: f64) -> f64 {
    -beta2 * theta.sin()
}

/// 線形化方程式（小角近似）の厳密解
///
/// # 引数
/// - `theta0`: 初期振幅（rad）
/// - `beta`: 固有角振動数係数 sqrt(g/L)
/// - `t`: シミュレーション時刻
///
/// # 戻り値
/// - 時刻 t における角度 θ = θ0·cos(β·t)
pub fn analytic_angle(theta0: f64, beta: f64, t: f64) -> f64 {
    theta0 * (beta * t).cos()
}

/// 前進オイラー法による1ステップ積分
///
/// 両方の増分は更新前の (θ, ω) から計算する（逐次更新ではない）。
///
/// # 引数
/// - `theta`: 現在の角度（rad）
/// - `omega`: 現在の角速度（rad/s）
/// - `beta2`: β²（= g/L）
/// - `h`: 時間ステップ
///
/// # 戻り値
/// - 更新後の (θ, ω)
pub fn euler_step(theta: f64, omega: f64, beta2: f64, h: f64) -> (f64, f64) {
    let d_theta = h * f1(theta, omega);
    let d_omega = h * f2(beta2, theta, omega);
    (theta + d_theta, omega + d_omega)
}

/// 古典的4次ルンゲ・クッタ法による1ステップ積分
///
/// 4組のステージ (k1,l1)…(k4,l4) を評価し、重み付き平均で合成する。
///
/// # 引数
/// - `theta`: 現在の角度（rad）
/// - `omega`: 現在の角速度（rad/s）
/// - `beta2`: β²（= g/L）
/// - `h`: 時間ステップ
///
/// # 戻り値
/// - 更新後の (θ, ω)
pub fn runge_kutta4_step(theta: f64, omega: f64, beta2: f64, h: f64) -> (f64, f64) {
    let k1 = h * f1(theta, omega);
    let l1 = h * f2(beta2, theta, omega);
    let k2 = h * f1(theta + k1 / 2.0, omega + l1 / 2.0);
    let l2 = h * f2(beta2, theta + k1 / 2.0, omega + l1 / 2.0);
    let k3 = h * f1(theta + k2 / 2.0, omega + l2 / 2.0);
    let l3 = h * f2(beta2, theta + k2 / 2.0, omega + l2 / 2.0);
    let k4 = h * f1(theta + k3, omega + l3);
    let l4 = h * f2(beta2, theta + k3, omega + l3);

    (
        theta + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0,
        omega + (l1 + 2.0 * l2 + 2.0 * l3 + l4) / 6.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// test_analytic_angle_initial
    /// t = 0 では cos(0) = 1 のため、角度は初期振幅 θ0 に等しい。
    #[test]
    fn test_analytic_angle_initial() {
        let theta0 = std::f64::consts::PI / 3.0;
        let beta = (9.8_f64 / 250.0).sqrt();
        let angle = analytic_angle(theta0, beta, 0.0);

        assert!((angle - theta0).abs() < 1e-12);
    }

    /// test_analytic_angle_one_period
    /// 1周期 T = 2π/β の後、角度は初期振幅に戻る。
    #[test]
    fn test_analytic_angle_one_period() {
        let theta0 = std::f64::consts::PI / 3.0;
        let beta = (9.8_f64 / 250.0).sqrt();
        let period = 2.0 * std::f64::consts::PI / beta;
        let angle = analytic_angle(theta0, beta, period);

        assert!((angle - theta0).abs() < 1e-9);
    }

    /// test_euler_step_from_rest
    /// 静止状態 (θ0, 0) からの初回ステップでは ω = 0 のため θ は変化せず、
    /// ω のみ h·(-β²·sin(θ0)) だけ変化する。
    #[test]
    fn test_euler_step_from_rest() {
        let theta0 = std::f64::consts::PI / 3.0;
        let beta2 = 9.8 / 250.0;
        let h = 0.2;
        let (theta, omega) = euler_step(theta0, 0.0, beta2, h);

        let expected_omega = h * (-beta2 * theta0.sin()); // 0.2 * (-0.0392 * sin(π/3))

        assert!((theta - theta0).abs() < 1e-12);
        assert!((omega - expected_omega).abs() < 1e-12);
    }

    /// test_euler_step_uses_pre_update_values
    /// ω の増分は更新後ではなく更新前の θ から計算されることを確認する。
    /// θ_new = 1.0 + 0.1*2.0 = 1.2、ω_new = 2.0 + 0.1*(-β²·sin(1.0))。
    #[test]
    fn test_euler_step_uses_pre_update_values() {
        let beta2 = 0.5;
        let h = 0.1;
        let (theta, omega) = euler_step(1.0, 2.0, beta2, h);

        let expected_theta = 1.0 + 0.1 * 2.0;
        let expected_omega = 2.0 + 0.1 * (-0.5 * 1.0_f64.sin()); // sin(1.2) ではない

        assert!((theta - expected_theta).abs() < 1e-12);
        assert!((omega - expected_omega).abs() < 1e-12);

        let sequential_omega = 2.0 + 0.1 * (-0.5 * 1.2_f64.sin());
        assert!((omega - sequential_omega).abs() > 1e-6);
    }

    /// test_runge_kutta4_step_from_rest
    /// 静止状態からの初回ステップでは k1 = 0 だが k2 以降が θ を動かすため、
    /// RK4 の θ はオイラー法の θ（変化なし）と異なる。
    #[test]
    fn test_runge_kutta4_step_from_rest() {
        let theta0 = std::f64::consts::PI / 3.0;
        let beta2 = 9.8 / 250.0;
        let h = 0.2;
        let (rk_theta, rk_omega) = runge_kutta4_step(theta0, 0.0, beta2, h);
        let (euler_theta, _) = euler_step(theta0, 0.0, beta2, h);

        assert!((rk_theta - euler_theta).abs() > 1e-9);
        assert!(rk_theta < theta0); // 復元力により角度は減少する
        assert!(rk_omega < 0.0);
    }

    /// test_runge_kutta4_tracks_linear_solution
    /// 小さい振幅では sin(θ) ≈ θ となり、RK4 の軌道は線形化方程式の
    /// 厳密解 θ0·cos(β·t) にほぼ一致する。
    #[test]
    fn test_runge_kutta4_tracks_linear_solution() {
        let theta0 = 1e-3;
        let beta2 = 9.8_f64 / 250.0;
        let beta = beta2.sqrt();
        let h = 0.01;

        let mut theta = theta0;
        let mut omega = 0.0;
        for _ in 0..1000 {
            let (next_theta, next_omega) = runge_kutta4_step(theta, omega, beta2, h);
            theta = next_theta;
            omega = next_omega;
        }

        let exact = analytic_angle(theta0, beta, 1000.0 * h);
        assert!((theta - exact).abs() < 1e-9);
    }

    /// test_euler_error_grows_faster_than_rk4
    /// 同一の非線形方程式に対し、ステップ幅を大きくするとオイラー法と RK4 の
    /// 軌道差は拡大する（定性的な回帰テスト）。
    #[test]
    fn test_euler_error_grows_faster_than_rk4() {
        let theta0 = std::f64::consts::PI / 3.0;
        let beta2 = 9.8 / 250.0;
        let horizon = 10.0;

        let divergence = |h: f64| {
            let steps = (horizon / h).round() as usize;
            let (mut et, mut eo) = (theta0, 0.0_f64);
            let (mut rt, mut ro) = (theta0, 0.0_f64);
            for _ in 0..steps {
                let (t1, o1) = euler_step(et, eo, beta2, h);
                et = t1;
                eo = o1;
                let (t2, o2) = runge_kutta4_step(rt, ro, beta2, h);
                rt = t2;
                ro = o2;
            }
            (et - rt).abs()
        };

        let small = divergence(0.01);
        let large = divergence(0.5);

        assert!(small < 5e-3);
        assert!(large > small);
    }
}
