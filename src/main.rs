// src/main.rs

use std::error::Error;
use std::io::Write;

mod config;
mod math;
mod models;
mod simulation;

use crate::simulation::csv::{create_csv_row, setup_csv_output};
use crate::simulation::framework::{execute_simulation_step, initialize_simulation_state};
use crate::simulation::load_parameters::{load_pendulum_parameters, load_scenario};

fn main() -> Result<(), Box<dyn Error>> {
    // 設定とシナリオの読み込み
    let parameters = load_pendulum_parameters("config/parameters.yaml")?;
    let scenario = load_scenario("config/scenario.yaml")?;

    // シミュレーションステートの初期化
    let mut state = initialize_simulation_state(&parameters, &scenario)?;

    // CSV出力の設定
    std::fs::create_dir_all("output")?;
    let mut writer: Box<dyn Write> = setup_csv_output("output/simulation_results.csv", &state)?;

    // シミュレーションのメインループ
    for _cycle in 0..scenario.cycles {
        // シミュレーションステップの実行
        execute_simulation_step(&mut state);

        // CSV行の作成と書き込み
        let row = create_csv_row(&state);
        writer.write_all(row.as_bytes())?;
    }

    Ok(())
}
