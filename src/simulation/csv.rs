// src/simulation/csv.rs

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;

use crate::simulation::SimulationState;

/// CSV出力の設定とヘッダーの書き込み
pub fn setup_csv_output(
    path: &str,
    state: &SimulationState,
) -> Result<Box<dyn Write>, Box<dyn Error>> {
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_csv_header(&mut writer, state)?;
    Ok(Box::new(writer))
}

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(
    writer: &mut W,
    state: &SimulationState,
) -> Result<(), std::io::Error> {
    let mut header = String::from("time(s)");

    // 振り子ごとの角度列
    for pendulum in &state.pendulums {
        header.push_str(&format!(",{}_theta(rad)", pendulum.id));
    }

    header.push('\n');
    writer.write_all(header.as_bytes())?;
    Ok(())
}

/// CSV行の作成
pub fn create_csv_row(state: &SimulationState) -> String {
    let mut row = format!("{}", state.time);

    // 各振り子の現在角度
    for pendulum in &state.pendulums {
        row.push_str(&format!(",{}", pendulum.theta));
    }

    row.push('\n');
    row
}
