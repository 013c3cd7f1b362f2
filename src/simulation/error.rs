// src/simulation/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("シミュレーション設定が不正です: {0}")]
    InvalidConfiguration(String),
    #[error("振り子のインデックスが範囲外です: {index}（振り子数: {count}）")]
    IndexOutOfRange { index: usize, count: usize },
}
