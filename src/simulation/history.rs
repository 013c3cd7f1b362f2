// src/simulation/history.rs

use std::collections::VecDeque;

/// 履歴バッファの1サンプル
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSample {
    pub time: f64,  // サンプル時刻 (s)
    pub angle: f64, // 角度（rad）
}

/// 直近 data_size 件の (時刻, 角度) を保持する固定容量のリングバッファ
///
/// 容量を超える push では最古のサンプルを O(1) で追い出す（FIFO）。
#[derive(Debug, Clone, PartialEq)]
pub struct AngleHistory {
    capacity: usize,
    samples: VecDeque<AngleSample>,
}

impl AngleHistory {
    /// 容量 capacity の空バッファを生成する。capacity > 0 は呼び出し側
    /// （設定検証）が保証する。
    pub fn new(capacity: usize) -> Self {
        AngleHistory {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    /// サンプルを末尾に追加する。容量超過時は先頭（最古）を取り除く。
    pub fn push(&mut self, time: f64, angle: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(AngleSample { time, angle });
    }

    /// 現時点のサンプル列のコピーを古い順で返す。
    /// 返された列はその後のバッファ更新の影響を受けない。
    pub fn snapshot(&self) -> Vec<AngleSample> {
        self.samples.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 最古のサンプル（空なら None）
    pub fn oldest(&self) -> Option<AngleSample> {
        self.samples.front().copied()
    }
}
