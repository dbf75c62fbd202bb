//! 事件检测器模块
//!
//! 单一参数化状态机，从连续信号中产生去抖后的离散事件，
//! 统一眼、嘴、眉三路信号原本各自重复的阈值-计数逻辑。
//!
//! 两种触发时机：
//! - 非锁存（眨眼）：条件持续为真时累计帧数，在条件恢复为假的那一帧，
//!   若累计帧数达到要求则发出一次事件，计数随即清零。
//! - 锁存（张嘴 / 挑眉）：条件连续满足达到要求帧数的那一帧发出事件并锁存，
//!   锁存期间不再触发；条件为假时解除锁存并清零计数，允许下一轮事件。

use serde::{Deserialize, Serialize};

/// 信号与阈值的比较方向
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparison {
    /// 信号低于阈值时条件成立（EAR 低于闭眼阈值）
    Below,
    /// 信号高于阈值时条件成立（MAR 超过张嘴阈值）
    Above,
}

impl Comparison {
    /// NaN 对两种方向都不成立，视为条件为假
    fn is_active(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::Below => value < threshold,
            Comparison::Above => value > threshold,
        }
    }
}

/// 检测器参数
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectorConfig {
    pub threshold: f64,
    /// 触发事件所需的最少连续满足帧数，至少为 1
    pub consecutive_frames: u32,
    pub comparison: Comparison,
    /// true 为锁存模式（触发即发），false 为非锁存（释放时发）
    pub latching: bool,
}

/// 去抖阈值事件检测器
pub struct EventDetector {
    config: DetectorConfig,
    /// 连续满足条件的帧数，条件为假时清零
    consecutive: u32,
    /// 锁存标志，仅锁存模式使用
    latched: bool,
    /// 会话内累计事件数，单调不减
    total: u32,
}

impl EventDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            consecutive: 0,
            latched: false,
            total: 0,
        }
    }

    /// 送入当前帧信号值，返回本帧是否发出事件
    pub fn update(&mut self, value: f64) -> bool {
        if self.config.comparison.is_active(value, self.config.threshold) {
            self.consecutive += 1;
            if self.config.latching
                && !self.latched
                && self.consecutive >= self.config.consecutive_frames
            {
                self.latched = true;
                self.total += 1;
                return true;
            }
            false
        } else {
            let fired =
                !self.config.latching && self.consecutive >= self.config.consecutive_frames;
            self.consecutive = 0;
            self.latched = false;
            if fired {
                self.total += 1;
            }
            fired
        }
    }

    /// 累计事件数
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn consecutive(&self) -> u32 {
        self.consecutive
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// 重置全部状态，包括累计计数
    pub fn reset(&mut self) {
        self.consecutive = 0;
        self.latched = false;
        self.total = 0;
    }
}
