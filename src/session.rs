//! 会话帧处理器模块
//!
//! `GestureSession` 显式持有一个会话的全部可变状态（眉高基准与三个
//! 检测器），逐帧同步调用，无 I/O、无内部加锁；外部驱动保证一次
//! `process_frame` 结束后才会有下一次调用。多个会话实例相互独立。
//!
//! 每帧流程：按拓扑取点 → 计算 EAR / MAR / 眉高比 → 更新基准 →
//! 送入各检测器 → 返回三个累计计数。

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::baseline::BaselineTracker;
use crate::config::GestureConfig;
use crate::detector::{Comparison, DetectorConfig, EventDetector};
use crate::error::FrameError;
use crate::geometry::{self, Point};
use crate::topology::LandmarkTopology;

/// 三个累计事件计数
///
/// 会话生命周期内单调不减，每个处理帧返回一次。
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureCounts {
    pub eye_blinks: u32,
    pub mouth_openings: u32,
    pub eyebrow_raises: u32,
}

/// 会话状态快照
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub eye_blinks: u32,
    pub mouth_openings: u32,
    pub eyebrow_raises: u32,
    /// 当前眉高基准，首个有效帧之前为 None
    pub eyebrow_baseline: Option<f64>,
}

/// 手势事件检测会话
pub struct GestureSession {
    topology: LandmarkTopology,
    baseline: BaselineTracker,
    eye: EventDetector,
    mouth: EventDetector,
    eyebrow: EventDetector,
}

impl GestureSession {
    pub fn new(config: &GestureConfig, topology: LandmarkTopology) -> Self {
        Self {
            topology,
            baseline: BaselineTracker::new(config.baseline_alpha),
            eye: EventDetector::new(DetectorConfig {
                threshold: config.eye_ar_threshold,
                consecutive_frames: config.eye_consec_frames,
                comparison: Comparison::Below,
                latching: false,
            }),
            mouth: EventDetector::new(DetectorConfig {
                threshold: config.mouth_ar_threshold,
                consecutive_frames: 1,
                comparison: Comparison::Above,
                latching: true,
            }),
            // 眉检测器吃基准相对比值 current / baseline，
            // 阈值即 1 + 相对阈值
            eyebrow: EventDetector::new(DetectorConfig {
                threshold: 1.0 + config.eyebrow_raise_threshold,
                consecutive_frames: config.eyebrow_consec_frames,
                comparison: Comparison::Above,
                latching: true,
            }),
        }
    }

    /// 处理一帧关键点，返回累计计数
    ///
    /// 空帧表示本帧未检测到人脸：静默跳过，计数与去抖状态均不变。
    /// 拓扑索引超出帧内点数时返回错误，且不改动任何状态。
    pub fn process_frame(&mut self, frame: &[Point]) -> Result<GestureCounts, FrameError> {
        if frame.is_empty() {
            return Ok(self.counts());
        }

        let right = extract(frame, &self.topology.right_eye)?;
        let left = extract(frame, &self.topology.left_eye)?;
        let mouth = extract(frame, &self.topology.mouth)?;
        let eyebrow = fetch(frame, self.topology.eyebrow)?;
        let nose_bridge = fetch(frame, self.topology.nose_bridge)?;
        let nose_bottom = fetch(frame, self.topology.nose_bottom)?;
        let chin = fetch(frame, self.topology.chin)?;

        let ear = (geometry::eye_aspect_ratio(&left) + geometry::eye_aspect_ratio(&right)) / 2.0;
        let mar = geometry::mouth_aspect_ratio(&mouth);
        let brow = geometry::eyebrow_ratio(&eyebrow, &nose_bridge, &nose_bottom, &chin);

        // 退化几何（分母距离过小得到 NaN，或眉高比不为正）会污染基准
        // 与计数，整帧按无人脸处理
        if !ear.is_finite() || !mar.is_finite() || !brow.is_finite() || brow <= 0.0 {
            tracing::debug!(ear, mar, brow, "degenerate frame skipped");
            return Ok(self.counts());
        }

        let baseline = self.baseline.update(brow);

        if self.eye.update(ear) {
            tracing::debug!(total = self.eye.total(), "eye blink detected");
        }
        if self.mouth.update(mar) {
            tracing::debug!(total = self.mouth.total(), "mouth opening detected");
        }
        if self.eyebrow.update(brow / baseline) {
            tracing::debug!(total = self.eyebrow.total(), "eyebrow raise detected");
        }

        Ok(self.counts())
    }

    pub fn counts(&self) -> GestureCounts {
        GestureCounts {
            eye_blinks: self.eye.total(),
            mouth_openings: self.mouth.total(),
            eyebrow_raises: self.eyebrow.total(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            eye_blinks: self.eye.total(),
            mouth_openings: self.mouth.total(),
            eyebrow_raises: self.eyebrow.total(),
            eyebrow_baseline: self.baseline.value(),
        }
    }

    /// 当前眉高基准
    pub fn baseline(&self) -> Option<f64> {
        self.baseline.value()
    }

    pub fn topology(&self) -> &LandmarkTopology {
        &self.topology
    }

    /// 重置会话状态，计数与基准归零
    pub fn reset(&mut self) {
        self.baseline.reset();
        self.eye.reset();
        self.mouth.reset();
        self.eyebrow.reset();
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new(&GestureConfig::default(), LandmarkTopology::default())
    }
}

fn extract<const N: usize>(frame: &[Point], indices: &[usize; N]) -> Result<[Point; N], FrameError> {
    let mut out = [Point::new(0.0, 0.0); N];
    for (slot, &index) in out.iter_mut().zip(indices) {
        *slot = fetch(frame, index)?;
    }
    Ok(out)
}

fn fetch(frame: &[Point], index: usize) -> Result<Point, FrameError> {
    frame
        .get(index)
        .copied()
        .ok_or(FrameError::LandmarkOutOfRange {
            index,
            len: frame.len(),
        })
}
