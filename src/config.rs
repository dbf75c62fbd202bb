//! 校准参数模块
//!
//! 所有阈值与帧数要求都是配置常量而非推导值，默认值来自实际标定。
//! 运行期重新配置不在范围内，参数在会话构造时一次性生效。

use serde::{Deserialize, Serialize};

/// EAR 低于此值视为闭眼
pub const DEFAULT_EYE_AR_THRESHOLD: f64 = 0.23;

/// 构成一次眨眼所需的最少连续闭眼帧数
pub const DEFAULT_EYE_CONSEC_FRAMES: u32 = 2;

/// MAR 超过此值视为张嘴
pub const DEFAULT_MOUTH_AR_THRESHOLD: f64 = 0.5;

/// 挑眉相对阈值：当前眉高比超出基准的比例
pub const DEFAULT_EYEBROW_RAISE_THRESHOLD: f64 = 0.09;

/// 构成一次挑眉所需的最少连续帧数
pub const DEFAULT_EYEBROW_CONSEC_FRAMES: u32 = 1;

/// 基准指数平滑中新观测值的权重，时间常数约 20 帧
pub const DEFAULT_BASELINE_ALPHA: f64 = 0.05;

/// 手势检测校准参数
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GestureConfig {
    pub eye_ar_threshold: f64,
    pub eye_consec_frames: u32,
    pub mouth_ar_threshold: f64,
    pub eyebrow_raise_threshold: f64,
    pub eyebrow_consec_frames: u32,
    pub baseline_alpha: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            eye_ar_threshold: DEFAULT_EYE_AR_THRESHOLD,
            eye_consec_frames: DEFAULT_EYE_CONSEC_FRAMES,
            mouth_ar_threshold: DEFAULT_MOUTH_AR_THRESHOLD,
            eyebrow_raise_threshold: DEFAULT_EYEBROW_RAISE_THRESHOLD,
            eyebrow_consec_frames: DEFAULT_EYEBROW_CONSEC_FRAMES,
            baseline_alpha: DEFAULT_BASELINE_ALPHA,
        }
    }
}

impl GestureConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.eye_ar_threshold.is_finite() || self.eye_ar_threshold <= 0.0 {
            return Err(format!(
                "eyeArThreshold must be a positive number, got {}",
                self.eye_ar_threshold
            ));
        }
        if self.eye_consec_frames == 0 {
            return Err("eyeConsecFrames must be at least 1".to_string());
        }
        if !self.mouth_ar_threshold.is_finite() || self.mouth_ar_threshold <= 0.0 {
            return Err(format!(
                "mouthArThreshold must be a positive number, got {}",
                self.mouth_ar_threshold
            ));
        }
        if !self.eyebrow_raise_threshold.is_finite() || self.eyebrow_raise_threshold <= 0.0 {
            return Err(format!(
                "eyebrowRaiseThreshold must be a positive number, got {}",
                self.eyebrow_raise_threshold
            ));
        }
        if self.eyebrow_consec_frames == 0 {
            return Err("eyebrowConsecFrames must be at least 1".to_string());
        }
        if !self.baseline_alpha.is_finite()
            || self.baseline_alpha <= 0.0
            || self.baseline_alpha > 1.0
        {
            return Err(format!(
                "baselineAlpha must be in (0, 1], got {}",
                self.baseline_alpha
            ));
        }
        Ok(())
    }
}
