//! 关键点拓扑映射模块
//!
//! 外部关键点检测器按固定拓扑输出有编号的点序列，核心算法通过本表
//! 按名取点。索引方案是检测器侧的外部契约；把它做成可替换的配置表，
//! 换用其它关键点来源时不需要改动事件检测逻辑本身。
//!
//! 默认值为 MediaPipe FaceLandmarker 的 478 点拓扑。

use serde::{Deserialize, Serialize};

/// 关键点索引映射表
///
/// 眼部六点的顺序约定为 `[外眦, 上睑1, 上睑2, 内眦, 下睑1, 下睑2]`，
/// 嘴部四点为 `[左嘴角, 右嘴角, 上唇, 下唇]`。
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LandmarkTopology {
    pub right_eye: [usize; 6],
    pub left_eye: [usize; 6],
    pub mouth: [usize; 4],
    /// 眉心点（默认取左眉中点）
    pub eyebrow: usize,
    pub nose_bridge: usize,
    pub nose_bottom: usize,
    pub chin: usize,
}

impl Default for LandmarkTopology {
    fn default() -> Self {
        Self {
            right_eye: [33, 160, 158, 133, 153, 144],
            left_eye: [362, 385, 387, 263, 373, 380],
            mouth: [61, 291, 13, 14],
            eyebrow: 105,
            nose_bridge: 6,
            nose_bottom: 2,
            chin: 152,
        }
    }
}

impl LandmarkTopology {
    /// 本拓扑引用到的最大索引，可用于预先校验帧长度
    pub fn max_index(&self) -> usize {
        let singles = [self.eyebrow, self.nose_bridge, self.nose_bottom, self.chin];
        self.right_eye
            .iter()
            .chain(self.left_eye.iter())
            .chain(self.mouth.iter())
            .chain(singles.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }
}
