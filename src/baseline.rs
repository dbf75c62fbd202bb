//! 眉高基准跟踪模块
//!
//! 中性眉高没有全体通用的常数，随脸型、坐姿逐人逐会话漂移，
//! 因此用指数滑动平均维护一个缓慢自适应的基准值，挑眉检测以
//! 相对该基准的超出比例为条件。
//!
//! 首帧直接用观测值初始化，隐含假设用户以中性表情开始会话；
//! 若首帧已经挑眉，整个会话的基准会被污染。这是已知精度限制，
//! 按原始行为保留。

/// 中性比值基准跟踪器
///
/// `update` 的平滑公式: baseline = baseline * (1 - alpha) + ratio * alpha，
/// alpha 默认 0.05，时间常数约 20 帧。
pub struct BaselineTracker {
    baseline: Option<f64>,
    alpha: f64,
}

impl BaselineTracker {
    /// # 参数
    /// - `alpha`: 新观测值的权重，取值 (0, 1]
    pub fn new(alpha: f64) -> Self {
        Self {
            baseline: None,
            alpha,
        }
    }

    /// 送入当前帧比值，返回更新后的基准
    pub fn update(&mut self, ratio: f64) -> f64 {
        let next = match self.baseline {
            None => ratio,
            Some(prev) => prev * (1.0 - self.alpha) + ratio * self.alpha,
        };
        self.baseline = Some(next);
        next
    }

    /// 当前基准值，首帧之前为 None
    pub fn value(&self) -> Option<f64> {
        self.baseline
    }

    pub fn is_initialized(&self) -> bool {
        self.baseline.is_some()
    }

    /// 重置为未初始化状态
    pub fn reset(&mut self) {
        self.baseline = None;
    }
}
