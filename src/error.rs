//! 帧契约错误

use thiserror::Error;

/// 关键点帧违反输入契约时的错误
///
/// 缺帧（本帧未检测到人脸）不是错误，由会话静默跳过；
/// 拓扑引用的索引超出帧内点数、或扁平坐标数组长度为奇数，
/// 属于检测器集成侧的契约违规，直接上抛给调用方而不是兜底取值。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("landmark index {index} out of range: frame has {len} points")]
    LandmarkOutOfRange { index: usize, len: usize },
    #[error("flat coordinate array has odd length {len}, expected x,y pairs")]
    OddCoordinateCount { len: usize },
}
