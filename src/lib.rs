//! 面部手势事件检测 WASM 库
//!
//! 接收外部人脸关键点检测器（如 MediaPipe FaceLandmarker）输出的
//! 逐帧二维关键点坐标，从连续的几何比值中识别离散行为事件：
//! 眨眼、张嘴、挑眉。关键点推理、摄像头采集与画面渲染都在宿主侧完成，
//! 本库只实现事件检测状态机，编译为 WebAssembly 在浏览器端逐帧调用。
//!
//! ## 模块
//! - `geometry`: 距离与比值计算（EAR / MAR / 眉高比）
//! - `baseline`: 中性眉高基准的指数平滑跟踪
//! - `detector`: 参数化的去抖阈值事件检测器
//! - `topology`: 关键点索引拓扑映射
//! - `config`: 校准参数
//! - `session`: 单会话帧处理器
//! - `error`: 帧契约错误

pub mod baseline;
pub mod config;
pub mod detector;
pub mod error;
pub mod geometry;
pub mod session;
pub mod topology;

// 重新导出核心类型，方便外部使用
pub use baseline::BaselineTracker;
pub use config::GestureConfig;
pub use detector::{Comparison, DetectorConfig, EventDetector};
pub use error::FrameError;
pub use geometry::Point;
pub use session::{GestureCounts, GestureSession, SessionSnapshot};
pub use topology::LandmarkTopology;

use wasm_bindgen::prelude::*;

/// 面向 JS 的手势跟踪器
///
/// 封装单个 [`GestureSession`]，逐帧接收扁平化的 (x, y) 坐标数组。
#[wasm_bindgen]
pub struct GestureTracker {
    session: GestureSession,
}

#[wasm_bindgen]
impl GestureTracker {
    /// 创建跟踪器
    ///
    /// # 参数
    /// - `config`: 可选校准参数对象（camelCase 字段），缺省用默认标定值
    /// - `topology`: 可选关键点拓扑对象，缺省为 MediaPipe FaceLandmarker 拓扑
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, topology: JsValue) -> Result<GestureTracker, JsError> {
        let config: GestureConfig = if config.is_undefined() || config.is_null() {
            GestureConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))?
        };
        config.validate().map_err(|e| JsError::new(&e))?;

        let topology: LandmarkTopology = if topology.is_undefined() || topology.is_null() {
            LandmarkTopology::default()
        } else {
            serde_wasm_bindgen::from_value(topology).map_err(|e| JsError::new(&e.to_string()))?
        };

        Ok(Self {
            session: GestureSession::new(&config, topology),
        })
    }

    /// 处理一帧关键点，返回三个累计计数
    ///
    /// 输入为与拓扑一致的扁平坐标数组 `[x0, y0, x1, y1, ...]`；
    /// 空数组表示本帧未检测到人脸，状态原样保留。
    #[wasm_bindgen(js_name = "processFrame")]
    pub fn process_frame(&mut self, landmarks: &js_sys::Float64Array) -> Result<GestureCounts, JsError> {
        let flat = landmarks.to_vec();
        if flat.len() % 2 != 0 {
            return Err(FrameError::OddCoordinateCount { len: flat.len() }.into());
        }

        let points: Vec<Point> = flat
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
            .collect();

        Ok(self.session.process_frame(&points)?)
    }

    /// 当前累计计数
    #[wasm_bindgen(js_name = "getCounts")]
    pub fn get_counts(&self) -> GestureCounts {
        self.session.counts()
    }

    /// 当前眉高基准，首个有效帧之前为 undefined
    #[wasm_bindgen(js_name = "getBaseline")]
    pub fn get_baseline(&self) -> Option<f64> {
        self.session.baseline()
    }

    /// 以 JS 对象形式返回状态快照
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.session.snapshot()).unwrap_or(JsValue::NULL)
    }

    /// 重置会话状态，计数与基准归零
    pub fn reset(&mut self) {
        self.session.reset();
    }
}
