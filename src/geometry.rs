//! 几何计算模块
//!
//! 提供从二维面部关键点计算各种形状比值的纯函数：
//! - EAR (Eye Aspect Ratio) 眼部纵横比，低值表示闭眼
//! - MAR (Mouth Aspect Ratio) 嘴部纵横比，高值表示张嘴
//! - 眉高比（眉心距 / 脸部高度），用于挑眉检测
//!
//! 比值按构造对均匀缩放和平面内旋转不变，但对头部出平面转动敏感，
//! 这是已接受的精度限制。

/// 判定几何退化的最小分母距离，低于此值的比值返回 NaN
const MIN_DISTANCE: f64 = 1e-6;

/// 二维点
///
/// 外部关键点检测器输出的归一化坐标，z 分量在本库中被忽略。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 欧氏距离，恒 >= 0，对称，两点重合时为 0
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// 标准 6 点 EAR 计算
///
/// 点顺序为 `[外眦, 上睑1, 上睑2, 内眦, 下睑1, 下睑2]`：
/// p1, p4 为眼角点（水平方向），p2/p6 与 p3/p5 为上下眼睑配对。
///
/// 公式: EAR = (|p2-p6| + |p3-p5|) / (2 * |p1-p4|)
///
/// 水平距离退化（两眼角几乎重合）时返回 NaN，由调用方决定跳帧策略。
pub fn eye_aspect_ratio(eye: &[Point; 6]) -> f64 {
    let horizontal = eye[0].distance(&eye[3]);
    if horizontal < MIN_DISTANCE {
        return f64::NAN;
    }

    let vertical1 = eye[1].distance(&eye[5]);
    let vertical2 = eye[2].distance(&eye[4]);
    (vertical1 + vertical2) / (2.0 * horizontal)
}

/// 4 点 MAR 计算
///
/// 点顺序为 `[左嘴角, 右嘴角, 上唇, 下唇]`。
///
/// 公式: MAR = |p3-p4| / |p1-p2|
pub fn mouth_aspect_ratio(mouth: &[Point; 4]) -> f64 {
    let horizontal = mouth[0].distance(&mouth[1]);
    if horizontal < MIN_DISTANCE {
        return f64::NAN;
    }

    mouth[2].distance(&mouth[3]) / horizontal
}

/// 眉高比计算
///
/// 眉心到鼻梁的距离，按鼻底到下巴的脸部高度归一化：
/// ratio = |eyebrow - nose_bridge| / |nose_bottom - chin|
pub fn eyebrow_ratio(eyebrow: &Point, nose_bridge: &Point, nose_bottom: &Point, chin: &Point) -> f64 {
    let face_height = nose_bottom.distance(chin);
    if face_height < MIN_DISTANCE {
        return f64::NAN;
    }

    eyebrow.distance(nose_bridge) / face_height
}
