//! 常量定义

/// 默认棋盘边长
pub const DEFAULT_SIDE: usize = 3;

/// 胜负局面的基础分值（评估时按深度衰减）
pub const WIN_SCORE: i32 = 10;
