//! 错误类型定义

use thiserror::Error;

/// 棋盘与搜索错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 格子索引越界
    #[error("Index {index} is out of range (board has {len} cells)")]
    OutOfRange { index: usize, len: usize },

    /// 格子已被占用
    #[error("Cell {index} is already occupied")]
    CellOccupied { index: usize },

    /// 格子为空，无法撤销
    #[error("Cell {index} is empty, nothing to retract")]
    CellEmpty { index: usize },

    /// 对局已结束
    #[error("Game is already over")]
    GameOver,

    /// 无效的棋盘边长
    #[error("Invalid board side: {side}")]
    InvalidSide { side: usize },

    /// 搜索前置条件不满足
    #[error("Invalid search precondition: {reason}")]
    InvalidSearchPrecondition { reason: &'static str },
}

/// 操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
