//! 井字棋核心库
//!
//! 包含:
//! - 格子、阵营、对局结果等核心数据结构
//! - 棋盘状态机（落子、撤销、胜负判定）
//! - 错误类型

mod board;
mod cell;
mod constants;
mod error;

pub use board::Board;
pub use cell::{Cell, GameOutcome, Side};
pub use constants::*;
pub use error::{GameError, Result};
