//! 终局评估函数

use ttt_core::{GameError, GameOutcome, Result, WIN_SCORE};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 评估终局（电脑视角，正值对电脑有利）
    ///
    /// `depth` 为搜索开始后的落子数。越快获胜分越高，越慢落败分越高。
    pub fn evaluate(outcome: GameOutcome, depth: u32) -> Result<i32> {
        let depth = depth as i32;
        match outcome {
            GameOutcome::OpponentWins => Ok(WIN_SCORE - depth),
            GameOutcome::PlayerWins => Ok(depth - WIN_SCORE),
            GameOutcome::Draw => Ok(0),
            GameOutcome::InProgress => Err(GameError::InvalidSearchPrecondition {
                reason: "evaluate called on a position that is still in progress",
            }),
        }
    }
}
