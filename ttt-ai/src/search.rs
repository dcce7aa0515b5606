//! 搜索引擎
//!
//! 实现完整 Minimax：在同一个棋盘上落子、递归、撤销，遍历整棵博弈树

use tracing::{debug, trace};
use ttt_core::{Board, GameError, Result, Side};

use crate::evaluate::Evaluator;

/// 走子策略
pub trait MoveChooser {
    /// 为当前走子方选择一个空格
    fn choose_move(&mut self, board: &mut Board) -> Result<usize>;
}

/// AI 引擎
///
/// 电脑为最大化方，玩家为最小化方。同分时取索引最小的走法。
#[derive(Debug, Default)]
pub struct AiEngine {
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前局面的 Minimax 分值（电脑视角）
    pub fn score(&mut self, board: &mut Board) -> Result<i32> {
        self.nodes_searched = 0;
        let (score, _) = self.minimax(board, 0)?;
        Ok(score)
    }

    /// 获取搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// Minimax 搜索，返回 (最佳分值, 最佳走法)
    ///
    /// 终局节点没有走法。返回前棋盘恢复原状。
    fn minimax(&mut self, board: &mut Board, depth: u32) -> Result<(i32, Option<usize>)> {
        self.nodes_searched += 1;

        let outcome = board.outcome();
        if outcome.is_terminal() {
            return Ok((Evaluator::evaluate(outcome, depth)?, None));
        }

        let maximizing = board.active_turn() == Side::Opponent;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_index = None;

        for index in 0..board.len() {
            if board.is_occupied(index)? {
                continue;
            }

            // 模拟走法
            board.place(index)?;
            let result = self.minimax(board, depth + 1);
            board.retract(index)?;
            let (score, _) = result?;

            if depth == 0 {
                trace!(index, score, "候选走法");
            }

            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                best_index = Some(index);
            }
        }

        if best_index.is_none() {
            return Err(GameError::InvalidSearchPrecondition {
                reason: "position is in progress but has no empty cell",
            });
        }

        Ok((best_score, best_index))
    }
}

impl MoveChooser for AiEngine {
    /// 搜索最佳走法
    fn choose_move(&mut self, board: &mut Board) -> Result<usize> {
        if board.outcome().is_terminal() {
            return Err(GameError::InvalidSearchPrecondition {
                reason: "cannot choose a move on a finished game",
            });
        }

        self.nodes_searched = 0;
        let (score, best) = self.minimax(board, 0)?;
        let index = best.ok_or(GameError::InvalidSearchPrecondition {
            reason: "no move available",
        })?;

        debug!(
            side = ?board.active_turn(),
            index,
            score,
            nodes = self.nodes_searched,
            "搜索完成"
        );
        Ok(index)
    }
}
