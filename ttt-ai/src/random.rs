//! 随机走子

use rand::seq::IteratorRandom;
use rand::Rng;
use ttt_core::{Board, GameError, Result};

use crate::search::MoveChooser;

/// 在所有空格中均匀随机选择
///
/// 随机源可注入，测试时使用固定种子。
pub struct RandomChooser<R> {
    rng: R,
}

impl<R: Rng> RandomChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveChooser for RandomChooser<R> {
    fn choose_move(&mut self, board: &mut Board) -> Result<usize> {
        if board.outcome().is_terminal() {
            return Err(GameError::InvalidSearchPrecondition {
                reason: "cannot choose a move on a finished game",
            });
        }
        board
            .empty_indices()
            .choose(&mut self.rng)
            .ok_or(GameError::InvalidSearchPrecondition {
                reason: "no move available",
            })
    }
}
