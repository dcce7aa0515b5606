//! 棋盘状态

use crate::cell::{Cell, GameOutcome, Side};
use crate::constants::DEFAULT_SIDE;
use crate::error::{GameError, Result};

/// 棋盘
///
/// side x side 的方格，索引为 row * side + col。
/// 落子与撤销都会翻转走子方并重新判定对局结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// 边长
    side: usize,
    /// 所有格子，长度固定为 side * side
    cells: Vec<Cell>,
    /// 当前走子方
    turn: Side,
    /// 对局结果
    outcome: GameOutcome,
}

impl Board {
    /// 创建空棋盘（玩家先手）
    pub fn new(side: usize) -> Result<Self> {
        if side == 0 {
            return Err(GameError::InvalidSide { side });
        }
        Ok(Self {
            side,
            cells: vec![Cell::Empty; side * side],
            turn: Side::Player,
            outcome: GameOutcome::InProgress,
        })
    }

    /// 从空棋盘开始依次落子
    pub fn from_moves(side: usize, moves: &[usize]) -> Result<Self> {
        let mut board = Self::new(side)?;
        for &index in moves {
            board.place(index)?;
        }
        Ok(board)
    }

    /// 边长
    pub fn side(&self) -> usize {
        self.side
    }

    /// 格子总数
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// 棋盘是否没有格子
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 当前走子方
    pub fn active_turn(&self) -> Side {
        self.turn
    }

    /// 对局结果
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// 只读的格子视图（用于渲染）
    pub fn snapshot(&self) -> &[Cell] {
        &self.cells
    }

    /// 指定格子是否已有棋子
    pub fn is_occupied(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(!self.cells[index].is_empty())
    }

    /// 所有空格的索引（升序）
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// 当前走子方在指定格落子
    ///
    /// 出错时棋盘保持不变。
    pub fn place(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !self.cells[index].is_empty() {
            return Err(GameError::CellOccupied { index });
        }

        self.cells[index] = self.turn.mark();
        self.turn = self.turn.opponent();
        self.update_outcome();
        Ok(())
    }

    /// 撤销指定格的落子（搜索回溯用）
    pub fn retract(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        if self.cells[index].is_empty() {
            return Err(GameError::CellEmpty { index });
        }

        self.cells[index] = Cell::Empty;
        self.turn = self.turn.opponent();
        self.update_outcome();
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.cells.len() {
            return Err(GameError::OutOfRange {
                index,
                len: self.cells.len(),
            });
        }
        Ok(())
    }

    /// 重新判定对局结果，成线归于刚落子的一方
    fn update_outcome(&mut self) {
        self.outcome = if self.has_complete_line() {
            self.turn.opponent().victory()
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        };
    }

    /// 检查两条对角线、每一行、每一列
    fn has_complete_line(&self) -> bool {
        let n = self.side;

        if self.is_line((0..n).map(|i| i * n + i))
            || self.is_line((0..n).map(|i| i * n + (n - 1 - i)))
        {
            return true;
        }

        (0..n).any(|i| {
            self.is_line((0..n).map(|j| i * n + j)) || self.is_line((0..n).map(|j| j * n + i))
        })
    }

    fn is_line(&self, mut indices: impl Iterator<Item = usize>) -> bool {
        let Some(first) = indices.next() else {
            return false;
        };
        let head = self.cells[first];
        !head.is_empty() && indices.all(|i| self.cells[i] == head)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            cells: vec![Cell::Empty; DEFAULT_SIDE * DEFAULT_SIDE],
            turn: Side::Player,
            outcome: GameOutcome::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let board = Board::default();
        assert_eq!(board.side(), 3);
        assert_eq!(board.len(), 9);
        assert_eq!(board.active_turn(), Side::Player);
        assert_eq!(board.outcome(), GameOutcome::InProgress);
        assert!(board.snapshot().iter().all(Cell::is_empty));
        assert_eq!(board, Board::new(3).unwrap());
        assert!(!board.is_empty());
    }

    #[test]
    fn test_invalid_side() {
        assert_eq!(Board::new(0), Err(GameError::InvalidSide { side: 0 }));
    }

    #[test]
    fn test_place_alternates_marks() {
        let mut board = Board::default();
        board.place(4).unwrap();
        assert_eq!(board.snapshot()[4], Cell::Player);
        assert_eq!(board.active_turn(), Side::Opponent);

        board.place(0).unwrap();
        assert_eq!(board.snapshot()[0], Cell::Opponent);
        assert_eq!(board.active_turn(), Side::Player);
        assert!(board.is_occupied(0).unwrap());
        assert!(!board.is_occupied(8).unwrap());
    }

    #[test]
    fn test_out_of_range_leaves_board_untouched() {
        let mut board = Board::from_moves(3, &[0, 4]).unwrap();
        let before = board.clone();

        assert_eq!(
            board.is_occupied(9),
            Err(GameError::OutOfRange { index: 9, len: 9 })
        );
        assert_eq!(
            board.place(9),
            Err(GameError::OutOfRange { index: 9, len: 9 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_on_occupied_cell() {
        let mut board = Board::from_moves(3, &[0]).unwrap();
        let before = board.clone();
        assert_eq!(board.place(0), Err(GameError::CellOccupied { index: 0 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_after_game_over() {
        // 玩家占据第一行
        let mut board = Board::from_moves(3, &[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(board.outcome(), GameOutcome::PlayerWins);
        assert_eq!(board.place(8), Err(GameError::GameOver));
    }

    #[test]
    fn test_place_then_retract_round_trip() {
        let mut board = Board::from_moves(3, &[4, 0, 8]).unwrap();
        let before = board.clone();

        for index in before.empty_indices().collect::<Vec<_>>() {
            board.place(index).unwrap();
            board.retract(index).unwrap();
            assert_eq!(board.snapshot(), before.snapshot());
            assert_eq!(board.active_turn(), before.active_turn());
            assert_eq!(board.outcome(), before.outcome());
        }
    }

    #[test]
    fn test_retract_resets_terminal_outcome() {
        let mut board = Board::from_moves(3, &[0, 3, 1, 4]).unwrap();
        board.place(2).unwrap();
        assert_eq!(board.outcome(), GameOutcome::PlayerWins);

        board.retract(2).unwrap();
        assert_eq!(board.outcome(), GameOutcome::InProgress);
        assert_eq!(board.active_turn(), Side::Player);
    }

    #[test]
    fn test_retract_empty_cell() {
        let mut board = Board::default();
        assert_eq!(board.retract(3), Err(GameError::CellEmpty { index: 3 }));
        assert_eq!(
            board.retract(12),
            Err(GameError::OutOfRange { index: 12, len: 9 })
        );
    }

    #[test]
    fn test_rows_columns_diagonals() {
        // 行
        let board = Board::from_moves(3, &[3, 0, 4, 1, 5]).unwrap();
        assert_eq!(board.outcome(), GameOutcome::PlayerWins);

        // 列
        let board = Board::from_moves(3, &[0, 2, 3, 5, 4, 8]).unwrap();
        assert_eq!(board.outcome(), GameOutcome::OpponentWins);

        // 主对角线
        let board = Board::from_moves(3, &[0, 1, 4, 2, 8]).unwrap();
        assert_eq!(board.outcome(), GameOutcome::PlayerWins);

        // 副对角线
        let board = Board::from_moves(3, &[0, 2, 1, 4, 8, 6]).unwrap();
        assert_eq!(board.outcome(), GameOutcome::OpponentWins);
    }

    #[test]
    fn test_win_goes_to_last_mover() {
        let board = Board::from_moves(3, &[0, 3, 1, 4, 8, 5]).unwrap();
        assert_eq!(board.outcome(), GameOutcome::OpponentWins);
        // 轮到玩家，但获胜方是刚落子的电脑
        assert_eq!(board.active_turn(), Side::Player);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // P O P
        // P O O
        // O P P
        let board = Board::from_moves(3, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert!(board.is_full());
        assert_eq!(board.outcome(), GameOutcome::Draw);
    }

    #[test]
    fn test_winning_last_cell_is_not_draw() {
        // 最后一步既填满棋盘又成线
        let board = Board::from_moves(3, &[0, 1, 2, 3, 4, 5, 7, 6, 8]).unwrap();
        assert!(board.is_full());
        assert_eq!(board.outcome(), GameOutcome::PlayerWins);
    }

    #[test]
    fn test_in_progress_iff_empty_and_no_line() {
        let moves = [4, 0, 2, 6, 3, 5, 1, 7, 8];
        let mut board = Board::default();
        for &index in &moves {
            board.place(index).unwrap();
            let in_progress = board.outcome() == GameOutcome::InProgress;
            assert_eq!(in_progress, !board.is_full() && !board.has_complete_line());
        }
    }

    #[test]
    fn test_larger_board() {
        let mut board = Board::new(4).unwrap();
        assert_eq!(board.len(), 16);
        // 玩家占据第二列
        for index in [1, 0, 5, 4, 9, 8] {
            board.place(index).unwrap();
        }
        assert_eq!(board.outcome(), GameOutcome::InProgress);
        board.place(13).unwrap();
        assert_eq!(board.outcome(), GameOutcome::PlayerWins);
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = Board::new(1).unwrap();
        board.place(0).unwrap();
        assert_eq!(board.outcome(), GameOutcome::PlayerWins);
    }

    #[test]
    fn test_empty_indices_ascending() {
        let board = Board::from_moves(3, &[4, 0]).unwrap();
        let empty: Vec<_> = board.empty_indices().collect();
        assert_eq!(empty, vec![1, 2, 3, 5, 6, 7, 8]);
    }
}
