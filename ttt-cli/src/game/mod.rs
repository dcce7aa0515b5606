//! 对局控制
//!
//! 轮流获取玩家输入和电脑走法，每步后重新渲染棋盘

mod input;

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;
use ttt_ai::MoveChooser;
use ttt_core::{Board, GameOutcome, Side};

use crate::render::render;
use crate::settings::GameSettings;

pub use input::InputReader;

/// 终局提示语，对局进行中时为 None
pub fn outcome_message(outcome: GameOutcome) -> Option<&'static str> {
    match outcome {
        GameOutcome::PlayerWins => Some("player win"),
        GameOutcome::OpponentWins => Some("cpu win"),
        GameOutcome::Draw => Some("draw"),
        GameOutcome::InProgress => None,
    }
}

/// 一局人机对战
pub struct Game<C> {
    board: Board,
    engine: C,
    settings: GameSettings,
}

impl<C: MoveChooser> Game<C> {
    pub fn new(board: Board, engine: C, settings: GameSettings) -> Self {
        Self {
            board,
            engine,
            settings,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 进行对局直到终局，返回对局结果
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut InputReader<R>,
        out: &mut W,
    ) -> Result<GameOutcome> {
        write!(out, "{}", render(&self.board, &self.settings))?;

        while !self.board.outcome().is_terminal() {
            let side = self.board.active_turn();
            let index = match side {
                Side::Player => {
                    writeln!(out, "PLAYER")?;
                    input.read_index(&self.board, out)?
                }
                Side::Opponent => {
                    writeln!(out, "CPU")?;
                    self.engine.choose_move(&mut self.board)?
                }
            };

            self.board.place(index)?;
            info!(?side, index, "落子");
            write!(out, "{}", render(&self.board, &self.settings))?;
        }

        let outcome = self.board.outcome();
        if let Some(message) = outcome_message(outcome) {
            writeln!(out, "{}", message)?;
        }
        Ok(outcome)
    }
}
