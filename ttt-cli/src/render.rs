//! 棋盘渲染

use ttt_core::Board;

use crate::settings::GameSettings;

/// 将棋盘排成 side x side 的文本
///
/// 空格显示自身编号，已落子的格子显示阵营符号，均右对齐。
pub fn render(board: &Board, settings: &GameSettings) -> String {
    let width = board.len().to_string().len() + 1;
    let mut text = String::new();

    for (index, cell) in board.snapshot().iter().enumerate() {
        let field = match cell.side() {
            Some(side) => format!("{:>width$}", settings.glyph(side)),
            None => format!("{:>width$}", index),
        };
        text.push_str(&field);
        if (index + 1) % board.side() == 0 {
            text.push('\n');
        }
    }

    text
}
