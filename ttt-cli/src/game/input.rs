//! 输入处理

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use ttt_core::Board;

/// 玩家输入读取器
///
/// 每行一个格子编号，非法输入会提示并重新读取。
pub struct InputReader<R> {
    reader: R,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// 读取一个在范围内且未被占用的格子编号
    ///
    /// 输入结束时返回错误。
    pub fn read_index<W: Write>(&mut self, board: &Board, out: &mut W) -> Result<usize> {
        loop {
            let mut line = String::new();
            let read = self.reader.read_line(&mut line).context("读取输入失败")?;
            if read == 0 {
                bail!("输入已结束");
            }

            match parse_index(line.trim(), board) {
                Some(index) => return Ok(index),
                None => {
                    tracing::debug!(input = line.trim(), "无效输入");
                    writeln!(out, "error: invalid number")?;
                }
            }
        }
    }
}

/// 解析格子编号，负数、越界或已占用均视为无效
fn parse_index(text: &str, board: &Board) -> Option<usize> {
    let value: i64 = text.parse().ok()?;
    let index = usize::try_from(value).ok()?;
    match board.is_occupied(index) {
        Ok(false) => Some(index),
        Ok(true) | Err(_) => None,
    }
}
