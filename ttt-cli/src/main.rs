use std::io;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use ttt_ai::AiEngine;
use ttt_cli::{Game, GameSettings, InputReader};
use ttt_core::{Board, DEFAULT_SIDE};

fn main() -> Result<()> {
    let (settings, source) = GameSettings::load();

    // 初始化日志（输出到 stderr，避免干扰棋盘显示）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive(settings.log_directive()?))
        .init();

    source.log();
    if settings.board_side > DEFAULT_SIDE {
        warn!("棋盘边长 {} 较大，电脑思考可能非常慢", settings.board_side);
    }

    let board = Board::new(settings.board_side).context("无效的棋盘设置")?;
    let mut game = Game::new(board, AiEngine::new(), settings);

    let mut input = InputReader::new(io::stdin().lock());
    let mut out = io::stdout().lock();
    let outcome = game.run(&mut input, &mut out)?;

    info!(?outcome, "对局结束");
    Ok(())
}
