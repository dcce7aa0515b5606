//! 井字棋控制台客户端
//!
//! 人机对战：玩家从标准输入输入格子编号，电脑用 Minimax 应对

pub mod game;
pub mod render;
pub mod settings;

pub use game::{outcome_message, Game, InputReader};
pub use settings::{GameSettings, SettingsSource};
