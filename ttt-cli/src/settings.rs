//! 游戏设置模块
//!
//! 提供设置数据结构和 JSON 持久化

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::Directive;
use ttt_core::{Side, DEFAULT_SIDE};

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// 棋盘边长
    pub board_side: usize,
    /// 玩家棋子符号
    pub player_glyph: char,
    /// 电脑棋子符号
    pub opponent_glyph: char,
    /// 日志级别（EnvFilter 指令，如 "warn" 或 "ttt_ai=debug"）
    pub log_level: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_side: DEFAULT_SIDE,
            player_glyph: 'o',
            opponent_glyph: 'x',
            log_level: "warn".to_string(),
        }
    }
}

/// 设置的加载结果，日志初始化后再输出
#[derive(Debug)]
pub enum SettingsSource {
    /// 从文件加载
    File(PathBuf),
    /// 文件不存在
    Missing(PathBuf),
    /// 无法获取配置目录
    NoConfigDir,
    /// 文件无法读取或格式无效
    Invalid(anyhow::Error),
}

impl SettingsSource {
    /// 输出加载情况
    pub fn log(&self) {
        match self {
            SettingsSource::File(path) => tracing::info!("已加载设置: {:?}", path),
            SettingsSource::Missing(path) => {
                tracing::info!("设置文件不存在: {:?}，使用默认设置", path)
            }
            SettingsSource::NoConfigDir => tracing::warn!("无法获取配置目录，使用默认设置"),
            SettingsSource::Invalid(e) => tracing::warn!("{:#}，使用默认设置", e),
        }
    }
}

impl GameSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tictactoe");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置
    ///
    /// 不直接写日志，调用方在日志初始化后调用 `SettingsSource::log`。
    pub fn load() -> (Self, SettingsSource) {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => (Self::default(), SettingsSource::NoConfigDir),
        }
    }

    /// 从文件加载设置，失败时回退到默认设置
    pub fn load_from(path: &Path) -> (Self, SettingsSource) {
        if !path.exists() {
            return (Self::default(), SettingsSource::Missing(path.to_path_buf()));
        }

        match Self::read_from(path) {
            Ok(settings) => (settings, SettingsSource::File(path.to_path_buf())),
            Err(e) => (Self::default(), SettingsSource::Invalid(e)),
        }
    }

    fn read_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取设置文件: {:?}", path))?;
        serde_json::from_str(&content).with_context(|| format!("设置文件格式无效: {:?}", path))
    }

    /// 保存设置到指定文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        std::fs::write(path, content)
            .with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }

    /// 日志级别对应的过滤指令
    pub fn log_directive(&self) -> Result<Directive> {
        self.log_level
            .parse()
            .with_context(|| format!("无效的日志级别: {}", self.log_level))
    }

    /// 阵营对应的显示符号
    pub fn glyph(&self, side: Side) -> char {
        match side {
            Side::Player => self.player_glyph,
            Side::Opponent => self.opponent_glyph,
        }
    }
}
