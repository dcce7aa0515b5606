//! 井字棋 AI 引擎
//!
//! 包含:
//! - 终局评估函数
//! - 完整 Minimax 搜索（不剪枝）
//! - 随机走子（测试用对手）

mod evaluate;
mod random;
mod search;

pub use evaluate::Evaluator;
pub use random::RandomChooser;
pub use search::{AiEngine, MoveChooser};
