//! 格子、阵营与对局结果

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// 玩家（先手）
    Player,
    /// 电脑（后手）
    Opponent,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// 该阵营落子后的格子状态
    pub fn mark(&self) -> Cell {
        match self {
            Side::Player => Cell::Player,
            Side::Opponent => Cell::Opponent,
        }
    }

    /// 该阵营获胜时的对局结果
    pub fn victory(&self) -> GameOutcome {
        match self {
            Side::Player => GameOutcome::PlayerWins,
            Side::Opponent => GameOutcome::OpponentWins,
        }
    }
}

/// 格子状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// 玩家的棋子
    Player,
    /// 电脑的棋子
    Opponent,
}

impl Cell {
    /// 是否为空
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// 占据该格的阵营
    pub fn side(&self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Player => Some(Side::Player),
            Cell::Opponent => Some(Side::Opponent),
        }
    }
}

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameOutcome {
    /// 进行中
    #[default]
    InProgress,
    /// 玩家胜
    PlayerWins,
    /// 电脑胜
    OpponentWins,
    /// 和棋
    Draw,
}

impl GameOutcome {
    /// 是否为终局
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// 获胜方
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::PlayerWins => Some(Side::Player),
            GameOutcome::OpponentWins => Some(Side::Opponent),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }
}
