// ==========================================
// 原神素材规划系统 - 角色进度模型
// ==========================================
// 依据: 玩家养成进度记录 (等级/突破/天赋)
// 红线: 构造即校验,非法数据不进入计算引擎
// ==========================================

use crate::domain::error::ProgressError;
use serde::{Deserialize, Serialize};

/// 天赋槽位数 (普攻/战技/爆发)
pub const TALENT_SLOTS: usize = 3;

/// 角色等级范围
pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 90;

/// 天赋等级范围
pub const MIN_TALENT_LEVEL: u8 = 1;
pub const MAX_TALENT_LEVEL: u8 = 10;

// ==========================================
// CharacterProgress - 玩家角色进度
// ==========================================
// 某玩家对某角色的养成状态。字段私有,只能经校验构造;
// 天赋目标低于当前等级是合法的零消耗区间,不视为错误。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProgress")]
pub struct CharacterProgress {
    level: u8,                                   // 当前等级 (1..=90)
    is_ascended: bool,                           // 当前等级上限处是否已突破
    talent_levels: [u8; TALENT_SLOTS],           // 当前天赋等级 (1..=10)
    target_talent_levels: [u8; TALENT_SLOTS],    // 目标天赋等级 (1..=10)
}

impl CharacterProgress {
    /// 构造并校验进度记录
    ///
    /// # 参数
    /// - `level`: 当前等级 (1..=90)
    /// - `is_ascended`: 当前等级若恰在突破边界,是否已完成该次突破
    /// - `talent_levels`: 当前天赋等级 [普攻, 战技, 爆发]
    /// - `target_talent_levels`: 目标天赋等级 [普攻, 战技, 爆发]
    ///
    /// # 返回
    /// 校验失败返回 ProgressError
    pub fn new(
        level: u8,
        is_ascended: bool,
        talent_levels: [u8; TALENT_SLOTS],
        target_talent_levels: [u8; TALENT_SLOTS],
    ) -> Result<Self, ProgressError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(ProgressError::InvalidLevel { level });
        }
        for (slot, &talent) in talent_levels
            .iter()
            .chain(target_talent_levels.iter())
            .enumerate()
        {
            if !(MIN_TALENT_LEVEL..=MAX_TALENT_LEVEL).contains(&talent) {
                return Err(ProgressError::InvalidTalentLevel {
                    slot: slot % TALENT_SLOTS,
                    level: talent,
                });
            }
        }
        Ok(Self {
            level,
            is_ascended,
            talent_levels,
            target_talent_levels,
        })
    }

    /// 从变长切片构造 (外部输入常为 JSON 列表,长度需恰为 3)
    pub fn from_slices(
        level: u8,
        is_ascended: bool,
        talent_levels: &[u8],
        target_talent_levels: &[u8],
    ) -> Result<Self, ProgressError> {
        let current: [u8; TALENT_SLOTS] = talent_levels
            .try_into()
            .map_err(|_| ProgressError::TalentCountMismatch {
                actual: talent_levels.len(),
            })?;
        let target: [u8; TALENT_SLOTS] = target_talent_levels
            .try_into()
            .map_err(|_| ProgressError::TalentCountMismatch {
                actual: target_talent_levels.len(),
            })?;
        Self::new(level, is_ascended, current, target)
    }

    // ===== 只读访问 =====

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_ascended(&self) -> bool {
        self.is_ascended
    }

    pub fn talent_levels(&self) -> &[u8; TALENT_SLOTS] {
        &self.talent_levels
    }

    pub fn target_talent_levels(&self) -> &[u8; TALENT_SLOTS] {
        &self.target_talent_levels
    }
}

// ==========================================
// RawProgress - 反序列化中间结构
// ==========================================
// serde 经 try_from 走同一套校验,外部 JSON 无法绕过构造检查
#[derive(Debug, Deserialize)]
struct RawProgress {
    level: u8,
    is_ascended: bool,
    talent_levels: Vec<u8>,
    target_talent_levels: Vec<u8>,
}

impl TryFrom<RawProgress> for CharacterProgress {
    type Error = ProgressError;

    fn try_from(raw: RawProgress) -> Result<Self, Self::Error> {
        CharacterProgress::from_slices(
            raw.level,
            raw.is_ascended,
            &raw.talent_levels,
            &raw.target_talent_levels,
        )
    }
}
