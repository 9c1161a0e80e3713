// ==========================================
// 原神素材规划系统 - 领域层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 进度数据校验错误
///
/// 任一违规使该角色的本次计算失败,不重试、不纠正
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressError {
    #[error("角色等级超出范围 (1-90): {level}")]
    InvalidLevel { level: u8 },

    #[error("天赋等级超出范围 (1-10): slot={slot}, level={level}")]
    InvalidTalentLevel { slot: usize, level: u8 },

    #[error("天赋等级数量错误: 期望 3 个, 实际 {actual} 个")]
    TalentCountMismatch { actual: usize },
}
