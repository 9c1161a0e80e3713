// ==========================================
// 原神素材规划系统 - 养成消耗查找表
// ==========================================
// 依据: 游戏固定养成成本表
// 红线: 进程级常量,启动即定,永不修改
// ==========================================
// 突破表按突破阶段 (0..=5) 索引, 给出从阶段 n 升到 n+1 的消耗;
// 天赋表按天赋等级 (1 起, 下标 = 等级-1) 索引, 给出从该级升到下一级的消耗
// ==========================================

/// 突破边界等级 (跨过任一边界需完成一次突破)
pub const ASCENSION_BOUNDARIES: [u8; 6] = [20, 40, 50, 60, 70, 80];

/// 突破阶段总数
pub const ASCENSION_STAGES: usize = 6;

/// 每阶段 Boss 材料消耗
pub const BOSS_COUNT_PER_STAGE: [u32; ASCENSION_STAGES] = [0, 2, 4, 8, 12, 20];

/// 每阶段地区特产消耗
pub const SPECIALTY_COUNT_PER_STAGE: [u32; ASCENSION_STAGES] = [3, 10, 20, 30, 45, 60];

/// 每阶段突破石消耗 (品质档, 数量)
pub const STONE_STEP_PER_STAGE: [(u8, u32); ASCENSION_STAGES] =
    [(2, 1), (3, 3), (3, 6), (4, 3), (4, 6), (5, 6)];

/// 每阶段怪物掉落消耗 (品质档, 数量)
pub const MOB_STEP_PER_STAGE: [(u8, u32); ASCENSION_STAGES] =
    [(1, 3), (1, 15), (2, 12), (2, 18), (3, 12), (3, 24)];

/// 天赋书消耗, 等级 1..=9 (品质档, 数量)
pub const TALENT_BOOK_COST_PER_LEVEL: [(u8, u32); 9] = [
    (2, 3),
    (3, 2),
    (3, 4),
    (3, 6),
    (3, 9),
    (4, 4),
    (4, 6),
    (4, 12),
    (4, 16),
];

/// 天赋升级的怪物掉落消耗, 等级 1..=9 (品质档, 数量)
pub const TALENT_MOB_COST_PER_LEVEL: [(u8, u32); 9] = [
    (1, 6),
    (2, 3),
    (2, 4),
    (2, 6),
    (2, 9),
    (3, 4),
    (3, 6),
    (3, 9),
    (3, 12),
];

/// 周本材料消耗, 按天赋等级 (0..=9) 索引
pub const WEEKLY_UNITS_PER_LEVEL: [u32; 10] = [0, 0, 0, 0, 0, 0, 1, 1, 2, 2];
