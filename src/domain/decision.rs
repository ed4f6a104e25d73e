// ==========================================
// 产线瓶颈智能体演示系统 - 领域实体：决策记录
// ==========================================
// 职责: 智能体对检测到的瓶颈做出的响应记录
// 约束: 决策日志仅追加, 最新在前, 上限 10 条 (FIFO 淘汰)
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::ScenarioKind;

/// 决策记录 (DecisionRecord)
///
/// 瓶颈检测触发时生成的一条决策日志。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// 决策时间 (仿真时钟)
    pub timestamp: DateTime<Utc>,

    /// 产线名称
    pub line: String,

    /// 事件文案
    pub event: String,

    /// 指标分析文案
    pub analysis: String,

    /// 处置措施文案
    pub action: String,

    /// 负责人
    pub assignee: String,

    /// 预期影响文案
    pub impact: String,

    /// 场景类型
    pub scenario_kind: ScenarioKind,
}
