// ==========================================
// 产线瓶颈智能体演示系统 - 领域数据：处置目录
// ==========================================
// 职责: 固定的班组成员名单与瓶颈处置场景剧本
// 说明: 检测到瓶颈后从目录中均匀随机选择场景与负责人
// ==========================================

use crate::domain::types::ScenarioKind;

/// 班组成员名单 (8 人)
pub const TEAM_MEMBERS: [&str; 8] = [
    "Maria Santos",
    "John Chen",
    "Sarah Williams",
    "Ahmed Hassan",
    "Lisa Anderson",
    "David Kim",
    "Emily Rodriguez",
    "Michael Brown",
];

/// 瓶颈处置场景
///
/// 一条场景剧本：智能体采取的措施文案 + 派发给班组的任务文案。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BottleneckScenario {
    /// 场景类型
    pub kind: ScenarioKind,
    /// 智能体措施文案
    pub action: &'static str,
    /// 任务描述文案
    pub task: &'static str,
}

/// 瓶颈处置场景目录 (5 条)
pub const BOTTLENECK_SCENARIOS: [BottleneckScenario; 5] = [
    BottleneckScenario {
        kind: ScenarioKind::CapacityShortage,
        action: "Reassign workers from underutilized lines",
        task: "Provide additional capacity support",
    },
    BottleneckScenario {
        kind: ScenarioKind::EquipmentDegradation,
        action: "Schedule immediate maintenance inspection",
        task: "Perform equipment diagnostics and maintenance",
    },
    BottleneckScenario {
        kind: ScenarioKind::MaterialShortage,
        action: "Expedite material procurement",
        task: "Coordinate urgent material delivery",
    },
    BottleneckScenario {
        kind: ScenarioKind::QualityIssues,
        action: "Initiate quality audit",
        task: "Conduct quality inspection and root cause analysis",
    },
    BottleneckScenario {
        kind: ScenarioKind::TrainingGap,
        action: "Deploy cross-training resources",
        task: "Provide operational training and support",
    },
];
