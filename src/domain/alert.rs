// ==========================================
// 产线瓶颈智能体演示系统 - 领域实体：预测性预警
// ==========================================
// 职责: 与产线实时状态无关的合成预测预警
// 约束: 预警列表最新在前, 上限 6 条 (FIFO 淘汰)
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::AlertKind;

/// 预测性预警 (PredictiveAlert)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictiveAlert {
    /// 预警类型
    pub kind: AlertKind,

    /// 预警描述
    pub description: String,

    /// 建议措施
    pub action: String,

    /// 置信度 (%)
    pub confidence: u32,

    /// 预警时间 (仿真时钟)
    pub timestamp: DateTime<Utc>,
}

/// 预警剧本：每种预警类型对应的固定描述与建议措施
pub fn alert_playbook(kind: AlertKind) -> (&'static str, &'static str) {
    match kind {
        AlertKind::PredictedCapacityShortage => (
            "Assembly Line A projected to reach capacity in 45 minutes",
            "Recommend preemptive worker reallocation",
        ),
        AlertKind::EquipmentPerformanceDegradation => (
            "Welding Station D showing declining efficiency trend",
            "Schedule preventive maintenance check",
        ),
        AlertKind::MaterialInventoryLow => (
            "Raw material levels for Packaging Line B below threshold",
            "Initiate expedited procurement process",
        ),
        AlertKind::QualityVarianceDetected => (
            "Quality Control C detecting higher rejection rate",
            "Deploy quality assurance team for inspection",
        ),
        AlertKind::MaintenanceDueSoon => (
            "Paint Shop E approaching scheduled maintenance window",
            "Prepare maintenance crew and backup resources",
        ),
    }
}
