// ==========================================
// 产线瓶颈智能体演示系统 - 领域类型定义
// ==========================================
// 职责: 产线状态/任务状态/任务优先级/场景类型/预警类型
// 序列化格式: SCREAMING_SNAKE_CASE (与前端快照一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 产线状态 (Line Status)
// ==========================================
// 由状态分类器根据当前指标与基准节拍计算
// 顺序: Normal < Warning < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineStatus {
    Normal,   // 正常
    Warning,  // 预警
    Critical, // 瓶颈
}

impl LineStatus {
    /// 前端展示文案
    pub fn label(&self) -> &'static str {
        match self {
            LineStatus::Normal => "Normal",
            LineStatus::Warning => "Warning",
            LineStatus::Critical => "Bottleneck Detected",
        }
    }
}

impl fmt::Display for LineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineStatus::Normal => write!(f, "NORMAL"),
            LineStatus::Warning => write!(f, "WARNING"),
            LineStatus::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ==========================================
// 任务状态 (Task Status)
// ==========================================
// 状态机: Assigned -> Progress -> Completed, 只进不退
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Assigned,  // 已指派
    Progress,  // 处理中
    Completed, // 已完成
}

impl TaskStatus {
    /// 前端展示文案 (首字母大写)
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Assigned => "Assigned",
            TaskStatus::Progress => "Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// 状态机的下一个状态 (终态返回 None)
    pub fn next(&self) -> Option<TaskStatus> {
        match self {
            TaskStatus::Assigned => Some(TaskStatus::Progress),
            TaskStatus::Progress => Some(TaskStatus::Completed),
            TaskStatus::Completed => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Assigned => write!(f, "ASSIGNED"),
            TaskStatus::Progress => write!(f, "PROGRESS"),
            TaskStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

// ==========================================
// 任务优先级 (Task Priority)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Medium, // 中
    High,   // 高
}

impl TaskPriority {
    /// 前端展示文案 (全大写)
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 瓶颈场景类型 (Scenario Kind)
// ==========================================
// 检测到瓶颈后随机选择的处置剧本类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    CapacityShortage,     // 产能不足
    EquipmentDegradation, // 设备劣化
    MaterialShortage,     // 物料短缺
    QualityIssues,        // 质量异常
    TrainingGap,          // 技能缺口
}

impl ScenarioKind {
    /// 转换为字符串标识 (与原始场景表一致)
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKind::CapacityShortage => "capacity_shortage",
            ScenarioKind::EquipmentDegradation => "equipment_degradation",
            ScenarioKind::MaterialShortage => "material_shortage",
            ScenarioKind::QualityIssues => "quality_issues",
            ScenarioKind::TrainingGap => "training_gap",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 预警类型 (Alert Kind)
// ==========================================
// 预测性预警的 5 种固定类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    PredictedCapacityShortage,       // 预测产能不足
    EquipmentPerformanceDegradation, // 设备性能劣化
    MaterialInventoryLow,            // 物料库存偏低
    QualityVarianceDetected,         // 质量波动
    MaintenanceDueSoon,              // 临近检修窗口
}

impl AlertKind {
    /// 全部预警类型 (随机选择用)
    pub const ALL: [AlertKind; 5] = [
        AlertKind::PredictedCapacityShortage,
        AlertKind::EquipmentPerformanceDegradation,
        AlertKind::MaterialInventoryLow,
        AlertKind::QualityVarianceDetected,
        AlertKind::MaintenanceDueSoon,
    ];

    /// 前端展示文案
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::PredictedCapacityShortage => "Predicted Capacity Shortage",
            AlertKind::EquipmentPerformanceDegradation => "Equipment Performance Degradation",
            AlertKind::MaterialInventoryLow => "Material Inventory Low",
            AlertKind::QualityVarianceDetected => "Quality Variance Detected",
            AlertKind::MaintenanceDueSoon => "Maintenance Due Soon",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
