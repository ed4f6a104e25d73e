// ==========================================
// 产线瓶颈智能体演示系统 - API层数据传输对象
// ==========================================
// 职责: 驾驶舱快照 DTO, 面向前端/渲染器的只读投影
// 说明: 快照在每次变更后整体重建, 不做增量 diff
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{AlertKind, LineStatus, ScenarioKind, TaskPriority, TaskStatus};

/// 运行时信息 (由应用层控制器维护)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeInfo {
    /// 仿真是否在运行
    pub running: bool,

    /// 当前速度倍率
    pub speed: u32,

    /// 说明面板是否展开 (纯展示)
    pub info_panel_visible: bool,
}

/// 产线视图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineView {
    /// 产线名称
    pub name: String,
    /// 吞吐量 (件/小时)
    pub throughput: f64,
    /// 节拍 (分钟)
    pub cycle_time: f64,
    /// 节拍相对基准涨幅 (%)
    pub cycle_time_increase_pct: f64,
    /// 队列长度 (件)
    pub queue_length: f64,
    /// 效率 (%)
    pub efficiency: f64,
    /// 状态分类
    pub status: LineStatus,
    /// 状态展示文案
    pub status_label: String,
}

/// 决策视图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionView {
    /// 决策时间
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

/// 任务视图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskView {
    /// 任务 ID
    pub id: u64,
    /// 产线名称
    pub line: String,
    /// 负责人
    pub assignee: String,
    /// 任务描述
    pub description: String,
    /// 优先级
    pub priority: TaskPriority,
    /// 状态
    pub status: TaskStatus,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 预计处置时长 (分钟)
    pub estimated_minutes: u32,
}

/// 预警视图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertView {
    /// 预警类型
    pub kind: AlertKind,
    /// 预警类型展示文案
    pub kind_label: String,
    /// 预警描述
    pub description: String,
    /// 建议措施
    pub action: String,
    /// 置信度 (%)
    pub confidence: u32,
    /// 预警时间
    pub timestamp: DateTime<Utc>,
}

/// 统计视图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsView {
    /// 检测到的瓶颈总数
    pub bottlenecks_detected: u64,
    /// 派发的任务总数
    pub tasks_assigned: u64,
    /// 避免的人工干预次数
    pub interventions_avoided: u64,
    /// 平均处置时长 (分钟, 无样本时为 None)
    pub average_resolution_minutes: Option<f64>,
    /// 效率提升展示值 (%)
    pub efficiency_improvement_pct: u32,
}

/// 驾驶舱快照
///
/// 当前仿真状态的完整只读投影。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// 仿真会话 ID
    pub run_id: Uuid,

    /// 快照时刻 (仿真时钟)
    pub timestamp: DateTime<Utc>,

    /// 运行时信息
    pub runtime: RuntimeInfo,

    /// 产线视图列表
    pub lines: Vec<LineView>,

    /// 决策日志 (最新在前)
    pub decisions: Vec<DecisionView>,

    /// 任务列表 (最新在前)
    pub tasks: Vec<TaskView>,

    /// 预警列表 (最新在前)
    pub alerts: Vec<AlertView>,

    /// 统计指标
    pub stats: StatsView,
}
