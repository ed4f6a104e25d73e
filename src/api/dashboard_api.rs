// ==========================================
// 产线瓶颈智能体演示系统 - 驾驶舱 API
// ==========================================
// 职责: 把仿真状态投影为驾驶舱快照 DTO
// 架构: API 层 -> Engine 层 (状态分类) + Domain 层
// 说明: 无状态投影, 每次调用整体重建快照
// ==========================================

use crate::api::dto::{
    AlertView, DashboardSnapshot, DecisionView, LineView, RuntimeInfo, StatsView, TaskView,
};
use crate::config::SimulationConfig;
use crate::domain::SimulationState;
use crate::engine::StatusClassifier;

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱API
///
/// 职责:
/// 1. 产线视图 (含状态分类)
/// 2. 决策/任务/预警日志视图
/// 3. 统计聚合视图
pub struct DashboardApi {
    classifier: StatusClassifier,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    pub fn new() -> Self {
        Self {
            classifier: StatusClassifier::new(),
        }
    }

    /// 生成驾驶舱快照
    ///
    /// # 参数
    /// - state: 仿真状态
    /// - config: 仿真配置 (分类阈值)
    /// - runtime: 应用层运行时信息 (运行标志/速度/说明面板)
    pub fn snapshot(
        &self,
        state: &SimulationState,
        config: &SimulationConfig,
        runtime: RuntimeInfo,
    ) -> DashboardSnapshot {
        let lines = state
            .lines
            .iter()
            .map(|line| {
                let status = self.classifier.classify(line, config);
                LineView {
                    name: line.name.clone(),
                    throughput: line.throughput,
                    cycle_time: line.cycle_time,
                    cycle_time_increase_pct: line.cycle_time_increase_pct(),
                    queue_length: line.queue_length,
                    efficiency: line.efficiency,
                    status,
                    status_label: status.label().to_string(),
                }
            })
            .collect();

        let decisions = state
            .decision_log
            .iter()
            .map(|d| DecisionView {
                timestamp: d.timestamp,
                line: d.line.clone(),
                event: d.event.clone(),
                analysis: d.analysis.clone(),
                action: d.action.clone(),
                assignee: d.assignee.clone(),
                impact: d.impact.clone(),
                scenario_kind: d.scenario_kind,
            })
            .collect();

        let tasks = state
            .tasks
            .iter()
            .map(|t| TaskView {
                id: t.id,
                line: t.line.clone(),
                assignee: t.assignee.clone(),
                description: t.description.clone(),
                priority: t.priority,
                status: t.status,
                created_at: t.created_at,
                estimated_minutes: t.estimated_minutes,
            })
            .collect();

        let alerts = state
            .alerts
            .iter()
            .map(|a| AlertView {
                kind: a.kind,
                kind_label: a.kind.label().to_string(),
                description: a.description.clone(),
                action: a.action.clone(),
                confidence: a.confidence,
                timestamp: a.timestamp,
            })
            .collect();

        let stats = StatsView {
            bottlenecks_detected: state.stats.bottlenecks_detected,
            tasks_assigned: state.stats.tasks_assigned,
            interventions_avoided: state.stats.interventions_avoided,
            average_resolution_minutes: state.stats.average_resolution_minutes(),
            efficiency_improvement_pct: state.stats.efficiency_improvement_pct,
        };

        DashboardSnapshot {
            run_id: state.run_id,
            timestamp: state.now(),
            runtime,
            lines,
            decisions,
            tasks,
            alerts,
            stats,
        }
    }
}

impl Default for DashboardApi {
    fn default() -> Self {
        Self::new()
    }
}
