// ==========================================
// 产线瓶颈智能体演示系统 - 仿真状态
// ==========================================
// 职责: 显式的仿真状态结构, 取代进程级全局变量
// 说明: 所有更新函数接收 &mut SimulationState,
//       支持多个独立仿真实例与确定性测试
// 约束: 有界列表均为最新在前, 按容量 FIFO 淘汰
// ==========================================

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::alert::PredictiveAlert;
use crate::domain::clock::SimClock;
use crate::domain::decision::DecisionRecord;
use crate::domain::line::{default_lines, ProductionLine};
use crate::domain::stats::AgentStats;
use crate::domain::task::InterventionTask;

/// 任务 ID 起始值
pub const TASK_ID_START: u64 = 1000;

/// 仿真状态 (SimulationState)
///
/// 一次仿真会话的全部可变状态。
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// 仿真会话 ID
    pub run_id: Uuid,

    /// 产线列表 (固定 5 条)
    pub lines: Vec<ProductionLine>,

    /// 决策日志 (最新在前)
    pub decision_log: Vec<DecisionRecord>,

    /// 处置任务列表 (最新在前)
    pub tasks: Vec<InterventionTask>,

    /// 预测预警列表 (最新在前)
    pub alerts: Vec<PredictiveAlert>,

    /// 智能体统计
    pub stats: AgentStats,

    /// 仿真时钟
    pub clock: SimClock,

    /// 下一个任务 ID
    next_task_id: u64,
}

impl SimulationState {
    /// 以指定时钟创建初始状态
    pub fn new(clock: SimClock) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            lines: default_lines(),
            decision_log: Vec::new(),
            tasks: Vec::new(),
            alerts: Vec::new(),
            stats: AgentStats::default(),
            clock,
            next_task_id: TASK_ID_START,
        }
    }

    /// 当前仿真时刻
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.current()
    }

    /// 分配下一个任务 ID (自增)
    pub fn allocate_task_id(&mut self) -> u64 {
        let id = self.next_task_id;
        self.next_task_id += 1;
        id
    }

    /// 头插一条决策记录, 超出容量时淘汰最旧的一条
    pub fn push_decision(&mut self, decision: DecisionRecord, cap: usize) {
        self.decision_log.insert(0, decision);
        self.decision_log.truncate(cap);
    }

    /// 头插一条处置任务, 超出容量时淘汰最旧的一条 (未完成的也淘汰)
    pub fn push_task(&mut self, task: InterventionTask, cap: usize) {
        self.tasks.insert(0, task);
        self.tasks.truncate(cap);
    }

    /// 头插一条预测预警, 超出容量时淘汰最旧的一条
    pub fn push_alert(&mut self, alert: PredictiveAlert, cap: usize) {
        self.alerts.insert(0, alert);
        self.alerts.truncate(cap);
    }

    /// 指定产线在去重窗口内是否已有决策记录
    pub fn has_recent_decision(&self, line_name: &str, window_ms: u64) -> bool {
        let now = self.now();
        self.decision_log.iter().any(|d| {
            d.line == line_name
                && (now - d.timestamp).num_milliseconds() < window_ms as i64
        })
    }

    /// 按名称查找产线下标
    pub fn line_index(&self, line_name: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.name == line_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ScenarioKind;
    use chrono::TimeZone;

    fn test_state() -> SimulationState {
        let start = Utc.with_ymd_and_hms(2026, 1, 20, 8, 0, 0).unwrap();
        SimulationState::new(SimClock::starting_at(start))
    }

    fn test_decision(state: &SimulationState, line: &str) -> DecisionRecord {
        DecisionRecord {
            timestamp: state.now(),
            line: line.to_string(),
            event: format!("Bottleneck detected on {}", line),
            analysis: String::new(),
            action: String::new(),
            assignee: "Maria Santos".to_string(),
            impact: String::new(),
            scenario_kind: ScenarioKind::CapacityShortage,
        }
    }

    #[test]
    fn test_task_ids_start_at_1000() {
        let mut state = test_state();
        assert_eq!(state.allocate_task_id(), 1000);
        assert_eq!(state.allocate_task_id(), 1001);
    }

    #[test]
    fn test_decision_log_cap_and_order() {
        let mut state = test_state();
        for i in 0..12 {
            let mut d = test_decision(&state, "Assembly Line A");
            d.event = format!("event {}", i);
            state.push_decision(d, 10);
        }
        assert_eq!(state.decision_log.len(), 10);
        // 最新在前
        assert_eq!(state.decision_log[0].event, "event 11");
        // 最旧的 0/1 已被淘汰
        assert_eq!(state.decision_log[9].event, "event 2");
    }

    #[test]
    fn test_recent_decision_window() {
        let mut state = test_state();
        let d = test_decision(&state, "Paint Shop E");
        state.push_decision(d, 10);

        assert!(state.has_recent_decision("Paint Shop E", 30_000));
        assert!(!state.has_recent_decision("Assembly Line A", 30_000));

        // 推进 30 秒后窗口过期
        state.clock.advance_ms(30_000);
        assert!(!state.has_recent_decision("Paint Shop E", 30_000));
    }
}
