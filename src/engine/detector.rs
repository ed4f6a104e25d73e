// ==========================================
// 产线瓶颈智能体演示系统 - 瓶颈检测引擎
// ==========================================
// 职责: 对 Critical 产线做去抖的非确定性事件生成
// 输入: 仿真状态 + 配置 + 随机源
// 输出: 决策记录 + 处置任务 + 统计更新 + 通知事件
// ==========================================
// 门控 (每节拍每产线):
// 1. 状态分类为 Critical
// 2. 去重: 同产线 30 秒 (仿真时间) 内无决策记录
// 3. 概率门: 随机抽样 > 检测门限
// 手动触发绕过概率门, 但仍受去重窗口约束。
// ==========================================

use crate::config::SimulationConfig;
use crate::domain::{
    DecisionRecord, InterventionTask, LineStatus, SimulationState, TaskPriority, TaskStatus,
    BOTTLENECK_SCENARIOS, TEAM_MEMBERS,
};
use crate::engine::events::{AgentEvent, OptionalEventPublisher};
use crate::engine::sampler::RandomSource;
use crate::engine::status::StatusClassifier;

// ==========================================
// BottleneckDetector - 瓶颈检测引擎
// ==========================================
pub struct BottleneckDetector {
    classifier: StatusClassifier,
}

impl BottleneckDetector {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            classifier: StatusClassifier::new(),
        }
    }

    /// 每节拍的检测扫描
    ///
    /// 按产线固定顺序逐条判定三重门控, 返回本节拍触发的检测数。
    pub fn sweep(
        &self,
        state: &mut SimulationState,
        config: &SimulationConfig,
        rng: &mut dyn RandomSource,
        events: &OptionalEventPublisher,
    ) -> usize {
        let mut detected = 0;
        for index in 0..state.lines.len() {
            let status = self.classifier.classify(&state.lines[index], config);
            if status != LineStatus::Critical {
                continue;
            }
            if state.has_recent_decision(&state.lines[index].name, config.dedup_window_ms) {
                continue;
            }
            if !rng.passes_gate(config.detection_gate) {
                continue;
            }
            self.record_detection(state, config, rng, events, index);
            detected += 1;
        }
        detected
    }

    /// 对指定产线执行检测 (绕过概率门, 保留去重窗口)
    ///
    /// # 返回
    /// - true: 生成了新的决策与任务
    /// - false: 被去重窗口拦截
    pub fn detect_line(
        &self,
        state: &mut SimulationState,
        config: &SimulationConfig,
        rng: &mut dyn RandomSource,
        events: &OptionalEventPublisher,
        line_index: usize,
    ) -> bool {
        let line_name = state.lines[line_index].name.clone();
        if state.has_recent_decision(&line_name, config.dedup_window_ms) {
            tracing::debug!("检测去重: {} 在窗口内已有决策", line_name);
            return false;
        }
        self.record_detection(state, config, rng, events, line_index);
        true
    }

    /// 生成决策记录与处置任务, 更新统计并发布事件
    ///
    /// 抽样顺序固定: 场景 -> 负责人 -> 处置时长 -> 优先级。
    fn record_detection(
        &self,
        state: &mut SimulationState,
        config: &SimulationConfig,
        rng: &mut dyn RandomSource,
        events: &OptionalEventPublisher,
        line_index: usize,
    ) {
        let scenario = &BOTTLENECK_SCENARIOS[rng.pick_index(BOTTLENECK_SCENARIOS.len())];
        let assignee = TEAM_MEMBERS[rng.pick_index(TEAM_MEMBERS.len())];
        let resolution_minutes =
            rng.int_in_span(config.resolution_minutes_min, config.resolution_minutes_span);

        let now = state.now();
        let line = &state.lines[line_index];
        let decision = DecisionRecord {
            timestamp: now,
            line: line.name.clone(),
            event: format!("Bottleneck detected on {}", line.name),
            analysis: format!(
                "Cycle time: {:.1}min (+{:.0}%), Queue: {} units, Efficiency: {:.0}%",
                line.cycle_time,
                line.cycle_time_increase_pct(),
                line.queue_length.floor() as i64,
                line.efficiency
            ),
            action: scenario.action.to_string(),
            assignee: assignee.to_string(),
            impact: format!("Expected resolution in {} minutes", resolution_minutes),
            scenario_kind: scenario.kind,
        };
        let line_name = decision.line.clone();

        tracing::info!(
            line = line_name.as_str(),
            scenario = scenario.kind.as_str(),
            assignee,
            resolution_minutes,
            "检测到瓶颈, 已生成决策"
        );

        state.stats.record_detection(resolution_minutes);
        state.push_decision(decision, config.decision_log_cap);

        let task_id = state.allocate_task_id();
        let priority = if rng.passes_gate(config.high_priority_gate) {
            TaskPriority::High
        } else {
            TaskPriority::Medium
        };
        let task = InterventionTask {
            id: task_id,
            line: line_name.clone(),
            assignee: assignee.to_string(),
            description: scenario.task.to_string(),
            priority,
            status: TaskStatus::Assigned,
            created_at: now,
            estimated_minutes: resolution_minutes,
        };
        state.push_task(task, config.task_list_cap);
        state.stats.record_task_assigned();

        events.publish(AgentEvent::bottleneck(line_name, assignee.to_string()));
    }
}

impl Default for BottleneckDetector {
    fn default() -> Self {
        Self::new()
    }
}
