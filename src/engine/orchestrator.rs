// ==========================================
// 产线瓶颈智能体演示系统 - 引擎编排器
// ==========================================
// 用途: 协调四个核心引擎在一个节拍内的执行顺序
// 顺序: 推进时钟 -> 指标扰动 -> 瓶颈检测 -> 任务推进 -> 预测预警 -> 统计重算
// 对应智能体环: 感知 -> 分析 -> 决策 -> 执行 -> 学习
// ==========================================

use crate::config::SimulationConfig;
use crate::domain::SimulationState;
use crate::engine::alerts::PredictiveAlertEngine;
use crate::engine::detector::BottleneckDetector;
use crate::engine::events::{AgentEvent, AgentEventKind, OptionalEventPublisher};
use crate::engine::lifecycle::TaskLifecycleEngine;
use crate::engine::metrics::MetricSimulator;
use crate::engine::sampler::RandomSource;

// ==========================================
// TickResult - 单节拍执行结果
// ==========================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// 本节拍触发的瓶颈检测数
    pub bottlenecks_detected: usize,

    /// 本节拍前移的任务数
    pub tasks_advanced: usize,

    /// 本节拍是否生成了预测预警
    pub alert_generated: bool,
}

// ==========================================
// SimulationOrchestrator - 引擎编排器
// ==========================================

pub struct SimulationOrchestrator {
    simulator: MetricSimulator,
    detector: BottleneckDetector,
    lifecycle: TaskLifecycleEngine,
    alerts: PredictiveAlertEngine,
    events: OptionalEventPublisher,
}

impl SimulationOrchestrator {
    /// 创建编排器 (无通知)
    pub fn new() -> Self {
        Self::with_events(OptionalEventPublisher::none())
    }

    /// 创建带事件发布者的编排器
    pub fn with_events(events: OptionalEventPublisher) -> Self {
        Self {
            simulator: MetricSimulator::new(),
            detector: BottleneckDetector::new(),
            lifecycle: TaskLifecycleEngine::new(),
            alerts: PredictiveAlertEngine::new(),
            events,
        }
    }

    /// 执行一个仿真节拍
    ///
    /// # 参数
    /// - state: 仿真状态
    /// - config: 仿真配置
    /// - rng: 随机源
    /// - tick_interval_ms: 本节拍推进的仿真毫秒数 (= 基准间隔 / 速度)
    pub fn tick(
        &self,
        state: &mut SimulationState,
        config: &SimulationConfig,
        rng: &mut dyn RandomSource,
        tick_interval_ms: u64,
    ) -> TickResult {
        state.clock.advance_ms(tick_interval_ms);

        self.simulator.perturb_all(&mut state.lines, config, rng);
        let bottlenecks_detected = self.detector.sweep(state, config, rng, &self.events);
        let tasks_advanced = self.lifecycle.advance_all(state, config, rng);
        let alert_generated = self.alerts.maybe_generate(state, config, rng);
        self.refresh_display_stats(state, config, rng);

        tracing::debug!(
            tick_elapsed_ms = state.clock.elapsed_ms(),
            bottlenecks_detected,
            tasks_advanced,
            alert_generated,
            "仿真节拍完成"
        );

        TickResult {
            bottlenecks_detected,
            tasks_advanced,
            alert_generated,
        }
    }

    /// 手动触发瓶颈
    ///
    /// 均匀随机选择一条产线, 强制其指标进入瓶颈区间,
    /// 随后立刻执行检测 (绕过概率门, 保留去重窗口)。
    ///
    /// # 返回
    /// - (产线名, true): 生成了新决策
    /// - (产线名, false): 被去重窗口拦截
    pub fn trigger_bottleneck(
        &self,
        state: &mut SimulationState,
        config: &SimulationConfig,
        rng: &mut dyn RandomSource,
    ) -> (String, bool) {
        let index = rng.pick_index(state.lines.len());
        self.force_bottleneck_metrics(state, config, index);
        let line_name = state.lines[index].name.clone();

        self.events.publish(AgentEvent {
            kind: AgentEventKind::ManualTrigger,
            line: Some(line_name.clone()),
            assignee: None,
            speed: None,
        });

        let detected = self
            .detector
            .detect_line(state, config, rng, &self.events, index);
        if detected {
            self.refresh_display_stats(state, config, rng);
        }
        (line_name, detected)
    }

    /// 对指定产线强制施加瓶颈指标
    pub fn force_bottleneck_metrics(
        &self,
        state: &mut SimulationState,
        config: &SimulationConfig,
        line_index: usize,
    ) {
        let line = &mut state.lines[line_index];
        line.cycle_time *= config.forced_cycle_multiplier;
        line.efficiency = line.efficiency.min(config.forced_efficiency_cap);
        line.queue_length = line.queue_length.max(config.forced_queue_floor);
        tracing::info!(line = line.name.as_str(), "手动注入瓶颈指标");
    }

    /// 重算展示用统计值
    ///
    /// 效率提升展示值 = min(上限, 检测数*2 + U{0..4});
    /// 每节拍与每次检测后重算一次, 渲染器只读。
    fn refresh_display_stats(
        &self,
        state: &mut SimulationState,
        config: &SimulationConfig,
        rng: &mut dyn RandomSource,
    ) {
        if state.stats.bottlenecks_detected == 0 {
            return;
        }
        let bonus = rng.int_in_span(0, 5);
        let improvement = (state.stats.bottlenecks_detected as u32).saturating_mul(2) + bonus;
        state.stats.efficiency_improvement_pct =
            improvement.min(config.efficiency_improvement_cap);
    }
}

impl Default for SimulationOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
