// ==========================================
// 产线瓶颈智能体演示系统 - 仿真配置
// ==========================================
// 职责: 仿真调参项全集 (节拍/阈值/扰动/容量)
// 说明: 本系统无持久化, 配置为进程内默认值 + 构造时覆写
// ==========================================

use serde::{Deserialize, Serialize};

/// 仿真配置 (SimulationConfig)
///
/// 所有概率门均为 "随机抽样 > 门限" 判定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    // ===== 节拍与速度 =====
    /// 基准节拍间隔 (毫秒), 实际间隔 = 基准 / 速度倍率
    pub base_tick_ms: u64,

    /// 速度倍率下限
    pub min_speed: u32,

    /// 速度倍率上限
    pub max_speed: u32,

    /// 变速重启前的固定短延迟 (毫秒)
    pub restart_delay_ms: u64,

    // ===== 有界列表容量 =====
    /// 决策日志容量
    pub decision_log_cap: usize,

    /// 任务列表容量
    pub task_list_cap: usize,

    /// 预警列表容量
    pub alert_list_cap: usize,

    // ===== 指标扰动幅度 =====
    /// 吞吐量扰动幅度 (件/小时)
    pub throughput_jitter: f64,

    /// 节拍扰动幅度 (分钟)
    pub cycle_time_jitter: f64,

    /// 队列扰动幅度 (件)
    pub queue_jitter: f64,

    /// 效率扰动幅度 (%)
    pub efficiency_jitter: f64,

    // ===== 指标钳制 =====
    /// 吞吐量下限
    pub throughput_floor: f64,

    /// 节拍下限
    pub cycle_time_floor: f64,

    /// 队列下限
    pub queue_floor: f64,

    /// 效率下限
    pub efficiency_floor: f64,

    /// 效率上限
    pub efficiency_ceiling: f64,

    // ===== 状态分类阈值 =====
    /// Critical: 节拍涨幅阈值 (%)
    pub critical_increase_pct: f64,

    /// Critical: 效率阈值 (%)
    pub critical_efficiency: f64,

    /// Critical: 队列阈值 (件)
    pub critical_queue: f64,

    /// Warning: 节拍涨幅阈值 (%)
    pub warning_increase_pct: f64,

    /// Warning: 效率阈值 (%)
    pub warning_efficiency: f64,

    /// Warning: 队列阈值 (件)
    pub warning_queue: f64,

    // ===== 瓶颈检测 =====
    /// 同一产线的决策去重窗口 (毫秒, 仿真时间)
    pub dedup_window_ms: u64,

    /// 检测概率门限
    pub detection_gate: f64,

    /// 高优先级概率门限
    pub high_priority_gate: f64,

    /// 处置时长下限 (分钟)
    pub resolution_minutes_min: u32,

    /// 处置时长随机跨度 (分钟)
    pub resolution_minutes_span: u32,

    // ===== 任务生命周期 =====
    /// Assigned -> Progress 的最小年龄 (秒)
    pub task_progress_age_s: f64,

    /// Assigned -> Progress 的概率门限
    pub task_progress_gate: f64,

    /// Progress -> Completed 的最小年龄 (秒)
    pub task_complete_age_s: f64,

    /// Progress -> Completed 的概率门限
    pub task_complete_gate: f64,

    // ===== 预测预警 =====
    /// 预警生成概率门限
    pub alert_gate: f64,

    /// 置信度下限 (%)
    pub confidence_min: u32,

    /// 置信度随机跨度 (%)
    pub confidence_span: u32,

    // ===== 手动触发 =====
    /// 手动触发: 节拍放大倍数
    pub forced_cycle_multiplier: f64,

    /// 手动触发: 效率上限钳制
    pub forced_efficiency_cap: f64,

    /// 手动触发: 队列下限抬升
    pub forced_queue_floor: f64,

    // ===== 统计展示 =====
    /// 效率提升展示值上限 (%)
    pub efficiency_improvement_cap: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            base_tick_ms: 3000,
            min_speed: 1,
            max_speed: 10,
            restart_delay_ms: 100,

            decision_log_cap: 10,
            task_list_cap: 8,
            alert_list_cap: 6,

            throughput_jitter: 10.0,
            cycle_time_jitter: 3.0,
            queue_jitter: 5.0,
            efficiency_jitter: 4.0,

            throughput_floor: 50.0,
            cycle_time_floor: 5.0,
            queue_floor: 0.0,
            efficiency_floor: 60.0,
            efficiency_ceiling: 100.0,

            critical_increase_pct: 30.0,
            critical_efficiency: 75.0,
            critical_queue: 40.0,
            warning_increase_pct: 15.0,
            warning_efficiency: 85.0,
            warning_queue: 30.0,

            dedup_window_ms: 30_000,
            detection_gate: 0.7,
            high_priority_gate: 0.5,
            resolution_minutes_min: 10,
            resolution_minutes_span: 20,

            task_progress_age_s: 5.0,
            task_progress_gate: 0.7,
            task_complete_age_s: 15.0,
            task_complete_gate: 0.6,

            alert_gate: 0.85,
            confidence_min: 75,
            confidence_span: 20,

            forced_cycle_multiplier: 1.5,
            forced_efficiency_cap: 70.0,
            forced_queue_floor: 45.0,

            efficiency_improvement_cap: 25,
        }
    }
}

impl SimulationConfig {
    /// 校验速度倍率是否在允许范围内
    pub fn speed_in_range(&self, speed: u32) -> bool {
        (self.min_speed..=self.max_speed).contains(&speed)
    }

    /// 指定速度倍率下的节拍间隔 (毫秒)
    ///
    /// 速度越大间隔越短; 间隔至少为 1 毫秒。
    pub fn tick_interval_ms(&self, speed: u32) -> u64 {
        (self.base_tick_ms / u64::from(speed.max(1))).max(1)
    }
}
