// ==========================================
// 产线瓶颈智能体演示系统 - 仿真控制 API
// ==========================================
// 职责: 封装引擎编排器, 提供节拍执行/手动触发/速度校验
// 架构: API 层 -> Engine 层 (编排器)
// 说明: 定时循环本身由应用层控制器驱动,
//       本层只负责同步完成的状态变更
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::SimulationConfig;
use crate::domain::SimulationState;
use crate::engine::orchestrator::TickResult;
use crate::engine::{OptionalEventPublisher, RandomSource, SimulationOrchestrator};

// ==========================================
// ControlApi - 仿真控制 API
// ==========================================

/// 仿真控制API
pub struct ControlApi {
    orchestrator: SimulationOrchestrator,
}

impl ControlApi {
    /// 创建新的ControlApi实例 (无通知)
    pub fn new() -> Self {
        Self {
            orchestrator: SimulationOrchestrator::new(),
        }
    }

    /// 创建带事件发布者的实例
    pub fn with_events(events: OptionalEventPublisher) -> Self {
        Self {
            orchestrator: SimulationOrchestrator::with_events(events),
        }
    }

    /// 执行一个仿真节拍
    pub fn tick(
        &self,
        state: &mut SimulationState,
        config: &SimulationConfig,
        rng: &mut dyn RandomSource,
        tick_interval_ms: u64,
    ) -> TickResult {
        self.orchestrator.tick(state, config, rng, tick_interval_ms)
    }

    /// 手动触发瓶颈
    ///
    /// # 返回
    /// - (产线名, 是否生成了新决策)
    pub fn trigger_bottleneck(
        &self,
        state: &mut SimulationState,
        config: &SimulationConfig,
        rng: &mut dyn RandomSource,
    ) -> (String, bool) {
        self.orchestrator.trigger_bottleneck(state, config, rng)
    }

    /// 校验操作员提交的速度倍率
    pub fn validate_speed(&self, config: &SimulationConfig, speed: u32) -> ApiResult<()> {
        if !config.speed_in_range(speed) {
            return Err(ApiError::InvalidInput(format!(
                "速度倍率越界: speed={}, 允许范围 {}..={}",
                speed, config.min_speed, config.max_speed
            )));
        }
        Ok(())
    }
}

impl Default for ControlApi {
    fn default() -> Self {
        Self::new()
    }
}
