// ==========================================
// 产线瓶颈智能体演示系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 说明: 全部状态为进程生命周期内存态, 重启即重置
// ==========================================

use std::sync::{Arc, Mutex, MutexGuard};

use crate::api::dto::DashboardSnapshot;
use crate::api::error::{ApiError, ApiResult};
use crate::api::{ControlApi, DashboardApi};
use crate::app::controller::SimulationController;
use crate::config::SimulationConfig;
use crate::domain::{SimClock, SimulationState};
use crate::engine::{OptionalEventPublisher, RandomSource, StdRandomSource};

/// 应用状态
///
/// 包含所有API实例和共享资源。
pub struct AppState {
    /// 仿真配置
    pub config: SimulationConfig,

    /// 共享仿真状态
    sim: Arc<Mutex<SimulationState>>,

    /// 驾驶舱API
    pub dashboard_api: Arc<DashboardApi>,

    /// 仿真控制API
    pub control_api: Arc<ControlApi>,

    /// 仿真控制器
    pub controller: SimulationController,
}

impl AppState {
    /// 创建应用状态
    ///
    /// # 参数
    /// - config: 仿真配置
    /// - rng: 随机源 (注入种子以获得可复现轨迹)
    /// - events: 事件发布者
    pub fn new(
        config: SimulationConfig,
        rng: Box<dyn RandomSource>,
        events: OptionalEventPublisher,
    ) -> Self {
        let sim = Arc::new(Mutex::new(SimulationState::new(SimClock::now())));
        let rng = Arc::new(Mutex::new(rng));
        let control_api = Arc::new(ControlApi::with_events(events.clone()));
        let dashboard_api = Arc::new(DashboardApi::new());
        let controller = SimulationController::new(
            Arc::clone(&sim),
            rng,
            config.clone(),
            Arc::clone(&control_api),
            events,
        );

        Self {
            config,
            sim,
            dashboard_api,
            control_api,
            controller,
        }
    }

    /// 以默认配置 + 系统熵随机源创建
    pub fn with_defaults(events: OptionalEventPublisher) -> Self {
        Self::new(
            SimulationConfig::default(),
            Box::new(StdRandomSource::from_entropy()),
            events,
        )
    }

    /// 以显式种子创建 (可复现演示)
    pub fn with_seed(seed: u64, events: OptionalEventPublisher) -> Self {
        Self::new(
            SimulationConfig::default(),
            Box::new(StdRandomSource::seeded(seed)),
            events,
        )
    }

    /// 锁定仿真状态
    pub fn lock_sim(&self) -> ApiResult<MutexGuard<'_, SimulationState>> {
        self.sim
            .lock()
            .map_err(|e| ApiError::LockError(e.to_string()))
    }

    /// 生成当前驾驶舱快照
    pub fn snapshot(&self) -> ApiResult<DashboardSnapshot> {
        let runtime = self.controller.runtime_info()?;
        let sim = self.lock_sim()?;
        Ok(self.dashboard_api.snapshot(&sim, &self.config, runtime))
    }
}
