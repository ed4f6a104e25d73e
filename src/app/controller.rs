// ==========================================
// 产线瓶颈智能体演示系统 - 仿真控制器
// ==========================================
// 职责: 驱动周期性节拍循环 (tokio 定时任务 + 取消句柄)
// 并发模型: 单逻辑控制线程; 节拍任务与操作员命令共享
//           同一个状态锁, 命令同步完成后下一节拍才会执行
// 语义:
// - start: 按当前速度启动循环 (已运行则无操作)
// - pause: 中止挂起的定时任务 (未运行则无操作)
// - set_speed: 运行中变速 = 暂停 -> 固定短延迟 -> 重启
// ==========================================

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::api::dto::RuntimeInfo;
use crate::api::error::{ApiError, ApiResult};
use crate::api::ControlApi;
use crate::config::SimulationConfig;
use crate::domain::SimulationState;
use crate::engine::{AgentEvent, AgentEventKind, OptionalEventPublisher, RandomSource};

/// 控制器运行时标志
struct RuntimeFlags {
    /// 是否在运行
    running: bool,

    /// 当前速度倍率
    speed: u32,

    /// 说明面板是否展开
    info_panel_visible: bool,

    /// 节拍任务句柄 (运行中为 Some)
    handle: Option<JoinHandle<()>>,
}

/// 控制器共享内部
struct ControllerShared {
    sim: Arc<Mutex<SimulationState>>,
    rng: Arc<Mutex<Box<dyn RandomSource>>>,
    config: SimulationConfig,
    control_api: Arc<ControlApi>,
    events: OptionalEventPublisher,
    flags: Mutex<RuntimeFlags>,
}

// ==========================================
// SimulationController - 仿真控制器
// ==========================================

/// 仿真控制器
///
/// 持有节拍任务句柄与运行时标志, 对外提供
/// start / pause / set_speed / trigger / toggle_info。
#[derive(Clone)]
pub struct SimulationController {
    shared: Arc<ControllerShared>,
}

impl SimulationController {
    /// 创建控制器
    ///
    /// # 参数
    /// - sim: 共享仿真状态
    /// - rng: 共享随机源
    /// - config: 仿真配置
    /// - control_api: 控制 API
    /// - events: 事件发布者
    pub fn new(
        sim: Arc<Mutex<SimulationState>>,
        rng: Arc<Mutex<Box<dyn RandomSource>>>,
        config: SimulationConfig,
        control_api: Arc<ControlApi>,
        events: OptionalEventPublisher,
    ) -> Self {
        let default_speed = config.min_speed;
        Self {
            shared: Arc::new(ControllerShared {
                sim,
                rng,
                config,
                control_api,
                events,
                flags: Mutex::new(RuntimeFlags {
                    running: false,
                    speed: default_speed,
                    info_panel_visible: false,
                    handle: None,
                }),
            }),
        }
    }

    /// 启动周期节拍循环
    ///
    /// # 返回
    /// - Ok(true): 已启动
    /// - Ok(false): 本已在运行, 无操作
    pub fn start(&self) -> ApiResult<bool> {
        let mut flags = self.lock_flags()?;
        if flags.running {
            return Ok(false);
        }

        let interval_ms = self.shared.config.tick_interval_ms(flags.speed);
        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // interval 的第一次 tick 立即完成, 先消费掉,
            // 保证与 setInterval 一致: 首个节拍在一个间隔之后
            interval.tick().await;
            loop {
                interval.tick().await;
                let Ok(mut sim) = shared.sim.lock() else {
                    tracing::error!("仿真状态锁已污染, 节拍循环退出");
                    break;
                };
                let Ok(mut rng) = shared.rng.lock() else {
                    tracing::error!("随机源锁已污染, 节拍循环退出");
                    break;
                };
                shared
                    .control_api
                    .tick(&mut sim, &shared.config, rng.as_mut(), interval_ms);
            }
        });

        flags.running = true;
        flags.handle = Some(handle);
        drop(flags);

        tracing::info!(interval_ms, "仿真已启动");
        self.shared
            .events
            .publish(AgentEvent::simple(AgentEventKind::SimulationStarted));
        Ok(true)
    }

    /// 暂停节拍循环 (中止挂起的定时任务)
    ///
    /// # 返回
    /// - Ok(true): 已暂停
    /// - Ok(false): 本未运行, 无操作
    pub fn pause(&self) -> ApiResult<bool> {
        let mut flags = self.lock_flags()?;
        if !flags.running {
            return Ok(false);
        }

        if let Some(handle) = flags.handle.take() {
            handle.abort();
        }
        flags.running = false;
        drop(flags);

        tracing::info!("仿真已暂停");
        self.shared
            .events
            .publish(AgentEvent::simple(AgentEventKind::SimulationPaused));
        Ok(true)
    }

    /// 变更速度倍率
    ///
    /// 运行中变速为 "暂停 -> 固定短延迟 -> 重启",
    /// 期间节拍短暂停顿 (无害)。
    pub async fn set_speed(&self, speed: u32) -> ApiResult<()> {
        self.shared
            .control_api
            .validate_speed(&self.shared.config, speed)?;

        let was_running = {
            let mut flags = self.lock_flags()?;
            let was_running = flags.running;
            if was_running {
                if let Some(handle) = flags.handle.take() {
                    handle.abort();
                }
                flags.running = false;
            }
            flags.speed = speed;
            was_running
        };

        self.shared.events.publish(AgentEvent::speed_changed(speed));

        if was_running {
            tokio::time::sleep(Duration::from_millis(self.shared.config.restart_delay_ms)).await;
            self.start()?;
        }
        Ok(())
    }

    /// 手动触发瓶颈 (同步完成)
    ///
    /// # 返回
    /// - (产线名, 是否生成了新决策)
    pub fn trigger_bottleneck(&self) -> ApiResult<(String, bool)> {
        let mut sim = self.lock_sim()?;
        let mut rng = self.lock_rng()?;
        Ok(self
            .shared
            .control_api
            .trigger_bottleneck(&mut sim, &self.shared.config, rng.as_mut()))
    }

    /// 切换说明面板 (纯展示)
    ///
    /// # 返回
    /// 切换后的可见性
    pub fn toggle_info(&self) -> ApiResult<bool> {
        let mut flags = self.lock_flags()?;
        flags.info_panel_visible = !flags.info_panel_visible;
        Ok(flags.info_panel_visible)
    }

    /// 当前运行时信息
    pub fn runtime_info(&self) -> ApiResult<RuntimeInfo> {
        let flags = self.lock_flags()?;
        Ok(RuntimeInfo {
            running: flags.running,
            speed: flags.speed,
            info_panel_visible: flags.info_panel_visible,
        })
    }

    /// 当前速度倍率
    pub fn speed(&self) -> ApiResult<u32> {
        Ok(self.lock_flags()?.speed)
    }

    fn lock_flags(&self) -> ApiResult<MutexGuard<'_, RuntimeFlags>> {
        self.shared
            .flags
            .lock()
            .map_err(|e| ApiError::LockError(e.to_string()))
    }

    fn lock_sim(&self) -> ApiResult<MutexGuard<'_, SimulationState>> {
        self.shared
            .sim
            .lock()
            .map_err(|e| ApiError::LockError(e.to_string()))
    }

    fn lock_rng(&self) -> ApiResult<MutexGuard<'_, Box<dyn RandomSource>>> {
        self.shared
            .rng
            .lock()
            .map_err(|e| ApiError::LockError(e.to_string()))
    }
}
