// ==========================================
// 产线瓶颈智能体演示系统 - 引擎层事件发布
// ==========================================
// 职责: 定义智能体事件发布 trait, 实现依赖倒置
// 说明: Engine 层定义 trait, 应用层实现订阅端
//       (原前端的 toast 通知即挂接于此缝隙)
// ==========================================

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::Arc;

// ==========================================
// 智能体事件类型
// ==========================================

/// 智能体事件触发类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentEventKind {
    /// 仿真启动
    SimulationStarted,
    /// 仿真暂停
    SimulationPaused,
    /// 速度变更
    SpeedChanged,
    /// 检测到瓶颈并派发任务
    BottleneckDetected,
    /// 手动触发瓶颈
    ManualTrigger,
}

impl AgentEventKind {
    /// 转换为字符串标识
    pub fn as_str(&self) -> &str {
        match self {
            AgentEventKind::SimulationStarted => "SimulationStarted",
            AgentEventKind::SimulationPaused => "SimulationPaused",
            AgentEventKind::SpeedChanged => "SpeedChanged",
            AgentEventKind::BottleneckDetected => "BottleneckDetected",
            AgentEventKind::ManualTrigger => "ManualTrigger",
        }
    }

    /// 对应的 i18n 文案键前缀 (toast.<key>.title / toast.<key>.message)
    pub fn i18n_key(&self) -> &str {
        match self {
            AgentEventKind::SimulationStarted => "started",
            AgentEventKind::SimulationPaused => "paused",
            AgentEventKind::SpeedChanged => "speed_changed",
            AgentEventKind::BottleneckDetected => "bottleneck",
            AgentEventKind::ManualTrigger => "manual_trigger",
        }
    }
}

/// 智能体事件
///
/// Engine 层发布的通知事件, 供应用层转成用户可见通知。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentEvent {
    /// 事件类型
    pub kind: AgentEventKind,
    /// 关联产线 (如适用)
    pub line: Option<String>,
    /// 任务负责人 (如适用)
    pub assignee: Option<String>,
    /// 新速度倍率 (如适用)
    pub speed: Option<u32>,
}

impl AgentEvent {
    /// 创建无关联信息的事件
    pub fn simple(kind: AgentEventKind) -> Self {
        Self {
            kind,
            line: None,
            assignee: None,
            speed: None,
        }
    }

    /// 创建瓶颈检测事件
    pub fn bottleneck(line: String, assignee: String) -> Self {
        Self {
            kind: AgentEventKind::BottleneckDetected,
            line: Some(line),
            assignee: Some(assignee),
            speed: None,
        }
    }

    /// 创建速度变更事件
    pub fn speed_changed(speed: u32) -> Self {
        Self {
            kind: AgentEventKind::SpeedChanged,
            line: None,
            assignee: None,
            speed: Some(speed),
        }
    }
}

// ==========================================
// 事件发布 Trait
// ==========================================

/// 智能体事件发布者 Trait
///
/// Engine 层定义, 应用层实现。
/// 通过 trait 实现依赖倒置, Engine 不依赖任何展示端。
pub trait AgentEventPublisher: Send + Sync {
    /// 发布智能体事件
    fn publish(&self, event: AgentEvent) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// 空操作事件发布者
///
/// 用于不需要通知的场景 (如单元测试)。
#[derive(Debug, Clone, Default)]
pub struct NoOpEventPublisher;

impl AgentEventPublisher for NoOpEventPublisher {
    fn publish(&self, event: AgentEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::debug!(
            "NoOpEventPublisher: 跳过事件发布 - kind={}",
            event.kind.as_str()
        );
        Ok(())
    }
}

/// 基于 tracing 的事件发布者
///
/// 把事件以结构化日志形式输出, 文案走 i18n。
#[derive(Debug, Clone, Default)]
pub struct TracingEventPublisher;

impl AgentEventPublisher for TracingEventPublisher {
    fn publish(&self, event: AgentEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        let key = event.kind.i18n_key();
        let title = crate::i18n::t(&format!("toast.{}.title", key));
        let message = crate::i18n::t(&format!("toast.{}.message", key));
        tracing::info!(
            kind = event.kind.as_str(),
            line = event.line.as_deref().unwrap_or(""),
            assignee = event.assignee.as_deref().unwrap_or(""),
            "{}: {}",
            title,
            message
        );
        Ok(())
    }
}

/// 可选的事件发布者包装
///
/// 简化 Option<Arc<dyn AgentEventPublisher>> 的使用。
#[derive(Clone, Default)]
pub struct OptionalEventPublisher {
    inner: Option<Arc<dyn AgentEventPublisher>>,
}

impl OptionalEventPublisher {
    /// 创建带发布者的实例
    pub fn with_publisher(publisher: Arc<dyn AgentEventPublisher>) -> Self {
        Self {
            inner: Some(publisher),
        }
    }

    /// 创建空实例 (不发布事件)
    pub fn none() -> Self {
        Self { inner: None }
    }

    /// 发布事件 (如果有发布者); 发布失败仅记录日志, 不中断仿真
    pub fn publish(&self, event: AgentEvent) {
        if let Some(publisher) = &self.inner {
            if let Err(e) = publisher.publish(event) {
                tracing::warn!("事件发布失败: {}", e);
            }
        }
    }
}
