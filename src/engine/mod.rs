// ==========================================
// 产线瓶颈智能体演示系统 - 引擎层
// ==========================================
// 职责: 实现仿真业务规则, 全部为无状态引擎
// 红线: 引擎不持有可变状态, 随机性只经 RandomSource 进入
// ==========================================

pub mod alerts;
pub mod detector;
pub mod events;
pub mod lifecycle;
pub mod metrics;
pub mod orchestrator;
pub mod sampler;
pub mod status;

// 重导出核心引擎
pub use alerts::PredictiveAlertEngine;
pub use detector::BottleneckDetector;
pub use events::{
    AgentEvent, AgentEventKind, AgentEventPublisher, NoOpEventPublisher, OptionalEventPublisher,
    TracingEventPublisher,
};
pub use lifecycle::TaskLifecycleEngine;
pub use metrics::MetricSimulator;
pub use orchestrator::{SimulationOrchestrator, TickResult};
pub use sampler::{RandomSource, SequenceSource, StdRandomSource};
pub use status::StatusClassifier;
