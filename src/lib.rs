// ==========================================
// 产线瓶颈智能体演示系统 - 核心库
// ==========================================
// 技术栈: Rust + tokio
// 系统定位: 决策支持演示 (合成瓶颈 + 智能体响应)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 仿真规则
pub mod engine;

// 配置层 - 仿真调参
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 控制器与命令
pub mod app;

// 渲染层 - 驾驶舱文本投影
pub mod render;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AlertKind, LineStatus, ScenarioKind, TaskPriority, TaskStatus};

// 领域实体
pub use domain::{
    AgentStats, DecisionRecord, InterventionTask, PredictiveAlert, ProductionLine, SimClock,
    SimulationState,
};

// 引擎
pub use engine::{
    BottleneckDetector, MetricSimulator, PredictiveAlertEngine, SimulationOrchestrator,
    StatusClassifier, TaskLifecycleEngine,
};

// 随机源
pub use engine::{RandomSource, SequenceSource, StdRandomSource};

// 配置
pub use config::SimulationConfig;

// API
pub use api::{ControlApi, DashboardApi, DashboardSnapshot};

// 应用
pub use app::{AppState, SimulationController};

// 渲染
pub use render::DashboardRenderer;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "产线瓶颈智能体演示系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
