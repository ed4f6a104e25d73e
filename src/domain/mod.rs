// ==========================================
// 产线瓶颈智能体演示系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型与仿真状态
// 红线: 不含随机扰动逻辑,不含引擎逻辑
// ==========================================

pub mod alert;
pub mod catalog;
pub mod clock;
pub mod decision;
pub mod line;
pub mod state;
pub mod stats;
pub mod task;
pub mod types;

// 重导出核心类型
pub use alert::{alert_playbook, PredictiveAlert};
pub use catalog::{BottleneckScenario, BOTTLENECK_SCENARIOS, TEAM_MEMBERS};
pub use clock::SimClock;
pub use decision::DecisionRecord;
pub use line::{baseline_cycle_time, default_lines, ProductionLine, DEFAULT_BASELINE_CYCLE_TIME};
pub use state::{SimulationState, TASK_ID_START};
pub use stats::{AgentStats, RESOLUTION_WINDOW_CAPACITY};
pub use task::InterventionTask;
pub use types::{AlertKind, LineStatus, ScenarioKind, TaskPriority, TaskStatus};
