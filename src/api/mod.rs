// ==========================================
// 产线瓶颈智能体演示系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口, 供应用层命令调用
// ==========================================

pub mod control_api;
pub mod dashboard_api;
pub mod dto;
pub mod error;

// 重导出核心类型
pub use control_api::ControlApi;
pub use dashboard_api::DashboardApi;
pub use dto::{
    AlertView, DashboardSnapshot, DecisionView, LineView, RuntimeInfo, StatsView, TaskView,
};
pub use error::{ApiError, ApiResult};
