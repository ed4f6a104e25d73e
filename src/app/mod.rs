// ==========================================
// 产线瓶颈智能体演示系统 - 应用层
// ==========================================
// 职责: 共享状态、仿真控制器与操作员命令层
// ==========================================

pub mod commands;
pub mod controller;
pub mod state;

// 重导出
pub use controller::SimulationController;
pub use state::AppState;
