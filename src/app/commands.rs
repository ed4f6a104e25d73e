// ==========================================
// 产线瓶颈智能体演示系统 - 操作员命令层
// ==========================================
// 职责: 操作员可调用的命令全集, 连接前端与后端
// 约定: 结果与错误均序列化为 JSON 字符串返回,
//       与桌面壳/页面壳的调用约定保持一致
// 命令: start / pause / set_speed / trigger_bottleneck /
//       toggle_info / get_dashboard
// ==========================================

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::error::ApiError;
use crate::app::state::AppState;

// ==========================================
// 公共工具: 错误映射
// ==========================================

/// 错误响应 (返回给前端)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,
}

/// 将ApiError转换为JSON字符串
pub(crate) fn map_api_error(err: ApiError) -> String {
    let error_response = ErrorResponse {
        code: match &err {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::LockError(_) => "LOCK_ERROR",
            ApiError::SerializationError(_) => "SERIALIZATION_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
        .to_string(),
        message: err.to_string(),
    };

    serde_json::to_string(&error_response)
        .unwrap_or_else(|_| format!("{{\"code\":\"INTERNAL_ERROR\",\"message\":\"{}\"}}", err))
}

// ==========================================
// 仿真控制命令
// ==========================================

/// 启动仿真
pub async fn start_simulation(state: &AppState) -> Result<String, String> {
    let started = state.controller.start().map_err(map_api_error)?;
    Ok(json!({ "started": started }).to_string())
}

/// 暂停仿真
pub async fn pause_simulation(state: &AppState) -> Result<String, String> {
    let paused = state.controller.pause().map_err(map_api_error)?;
    Ok(json!({ "paused": paused }).to_string())
}

/// 变更速度倍率
///
/// 运行中变速为 "暂停 -> 固定短延迟 -> 重启"。
pub async fn set_simulation_speed(state: &AppState, speed: u32) -> Result<String, String> {
    state
        .controller
        .set_speed(speed)
        .await
        .map_err(map_api_error)?;
    Ok(json!({ "speed": speed }).to_string())
}

/// 手动触发瓶颈
pub async fn trigger_bottleneck(state: &AppState) -> Result<String, String> {
    let (line, detected) = state
        .controller
        .trigger_bottleneck()
        .map_err(map_api_error)?;
    Ok(json!({ "line": line, "detected": detected }).to_string())
}

/// 切换说明面板 (纯展示)
pub async fn toggle_info(state: &AppState) -> Result<String, String> {
    let visible = state.controller.toggle_info().map_err(map_api_error)?;
    Ok(json!({ "info_panel_visible": visible }).to_string())
}

// ==========================================
// 驾驶舱查询命令
// ==========================================

/// 获取驾驶舱快照
pub async fn get_dashboard(state: &AppState) -> Result<String, String> {
    let snapshot = state.snapshot().map_err(map_api_error)?;
    serde_json::to_string(&snapshot)
        .map_err(|e| map_api_error(ApiError::SerializationError(e.to_string())))
}
