// ==========================================
// 产线瓶颈智能体演示系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型
// 说明: 仿真内部无失败路径 (输入均为内部生成的合法随机值,
//       未知产线名回退默认基准); 错误仅出现在操作员输入
//       校验、锁获取与序列化边界
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 操作员输入无效 (如速度倍率越界)
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 状态锁获取失败
    #[error("状态锁获取失败: {0}")]
    LockError(String),

    /// 快照序列化失败
    #[error("序列化失败: {0}")]
    SerializationError(String),

    /// 内部错误
    #[error("内部错误: {0}")]
    InternalError(String),
}

/// API结果类型别名
pub type ApiResult<T> = Result<T, ApiError>;
