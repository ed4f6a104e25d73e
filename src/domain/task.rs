// ==========================================
// 产线瓶颈智能体演示系统 - 领域实体：处置任务
// ==========================================
// 职责: 派发给班组成员的模拟处置工单
// 约束: 任务列表最新在前, 上限 8 条 (未完成的也按 FIFO 淘汰)
// 状态机: Assigned -> Progress -> Completed, 只进不退
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{TaskPriority, TaskStatus};

/// 处置任务 (InterventionTask)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionTask {
    /// 任务 ID (自增, 起始 1000)
    pub id: u64,

    /// 产线名称
    pub line: String,

    /// 负责人
    pub assignee: String,

    /// 任务描述
    pub description: String,

    /// 优先级
    pub priority: TaskPriority,

    /// 当前状态
    pub status: TaskStatus,

    /// 创建时间 (仿真时钟)
    pub created_at: DateTime<Utc>,

    /// 预计处置时长 (分钟)
    pub estimated_minutes: u32,
}

impl InterventionTask {
    /// 任务年龄 (秒, 仿真时钟)
    pub fn age_seconds(&self, now: DateTime<Utc>) -> f64 {
        (now - self.created_at).num_milliseconds() as f64 / 1000.0
    }

    /// 推进到下一个状态
    ///
    /// # 返回
    /// - true: 状态已前移
    /// - false: 已处于终态, 不变
    pub fn advance(&mut self) -> bool {
        match self.status.next() {
            Some(next) => {
                self.status = next;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_advance_is_forward_only() {
        let mut task = InterventionTask {
            id: 1000,
            line: "Assembly Line A".to_string(),
            assignee: "Maria Santos".to_string(),
            description: "Provide additional capacity support".to_string(),
            priority: TaskPriority::High,
            status: TaskStatus::Assigned,
            created_at: Utc.with_ymd_and_hms(2026, 1, 20, 8, 0, 0).unwrap(),
            estimated_minutes: 15,
        };

        assert!(task.advance());
        assert_eq!(task.status, TaskStatus::Progress);
        assert!(task.advance());
        assert_eq!(task.status, TaskStatus::Completed);
        // 终态不再前移
        assert!(!task.advance());
        assert_eq!(task.status, TaskStatus::Completed);
    }
}
