// ==========================================
// 产线瓶颈智能体演示系统 - 领域实体：智能体统计
// ==========================================
// 职责: 驾驶舱统计指标
// 约束: 计数器单调不减; 处置时长窗口为定长滑动缓冲 (最近 20 条)
// ==========================================

use serde::{Deserialize, Serialize};

/// 处置时长滑动窗口容量
pub const RESOLUTION_WINDOW_CAPACITY: usize = 20;

/// 智能体统计 (AgentStats)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentStats {
    /// 检测到的瓶颈总数
    pub bottlenecks_detected: u64,

    /// 派发的任务总数
    pub tasks_assigned: u64,

    /// 避免的人工干预次数
    pub interventions_avoided: u64,

    /// 最近的处置时长样本 (分钟, 最多 20 条, 最旧在前)
    pub resolution_minutes: Vec<u32>,

    /// 效率提升展示值 (%), 每个节拍/检测后重算
    pub efficiency_improvement_pct: u32,
}

impl AgentStats {
    /// 记录一次瓶颈检测 (计数器 + 处置时长样本)
    pub fn record_detection(&mut self, resolution_minutes: u32) {
        self.bottlenecks_detected += 1;
        self.interventions_avoided += 1;
        self.push_resolution_sample(resolution_minutes);
    }

    /// 记录一次任务派发
    pub fn record_task_assigned(&mut self) {
        self.tasks_assigned += 1;
    }

    /// 追加处置时长样本, 超出窗口容量时从最旧端滑出
    pub fn push_resolution_sample(&mut self, minutes: u32) {
        self.resolution_minutes.push(minutes);
        if self.resolution_minutes.len() > RESOLUTION_WINDOW_CAPACITY {
            self.resolution_minutes.remove(0);
        }
    }

    /// 平均处置时长 (分钟)
    ///
    /// # 返回
    /// - Some(avg): 窗口内样本的算术平均
    /// - None: 尚无样本
    pub fn average_resolution_minutes(&self) -> Option<f64> {
        if self.resolution_minutes.is_empty() {
            return None;
        }
        let sum: u64 = self.resolution_minutes.iter().map(|&m| u64::from(m)).sum();
        Some(sum as f64 / self.resolution_minutes.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_window_slides() {
        let mut stats = AgentStats::default();
        for minutes in 1..=25 {
            stats.push_resolution_sample(minutes);
        }
        assert_eq!(stats.resolution_minutes.len(), RESOLUTION_WINDOW_CAPACITY);
        // 最旧的 1..=5 已滑出
        assert_eq!(stats.resolution_minutes[0], 6);
        assert_eq!(*stats.resolution_minutes.last().unwrap(), 25);
    }

    #[test]
    fn test_average_resolution() {
        let mut stats = AgentStats::default();
        assert_eq!(stats.average_resolution_minutes(), None);
        stats.push_resolution_sample(10);
        stats.push_resolution_sample(20);
        assert_eq!(stats.average_resolution_minutes(), Some(15.0));
    }
}
