// ==========================================
// 产线瓶颈智能体演示系统 - 任务生命周期引擎
// ==========================================
// 职责: 按任务年龄 + 概率门推进任务状态机
// 状态机: Assigned -> Progress -> Completed, 只进不退
// 规则:
// - Assigned 且年龄 > 5 秒, 抽样 > 0.7 => Progress
// - Progress 且年龄 > 15 秒, 抽样 > 0.6 => Completed
// 年龄按仿真时钟计算, 无终态清理 (仅靠列表淘汰)
// ==========================================

use crate::config::SimulationConfig;
use crate::domain::{SimulationState, TaskStatus};
use crate::engine::sampler::RandomSource;

// ==========================================
// TaskLifecycleEngine - 任务生命周期引擎
// ==========================================
pub struct TaskLifecycleEngine {
    // 无状态引擎
}

impl TaskLifecycleEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 每节拍推进一轮任务状态
    ///
    /// 返回本节拍前移的任务数。
    pub fn advance_all(
        &self,
        state: &mut SimulationState,
        config: &SimulationConfig,
        rng: &mut dyn RandomSource,
    ) -> usize {
        let now = state.now();
        let mut advanced = 0;

        for task in state.tasks.iter_mut() {
            let age_s = task.age_seconds(now);
            let eligible = match task.status {
                TaskStatus::Assigned => {
                    age_s > config.task_progress_age_s && rng.passes_gate(config.task_progress_gate)
                }
                TaskStatus::Progress => {
                    age_s > config.task_complete_age_s && rng.passes_gate(config.task_complete_gate)
                }
                TaskStatus::Completed => false,
            };

            if eligible && task.advance() {
                tracing::debug!(task_id = task.id, status = %task.status, "任务状态前移");
                advanced += 1;
            }
        }

        advanced
    }
}

impl Default for TaskLifecycleEngine {
    fn default() -> Self {
        Self::new()
    }
}
