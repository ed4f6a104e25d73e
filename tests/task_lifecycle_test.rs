// ==========================================
// TaskLifecycleEngine 引擎测试
// ==========================================
// 测试目标: 验证任务状态机按年龄 + 概率门前移, 只进不退
// 规则: Assigned 且年龄 > 5s 且抽样 > 0.7 => Progress
//       Progress 且年龄 > 15s 且抽样 > 0.6 => Completed
// ==========================================

use chrono::{TimeZone, Utc};
use production_line_agent::config::SimulationConfig;
use production_line_agent::domain::{
    InterventionTask, SimClock, SimulationState, TaskPriority, TaskStatus,
};
use production_line_agent::engine::{SequenceSource, TaskLifecycleEngine};

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建固定起始时刻的仿真状态, 内含一条新任务
fn create_state_with_task() -> SimulationState {
    let start = Utc.with_ymd_and_hms(2026, 1, 20, 8, 0, 0).unwrap();
    let mut state = SimulationState::new(SimClock::starting_at(start));
    let task = InterventionTask {
        id: state.allocate_task_id(),
        line: "Welding Station D".to_string(),
        assignee: "John Chen".to_string(),
        description: "Perform equipment diagnostics and maintenance".to_string(),
        priority: TaskPriority::Medium,
        status: TaskStatus::Assigned,
        created_at: state.now(),
        estimated_minutes: 12,
    };
    state.push_task(task, 8);
    state
}

#[test]
fn test_young_task_does_not_advance() {
    let engine = TaskLifecycleEngine::new();
    let config = SimulationConfig::default();
    let mut state = create_state_with_task();
    let mut rng = SequenceSource::constant(0.99);

    // 年龄 4 秒 <= 5 秒阈值: 不抽样也不前移
    state.clock.advance_ms(4_000);
    assert_eq!(engine.advance_all(&mut state, &config, &mut rng), 0);
    assert_eq!(state.tasks[0].status, TaskStatus::Assigned);
}

#[test]
fn test_gate_blocks_advance() {
    let engine = TaskLifecycleEngine::new();
    let config = SimulationConfig::default();
    let mut state = create_state_with_task();

    state.clock.advance_ms(6_000);
    // 抽样 0.7 不严格大于门限 0.7 => 不前移
    let mut rng = SequenceSource::constant(0.7);
    assert_eq!(engine.advance_all(&mut state, &config, &mut rng), 0);
    assert_eq!(state.tasks[0].status, TaskStatus::Assigned);
}

#[test]
fn test_full_forward_progression() {
    let engine = TaskLifecycleEngine::new();
    let config = SimulationConfig::default();
    let mut state = create_state_with_task();
    let mut rng = SequenceSource::constant(0.99);

    // 年龄 6 秒: Assigned -> Progress
    state.clock.advance_ms(6_000);
    assert_eq!(engine.advance_all(&mut state, &config, &mut rng), 1);
    assert_eq!(state.tasks[0].status, TaskStatus::Progress);

    // 年龄 10 秒: 尚未达到 15 秒阈值, Progress 保持
    state.clock.advance_ms(4_000);
    assert_eq!(engine.advance_all(&mut state, &config, &mut rng), 0);
    assert_eq!(state.tasks[0].status, TaskStatus::Progress);

    // 年龄 16 秒: Progress -> Completed
    state.clock.advance_ms(6_000);
    assert_eq!(engine.advance_all(&mut state, &config, &mut rng), 1);
    assert_eq!(state.tasks[0].status, TaskStatus::Completed);

    // 终态不再变化
    state.clock.advance_ms(60_000);
    assert_eq!(engine.advance_all(&mut state, &config, &mut rng), 0);
    assert_eq!(state.tasks[0].status, TaskStatus::Completed);
}

#[test]
fn test_states_never_regress_over_random_run() {
    let engine = TaskLifecycleEngine::new();
    let config = SimulationConfig::default();
    let mut state = create_state_with_task();
    let mut rng = production_line_agent::engine::StdRandomSource::seeded(99);

    let mut previous = state.tasks[0].status;
    for _ in 0..100 {
        state.clock.advance_ms(1_000);
        engine.advance_all(&mut state, &config, &mut rng);
        let current = state.tasks[0].status;
        assert!(current >= previous, "状态回退: {:?} -> {:?}", previous, current);
        previous = current;
    }
}
