// ==========================================
// StatusClassifier 引擎测试
// ==========================================
// 测试目标: 验证三级状态分类为纯确定性函数
// 覆盖范围: 节拍涨幅/效率/队列三条阈值线与组合
// ==========================================

use production_line_agent::config::SimulationConfig;
use production_line_agent::domain::{LineStatus, ProductionLine};
use production_line_agent::engine::StatusClassifier;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用产线
fn create_test_line(name: &str, cycle_time: f64, queue: f64, efficiency: f64) -> ProductionLine {
    ProductionLine::new(name, 90.0, cycle_time, queue, efficiency)
}

fn classify(line: &ProductionLine) -> LineStatus {
    StatusClassifier::new().classify(line, &SimulationConfig::default())
}

// ==========================================
// 确定性
// ==========================================

#[test]
fn test_classification_is_deterministic() {
    let line = create_test_line("Quality Control C", 15.0, 10.0, 70.0);
    let first = classify(&line);
    for _ in 0..10 {
        assert_eq!(classify(&line), first);
    }
}

// 规格示例: 效率 70 + 队列 10 + 节拍在基准 => Critical (因效率 < 75)
#[test]
fn test_low_efficiency_alone_is_critical() {
    let line = create_test_line("Quality Control C", 15.0, 10.0, 70.0);
    assert_eq!(classify(&line), LineStatus::Critical);
}

// ==========================================
// 阈值边界
// ==========================================

#[test]
fn test_baseline_metrics_are_normal() {
    let line = create_test_line("Assembly Line A", 12.0, 15.0, 88.0);
    assert_eq!(classify(&line), LineStatus::Normal);
}

#[test]
fn test_cycle_time_increase_boundaries() {
    // 基准 20: 涨幅恰为 15% 不触发 Warning (严格大于)
    let line = create_test_line("Welding Station D", 23.0, 10.0, 90.0);
    assert_eq!(classify(&line), LineStatus::Normal);

    // 涨幅 20% => Warning
    let line = create_test_line("Welding Station D", 24.0, 10.0, 90.0);
    assert_eq!(classify(&line), LineStatus::Warning);

    // 涨幅恰为 30% 仍是 Warning (严格大于)
    let line = create_test_line("Welding Station D", 26.0, 10.0, 90.0);
    assert_eq!(classify(&line), LineStatus::Warning);

    // 涨幅 35% => Critical
    let line = create_test_line("Welding Station D", 27.0, 10.0, 90.0);
    assert_eq!(classify(&line), LineStatus::Critical);
}

#[test]
fn test_efficiency_boundaries() {
    // 效率 84.9 < 85 => Warning
    let line = create_test_line("Packaging Line B", 8.0, 10.0, 84.9);
    assert_eq!(classify(&line), LineStatus::Warning);

    // 效率恰为 75 不触发 Critical (严格小于), 但仍 < 85 => Warning
    let line = create_test_line("Packaging Line B", 8.0, 10.0, 75.0);
    assert_eq!(classify(&line), LineStatus::Warning);

    // 效率 74.9 => Critical
    let line = create_test_line("Packaging Line B", 8.0, 10.0, 74.9);
    assert_eq!(classify(&line), LineStatus::Critical);
}

#[test]
fn test_queue_boundaries() {
    // 队列恰为 30 不触发 (严格大于)
    let line = create_test_line("Assembly Line A", 12.0, 30.0, 90.0);
    assert_eq!(classify(&line), LineStatus::Normal);

    let line = create_test_line("Assembly Line A", 12.0, 30.5, 90.0);
    assert_eq!(classify(&line), LineStatus::Warning);

    let line = create_test_line("Assembly Line A", 12.0, 40.5, 90.0);
    assert_eq!(classify(&line), LineStatus::Critical);
}

// ==========================================
// 未知产线回退
// ==========================================

#[test]
fn test_unknown_line_uses_default_baseline() {
    // 未知产线基准 15: 节拍 18 => 涨幅 20% => Warning
    let line = create_test_line("Mystery Line Z", 18.0, 10.0, 90.0);
    assert_eq!(classify(&line), LineStatus::Warning);
}
