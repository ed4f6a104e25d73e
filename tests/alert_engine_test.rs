// ==========================================
// PredictiveAlertEngine 引擎测试
// ==========================================
// 测试目标: 验证预警概率门、类型选择、剧本文案与容量
// 规则: 抽样 > 0.85 时生成; 类型均匀; 置信度 75..=94
// ==========================================

use chrono::{TimeZone, Utc};
use production_line_agent::config::SimulationConfig;
use production_line_agent::domain::{AlertKind, SimClock, SimulationState};
use production_line_agent::engine::{PredictiveAlertEngine, SequenceSource, StdRandomSource};

// ==========================================
// 测试辅助函数
// ==========================================

fn create_test_state() -> SimulationState {
    let start = Utc.with_ymd_and_hms(2026, 1, 20, 8, 0, 0).unwrap();
    SimulationState::new(SimClock::starting_at(start))
}

#[test]
fn test_gate_blocks_alert() {
    let engine = PredictiveAlertEngine::new();
    let config = SimulationConfig::default();
    let mut state = create_test_state();

    // 0.85 不严格大于门限 => 不生成
    let mut rng = SequenceSource::constant(0.85);
    assert!(!engine.maybe_generate(&mut state, &config, &mut rng));
    assert!(state.alerts.is_empty());
}

#[test]
fn test_alert_content_from_playbook() {
    let engine = PredictiveAlertEngine::new();
    let config = SimulationConfig::default();
    let mut state = create_test_state();

    // 脚本: 门 0.9 放行, 类型 floor(0.5*5)=2 (MaterialInventoryLow),
    //       置信度 floor(0.95*20)+75 = 94
    let mut rng = SequenceSource::new([0.9, 0.5, 0.95], 0.0);
    assert!(engine.maybe_generate(&mut state, &config, &mut rng));

    let alert = &state.alerts[0];
    assert_eq!(alert.kind, AlertKind::MaterialInventoryLow);
    assert_eq!(
        alert.description,
        "Raw material levels for Packaging Line B below threshold"
    );
    assert_eq!(alert.action, "Initiate expedited procurement process");
    assert_eq!(alert.confidence, 94);
    assert_eq!(alert.timestamp, state.now());
}

#[test]
fn test_confidence_stays_in_range() {
    let engine = PredictiveAlertEngine::new();
    let config = SimulationConfig::default();
    let mut state = create_test_state();
    let mut rng = StdRandomSource::seeded(123);

    for _ in 0..500 {
        engine.maybe_generate(&mut state, &config, &mut rng);
    }
    assert!(!state.alerts.is_empty());
    for alert in &state.alerts {
        assert!(
            (75..=94).contains(&alert.confidence),
            "置信度越界: {}",
            alert.confidence
        );
    }
}

#[test]
fn test_alert_cap_and_ordering() {
    let engine = PredictiveAlertEngine::new();
    let config = SimulationConfig::default();
    let mut state = create_test_state();
    // 恒定 0.9: 每次都生成, 类型 floor(0.9*5)=4 (MaintenanceDueSoon)
    let mut rng = SequenceSource::constant(0.9);

    for _ in 0..10 {
        state.clock.advance_ms(3_000);
        assert!(engine.maybe_generate(&mut state, &config, &mut rng));
    }

    assert_eq!(state.alerts.len(), 6);
    // 最新在前
    for pair in state.alerts.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
    }
    assert_eq!(state.alerts[0].kind, AlertKind::MaintenanceDueSoon);
}
