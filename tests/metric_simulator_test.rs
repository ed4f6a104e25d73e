// ==========================================
// MetricSimulator 引擎测试
// ==========================================
// 测试目标: 验证随机扰动的钳制不变量
// 不变量: 任意节拍数后 吞吐量>=50, 节拍>=5,
//         队列>=0, 效率在 [60,100]
// ==========================================

use production_line_agent::config::SimulationConfig;
use production_line_agent::domain::default_lines;
use production_line_agent::engine::{MetricSimulator, SequenceSource, StdRandomSource};

#[test]
fn test_clamps_hold_after_many_ticks() {
    let simulator = MetricSimulator::new();
    let config = SimulationConfig::default();
    let mut lines = default_lines();
    let mut rng = StdRandomSource::seeded(20260120);

    for _ in 0..500 {
        simulator.perturb_all(&mut lines, &config, &mut rng);
        for line in &lines {
            assert!(line.throughput >= 50.0, "{} 吞吐量越界", line.name);
            assert!(line.cycle_time >= 5.0, "{} 节拍越界", line.name);
            assert!(line.queue_length >= 0.0, "{} 队列越界", line.name);
            assert!(
                (60.0..=100.0).contains(&line.efficiency),
                "{} 效率越界: {}",
                line.name,
                line.efficiency
            );
        }
    }
}

#[test]
fn test_floors_bind_under_constant_minimum_draws() {
    let simulator = MetricSimulator::new();
    let config = SimulationConfig::default();
    let mut lines = default_lines();
    // 恒定抽 0.0 => 每节拍全部指标向下扰动半幅
    let mut rng = SequenceSource::constant(0.0);

    for _ in 0..100 {
        simulator.perturb_all(&mut lines, &config, &mut rng);
    }
    for line in &lines {
        assert_eq!(line.throughput, 50.0);
        assert_eq!(line.cycle_time, 5.0);
        assert_eq!(line.queue_length, 0.0);
        assert_eq!(line.efficiency, 60.0);
    }
}

#[test]
fn test_lines_perturb_independently() {
    let simulator = MetricSimulator::new();
    let config = SimulationConfig::default();
    let mut lines = default_lines();
    let mut rng = StdRandomSource::seeded(7);

    simulator.perturb_all(&mut lines, &config, &mut rng);

    // 同一节拍内各产线扰动互不相同 (抽样序列独立消费)
    let baseline = default_lines();
    let deltas: Vec<f64> = lines
        .iter()
        .zip(baseline.iter())
        .map(|(now, init)| now.throughput - init.throughput)
        .collect();
    let all_equal = deltas.windows(2).all(|w| (w[0] - w[1]).abs() < 1e-12);
    assert!(!all_equal, "各产线扰动不应完全一致: {:?}", deltas);
}
