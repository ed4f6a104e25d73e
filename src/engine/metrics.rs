// ==========================================
// 产线瓶颈智能体演示系统 - 指标模拟引擎
// ==========================================
// 职责: 每个节拍对产线指标施加独立均匀扰动并钳制
// 输入: 产线列表 + 随机源
// 输出: 原地更新的产线指标
// 说明: 产线间无相关性, 不保留扰动历史
// ==========================================

use crate::config::SimulationConfig;
use crate::domain::ProductionLine;
use crate::engine::sampler::RandomSource;

// ==========================================
// MetricSimulator - 指标模拟引擎
// ==========================================
pub struct MetricSimulator {
    // 无状态引擎, 配置由调用方传入
}

impl MetricSimulator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 对全部产线施加一轮随机扰动
    pub fn perturb_all(
        &self,
        lines: &mut [ProductionLine],
        config: &SimulationConfig,
        rng: &mut dyn RandomSource,
    ) {
        for line in lines.iter_mut() {
            self.perturb_line(line, config, rng);
        }
    }

    /// 对单条产线施加随机扰动并钳制
    ///
    /// 抽样顺序固定: 吞吐量 -> 节拍 -> 队列 -> 效率。
    pub fn perturb_line(
        &self,
        line: &mut ProductionLine,
        config: &SimulationConfig,
        rng: &mut dyn RandomSource,
    ) {
        line.throughput =
            (line.throughput + rng.jitter(config.throughput_jitter)).max(config.throughput_floor);
        line.cycle_time =
            (line.cycle_time + rng.jitter(config.cycle_time_jitter)).max(config.cycle_time_floor);
        line.queue_length =
            (line.queue_length + rng.jitter(config.queue_jitter)).max(config.queue_floor);
        line.efficiency = (line.efficiency + rng.jitter(config.efficiency_jitter))
            .max(config.efficiency_floor)
            .min(config.efficiency_ceiling);
    }
}

impl Default for MetricSimulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sampler::SequenceSource;

    #[test]
    fn test_perturb_uses_jitter_and_floors() {
        let simulator = MetricSimulator::new();
        let config = SimulationConfig::default();
        let mut line = ProductionLine::new("Paint Shop E", 65.0, 25.0, 8.0, 87.0);

        // 全部抽 0.0 => 每项指标减去半幅扰动
        let mut rng = SequenceSource::constant(0.0);
        simulator.perturb_line(&mut line, &config, &mut rng);
        assert_eq!(line.throughput, 60.0); // 65 - 5
        assert_eq!(line.cycle_time, 23.5); // 25 - 1.5
        assert_eq!(line.queue_length, 5.5); // 8 - 2.5
        assert_eq!(line.efficiency, 85.0); // 87 - 2
    }

    #[test]
    fn test_efficiency_ceiling() {
        let simulator = MetricSimulator::new();
        let config = SimulationConfig::default();
        let mut line = ProductionLine::new("Packaging Line B", 120.0, 8.0, 22.0, 99.5);

        // 全部抽最大值 => 效率被钳制到 100
        let mut rng = SequenceSource::constant(0.9999999);
        simulator.perturb_line(&mut line, &config, &mut rng);
        assert_eq!(line.efficiency, 100.0);
    }
}
