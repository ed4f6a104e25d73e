// ==========================================
// 产线瓶颈智能体演示系统 - 状态分类引擎
// ==========================================
// 职责: 产线当前指标 + 基准节拍 -> 三级状态
// 说明: 纯函数, 同时用于前端着色与瓶颈检测门控
// ==========================================
// 规则:
// - Critical: 节拍涨幅 > 30% 或 效率 < 75 或 队列 > 40
// - Warning:  节拍涨幅 > 15% 或 效率 < 85 或 队列 > 30
// - 其余为 Normal
// ==========================================

use crate::config::SimulationConfig;
use crate::domain::{LineStatus, ProductionLine};

// ==========================================
// StatusClassifier - 状态分类引擎
// ==========================================
pub struct StatusClassifier {
    // 无状态引擎
}

impl StatusClassifier {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 对单条产线分类
    pub fn classify(&self, line: &ProductionLine, config: &SimulationConfig) -> LineStatus {
        let increase_pct = line.cycle_time_increase_pct();

        if increase_pct > config.critical_increase_pct
            || line.efficiency < config.critical_efficiency
            || line.queue_length > config.critical_queue
        {
            return LineStatus::Critical;
        }

        if increase_pct > config.warning_increase_pct
            || line.efficiency < config.warning_efficiency
            || line.queue_length > config.warning_queue
        {
            return LineStatus::Warning;
        }

        LineStatus::Normal
    }
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &ProductionLine) -> LineStatus {
        StatusClassifier::new().classify(line, &SimulationConfig::default())
    }

    #[test]
    fn test_normal_at_baseline() {
        let line = ProductionLine::new("Assembly Line A", 85.0, 12.0, 15.0, 88.0);
        assert_eq!(classify(&line), LineStatus::Normal);
    }

    #[test]
    fn test_low_efficiency_is_critical() {
        // 效率 70 < 75, 即使节拍在基准上也判 Critical
        let line = ProductionLine::new("Quality Control C", 95.0, 15.0, 10.0, 70.0);
        assert_eq!(classify(&line), LineStatus::Critical);
    }

    #[test]
    fn test_cycle_time_increase_thresholds() {
        // 基准 20, 节拍 23.5 => 涨幅 17.5% => Warning
        let line = ProductionLine::new("Welding Station D", 75.0, 23.5, 10.0, 90.0);
        assert_eq!(classify(&line), LineStatus::Warning);

        // 节拍 27 => 涨幅 35% => Critical
        let line = ProductionLine::new("Welding Station D", 75.0, 27.0, 10.0, 90.0);
        assert_eq!(classify(&line), LineStatus::Critical);
    }

    #[test]
    fn test_queue_thresholds() {
        let line = ProductionLine::new("Packaging Line B", 120.0, 8.0, 31.0, 92.0);
        assert_eq!(classify(&line), LineStatus::Warning);

        let line = ProductionLine::new("Packaging Line B", 120.0, 8.0, 41.0, 92.0);
        assert_eq!(classify(&line), LineStatus::Critical);
    }
}
