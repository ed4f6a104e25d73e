// ==========================================
// 产线瓶颈智能体演示系统 - 领域实体：产线
// ==========================================
// 职责: 产线指标实体与初始产线数据
// 说明: name 为产线标识键; 基准节拍按名称查表,
//       未知产线回退到默认基准 (不报错)
// ==========================================

use serde::{Deserialize, Serialize};

/// 未知产线的默认基准节拍 (分钟)
pub const DEFAULT_BASELINE_CYCLE_TIME: f64 = 15.0;

/// 产线 (ProductionLine)
///
/// 一条模拟产线的四项实时指标。
/// 每个仿真节拍由指标模拟器原地扰动并做下限/上限钳制。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionLine {
    /// 产线名称 (标识键)
    pub name: String,

    /// 吞吐量 (件/小时)
    pub throughput: f64,

    /// 节拍 (分钟)
    pub cycle_time: f64,

    /// 在制队列长度 (件)
    pub queue_length: f64,

    /// 效率 (%)
    pub efficiency: f64,
}

impl ProductionLine {
    /// 创建产线
    pub fn new(
        name: impl Into<String>,
        throughput: f64,
        cycle_time: f64,
        queue_length: f64,
        efficiency: f64,
    ) -> Self {
        Self {
            name: name.into(),
            throughput,
            cycle_time,
            queue_length,
            efficiency,
        }
    }

    /// 该产线的基准节拍 (分钟)
    pub fn baseline_cycle_time(&self) -> f64 {
        baseline_cycle_time(&self.name)
    }

    /// 节拍相对基准的涨幅 (%)
    pub fn cycle_time_increase_pct(&self) -> f64 {
        let baseline = self.baseline_cycle_time();
        (self.cycle_time - baseline) / baseline * 100.0
    }
}

/// 按产线名称查询基准节拍
///
/// 未知名称回退到 [`DEFAULT_BASELINE_CYCLE_TIME`]。
pub fn baseline_cycle_time(line_name: &str) -> f64 {
    match line_name {
        "Assembly Line A" => 12.0,
        "Packaging Line B" => 8.0,
        "Quality Control C" => 15.0,
        "Welding Station D" => 20.0,
        "Paint Shop E" => 25.0,
        _ => DEFAULT_BASELINE_CYCLE_TIME,
    }
}

/// 初始产线数据 (5 条演示产线)
pub fn default_lines() -> Vec<ProductionLine> {
    vec![
        ProductionLine::new("Assembly Line A", 85.0, 12.0, 15.0, 88.0),
        ProductionLine::new("Packaging Line B", 120.0, 8.0, 22.0, 92.0),
        ProductionLine::new("Quality Control C", 95.0, 15.0, 18.0, 85.0),
        ProductionLine::new("Welding Station D", 75.0, 20.0, 12.0, 90.0),
        ProductionLine::new("Paint Shop E", 65.0, 25.0, 8.0, 87.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_fallback() {
        assert_eq!(baseline_cycle_time("Paint Shop E"), 25.0);
        assert_eq!(baseline_cycle_time("Unknown Line X"), DEFAULT_BASELINE_CYCLE_TIME);
    }

    #[test]
    fn test_cycle_time_increase_pct() {
        let mut line = ProductionLine::new("Paint Shop E", 65.0, 25.0, 8.0, 87.0);
        assert_eq!(line.cycle_time_increase_pct(), 0.0);
        line.cycle_time = 37.5;
        assert!((line.cycle_time_increase_pct() - 50.0).abs() < 1e-9);
    }
}
