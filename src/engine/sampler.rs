// ==========================================
// 产线瓶颈智能体演示系统 - 可注入随机源
// ==========================================
// 职责: 定义均匀随机抽样 trait, 所有概率分支经由此接口
// 说明: 生产实现封装带种子的 StdRng;
//       测试用 SequenceSource 可逐次指定抽样值,
//       从而强制触发或完全抑制任一概率分支
// ==========================================

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

// ==========================================
// RandomSource Trait
// ==========================================

/// 随机源 (RandomSource)
///
/// 基础操作是 [0,1) 均匀抽样; 其余操作均由其派生,
/// 保证同一抽样序列在任何实现下产生相同行为。
pub trait RandomSource: Send {
    /// 均匀抽样 [0,1)
    fn next_f64(&mut self) -> f64;

    /// 概率门: 抽样值严格大于门限时放行
    fn passes_gate(&mut self, gate: f64) -> bool {
        self.next_f64() > gate
    }

    /// 均匀选取下标 (0..len)
    ///
    /// len 为 0 时返回 0, 由调用方保证列表非空。
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }

    /// 均匀整数: min + U{0..span-1}
    fn int_in_span(&mut self, min: u32, span: u32) -> u32 {
        min + (self.next_f64() * f64::from(span)) as u32
    }

    /// 有符号扰动: (U - 0.5) * scale
    fn jitter(&mut self, scale: f64) -> f64 {
        (self.next_f64() - 0.5) * scale
    }
}

// ==========================================
// StdRandomSource - 生产实现
// ==========================================

/// 基于 StdRng 的随机源
///
/// 支持显式种子, 同一种子产生可复现的仿真轨迹。
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// 以系统熵创建
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// 以显式种子创建 (可复现)
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

// ==========================================
// SequenceSource - 测试用脚本随机源
// ==========================================

/// 脚本随机源
///
/// 逐次返回预先给定的抽样值, 耗尽后返回回退值。
/// 用于确定性测试: 给 1.0 可强制通过任何概率门,
/// 给 0.0 可抑制所有概率分支。
pub struct SequenceSource {
    values: VecDeque<f64>,
    fallback: f64,
}

impl SequenceSource {
    /// 以脚本序列创建, 耗尽后返回 fallback
    pub fn new(values: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback,
        }
    }

    /// 恒定返回同一抽样值
    pub fn constant(value: f64) -> Self {
        Self::new([], value)
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        self.values.pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = StdRandomSource::seeded(42);
        let mut b = StdRandomSource::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn test_derived_helpers() {
        // 0.999.. 选中最后一个下标, 0.0 选中第一个
        let mut src = SequenceSource::new([0.9999, 0.0], 0.0);
        assert_eq!(src.pick_index(5), 4);
        assert_eq!(src.pick_index(5), 0);

        // floor(0.95 * 20) + 10 = 29
        let mut src = SequenceSource::constant(0.95);
        assert_eq!(src.int_in_span(10, 20), 29);

        // (0.75 - 0.5) * 10 = 2.5
        let mut src = SequenceSource::constant(0.75);
        assert!((src.jitter(10.0) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_gate_is_strict() {
        let mut src = SequenceSource::constant(0.7);
        assert!(!src.passes_gate(0.7));
        let mut src = SequenceSource::constant(0.71);
        assert!(src.passes_gate(0.7));
    }
}
