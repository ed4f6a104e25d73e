// ==========================================
// 产线瓶颈智能体演示系统 - 仿真时钟
// ==========================================
// 职责: 显式仿真时钟, 每个节拍按当前节拍间隔前进
// 说明: 去重窗口/任务年龄均以仿真时间计算,
//       测试可直接推进时钟而无需真实等待
// ==========================================

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// 仿真时钟 (SimClock)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// 仿真起始时刻
    start: DateTime<Utc>,

    /// 已推进的仿真毫秒数
    elapsed_ms: u64,
}

impl SimClock {
    /// 以指定起始时刻创建时钟 (测试注入固定时刻)
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            elapsed_ms: 0,
        }
    }

    /// 以当前真实时刻创建时钟
    pub fn now() -> Self {
        Self::starting_at(Utc::now())
    }

    /// 当前仿真时刻
    pub fn current(&self) -> DateTime<Utc> {
        self.start + Duration::milliseconds(self.elapsed_ms as i64)
    }

    /// 推进仿真时间
    pub fn advance_ms(&mut self, ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(ms);
    }

    /// 已推进的仿真毫秒数
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_advance() {
        let start = Utc.with_ymd_and_hms(2026, 1, 20, 8, 0, 0).unwrap();
        let mut clock = SimClock::starting_at(start);
        assert_eq!(clock.current(), start);

        clock.advance_ms(3000);
        clock.advance_ms(1500);
        assert_eq!(clock.elapsed_ms(), 4500);
        assert_eq!(clock.current(), start + Duration::milliseconds(4500));
    }
}
