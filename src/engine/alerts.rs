// ==========================================
// 产线瓶颈智能体演示系统 - 预测预警引擎
// ==========================================
// 职责: 以固定低概率生成合成预测预警
// 说明: 预警与产线实时状态无因果关联,
//       类型均匀随机, 文案取自固定剧本
// ==========================================

use crate::config::SimulationConfig;
use crate::domain::{alert_playbook, AlertKind, PredictiveAlert, SimulationState};
use crate::engine::sampler::RandomSource;

// ==========================================
// PredictiveAlertEngine - 预测预警引擎
// ==========================================
pub struct PredictiveAlertEngine {
    // 无状态引擎
}

impl PredictiveAlertEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 每节拍至多生成一条预警
    ///
    /// # 返回
    /// - true: 本节拍生成了预警
    /// - false: 概率门未放行
    pub fn maybe_generate(
        &self,
        state: &mut SimulationState,
        config: &SimulationConfig,
        rng: &mut dyn RandomSource,
    ) -> bool {
        if !rng.passes_gate(config.alert_gate) {
            return false;
        }

        let kind = AlertKind::ALL[rng.pick_index(AlertKind::ALL.len())];
        let confidence = rng.int_in_span(config.confidence_min, config.confidence_span);
        let (description, action) = alert_playbook(kind);

        let alert = PredictiveAlert {
            kind,
            description: description.to_string(),
            action: action.to_string(),
            confidence,
            timestamp: state.now(),
        };

        tracing::debug!(kind = kind.label(), confidence, "生成预测预警");
        state.push_alert(alert, config.alert_list_cap);
        true
    }
}

impl Default for PredictiveAlertEngine {
    fn default() -> Self {
        Self::new()
    }
}
