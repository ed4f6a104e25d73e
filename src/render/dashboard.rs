// ==========================================
// 产线瓶颈智能体演示系统 - 驾驶舱文本渲染器
// ==========================================
// 职责: 把驾驶舱快照无状态投影为展示文本
// 说明: 每次变更后整体重渲染, 不做 diff;
//       面板标题与占位文案走 i18n, 仿真数据本身为英文演示数据
// ==========================================

use crate::api::dto::DashboardSnapshot;
use crate::i18n::t;

/// 面板分隔线
const RULE: &str = "==================================================";

/// 智能体环说明面板内容 (Perceive -> Analyze -> Decide -> Act -> Learn)
const AGENT_LOOP_EXPLAINER: [(&str, &str); 5] = [
    (
        "PERCEIVE/MONITOR",
        "Collect real-time data, monitor production metrics, track resource utilization",
    ),
    (
        "ANALYZE",
        "Detect anomalies, identify bottlenecks, pattern recognition, root cause analysis",
    ),
    (
        "DECIDE",
        "Evaluate options, assess impact, prioritize actions, select optimal solution",
    ),
    (
        "ACT",
        "Assign tasks, reallocate resources, trigger workflows, execute actions",
    ),
    (
        "LEARN",
        "Measure outcomes, update models, improve decisions",
    ),
];

// ==========================================
// DashboardRenderer - 文本渲染器
// ==========================================

/// 驾驶舱文本渲染器
pub struct DashboardRenderer {
    // 无状态渲染器
}

impl DashboardRenderer {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 渲染完整驾驶舱
    pub fn render(&self, snapshot: &DashboardSnapshot) -> String {
        let mut out = String::new();

        self.render_header(&mut out, snapshot);
        self.render_lines(&mut out, snapshot);
        self.render_stats(&mut out, snapshot);
        self.render_decisions(&mut out, snapshot);
        self.render_tasks(&mut out, snapshot);
        self.render_alerts(&mut out, snapshot);
        if snapshot.runtime.info_panel_visible {
            self.render_info_panel(&mut out);
        }

        out
    }

    /// 页眉: 会话/时刻/运行状态/速度
    fn render_header(&self, out: &mut String, snapshot: &DashboardSnapshot) {
        let state_label = if snapshot.runtime.running {
            t("dashboard.state_running")
        } else {
            t("dashboard.state_paused")
        };
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!(
            "{}  [{}]  {}  x{}\n",
            t("dashboard.title"),
            snapshot.timestamp.format("%H:%M:%S"),
            state_label,
            snapshot.runtime.speed
        ));
        out.push_str(RULE);
        out.push('\n');
    }

    /// 产线面板
    fn render_lines(&self, out: &mut String, snapshot: &DashboardSnapshot) {
        out.push_str(&format!("\n## {}\n", t("panel.lines")));
        for line in &snapshot.lines {
            out.push_str(&format!(
                "[{:>8}] {}  ({})\n",
                line.status.to_string(),
                line.name,
                line.status_label
            ));
            out.push_str(&format!(
                "    Throughput: {:.0} units/hr | Cycle Time: {:.1} min ({:+.0}%) | Queue: {:.0} units | Efficiency: {:.0}%\n",
                line.throughput,
                line.cycle_time,
                line.cycle_time_increase_pct,
                line.queue_length,
                line.efficiency
            ));
        }
    }

    /// 统计面板
    fn render_stats(&self, out: &mut String, snapshot: &DashboardSnapshot) {
        let stats = &snapshot.stats;
        out.push_str(&format!("\n## {}\n", t("panel.stats")));
        out.push_str(&format!(
            "{}: {} | {}: {} | {}: {}\n",
            t("stats.bottlenecks_detected"),
            stats.bottlenecks_detected,
            t("stats.tasks_assigned"),
            stats.tasks_assigned,
            t("stats.interventions_avoided"),
            stats.interventions_avoided
        ));
        match stats.average_resolution_minutes {
            Some(avg) => out.push_str(&format!(
                "{}: {:.1} min | {}: {}%\n",
                t("stats.avg_resolution"),
                avg,
                t("stats.efficiency_improvement"),
                stats.efficiency_improvement_pct
            )),
            None => out.push_str(&format!("{}: - \n", t("stats.avg_resolution"))),
        }
    }

    /// 决策日志面板
    fn render_decisions(&self, out: &mut String, snapshot: &DashboardSnapshot) {
        out.push_str(&format!("\n## {}\n", t("panel.decisions")));
        if snapshot.decisions.is_empty() {
            out.push_str(&format!("{}\n", t("placeholder.decisions")));
            return;
        }
        for decision in &snapshot.decisions {
            out.push_str(&format!(
                "[{}] {}\n",
                decision.timestamp.format("%H:%M:%S"),
                decision.event
            ));
            out.push_str(&format!("    Analysis: {}\n", decision.analysis));
            out.push_str(&format!("    Action: {}\n", decision.action));
            out.push_str(&format!("    Assigned to: {}\n", decision.assignee));
            out.push_str(&format!("    {}\n", decision.impact));
        }
    }

    /// 任务面板
    fn render_tasks(&self, out: &mut String, snapshot: &DashboardSnapshot) {
        out.push_str(&format!("\n## {}\n", t("panel.tasks")));
        if snapshot.tasks.is_empty() {
            out.push_str(&format!("{}\n", t("placeholder.tasks")));
            return;
        }
        for task in &snapshot.tasks {
            out.push_str(&format!(
                "#{} [{}] {} - {} ({})\n",
                task.id,
                task.priority.label(),
                task.description,
                task.line,
                task.assignee
            ));
            out.push_str(&format!(
                "    [{}] {} | est. {} min\n",
                task.created_at.format("%H:%M:%S"),
                task.status.label(),
                task.estimated_minutes
            ));
        }
    }

    /// 预警面板
    fn render_alerts(&self, out: &mut String, snapshot: &DashboardSnapshot) {
        out.push_str(&format!("\n## {}\n", t("panel.alerts")));
        if snapshot.alerts.is_empty() {
            out.push_str(&format!("{}\n", t("placeholder.alerts")));
            return;
        }
        for alert in &snapshot.alerts {
            out.push_str(&format!(
                "! {} ({}% confidence)\n",
                alert.kind_label, alert.confidence
            ));
            out.push_str(&format!("    {}\n", alert.description));
            out.push_str(&format!("    Recommendation: {}\n", alert.action));
        }
    }

    /// 智能体环说明面板 (纯展示)
    fn render_info_panel(&self, out: &mut String) {
        out.push_str(&format!("\n## {}\n", t("panel.info")));
        for (title, items) in AGENT_LOOP_EXPLAINER {
            out.push_str(&format!("{}: {}\n", title, items));
        }
    }
}

impl Default for DashboardRenderer {
    fn default() -> Self {
        Self::new()
    }
}
