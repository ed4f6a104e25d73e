// Small dev utility: run a deterministic scripted walkthrough without the
// periodic timer.
//
// Usage:
//   cargo run --bin demo_scenario -- [seed]
//
// Drives the orchestrator tick-by-tick with a fixed seed, fires one manual
// bottleneck trigger, then prints the rendered dashboard and decision log.

use production_line_agent::api::dto::RuntimeInfo;
use production_line_agent::api::{ControlApi, DashboardApi};
use production_line_agent::engine::StdRandomSource;
use production_line_agent::{DashboardRenderer, SimClock, SimulationConfig, SimulationState};

fn main() -> anyhow::Result<()> {
    production_line_agent::logging::init();

    let seed: u64 = match std::env::args().nth(1) {
        Some(v) => v.parse()?,
        None => 42,
    };

    let config = SimulationConfig::default();
    let control_api = ControlApi::new();
    let dashboard_api = DashboardApi::new();
    let renderer = DashboardRenderer::new();

    let mut state = SimulationState::new(SimClock::now());
    let mut rng = StdRandomSource::seeded(seed);
    let interval_ms = config.tick_interval_ms(1);

    // 先走 10 个节拍积累随机扰动
    for _ in 0..10 {
        control_api.tick(&mut state, &config, &mut rng, interval_ms);
    }

    // 手动触发一次瓶颈
    let (line, detected) = control_api.trigger_bottleneck(&mut state, &config, &mut rng);
    tracing::info!(line = line.as_str(), detected, "手动触发完成");

    // 再走 10 个节拍观察任务生命周期推进
    for _ in 0..10 {
        control_api.tick(&mut state, &config, &mut rng, interval_ms);
    }

    let runtime = RuntimeInfo {
        running: false,
        speed: 1,
        info_panel_visible: true,
    };
    let snapshot = dashboard_api.snapshot(&state, &config, runtime);
    println!("{}", renderer.render(&snapshot));
    Ok(())
}
