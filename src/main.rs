// ==========================================
// 产线瓶颈智能体演示系统 - 主入口
// ==========================================
// 用途: 无界面演示; 启动节拍循环并周期性输出驾驶舱文本
// 用法:
//   cargo run -- [speed] [ticks] [seed]
//   - speed: 速度倍率 (默认 1)
//   - ticks: 输出轮数 (默认 20)
//   - seed:  随机种子 (缺省用系统熵)
// ==========================================

use std::sync::Arc;
use std::time::Duration;

use production_line_agent::app::commands;
use production_line_agent::engine::{OptionalEventPublisher, TracingEventPublisher};
use production_line_agent::{AppState, DashboardRenderer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    production_line_agent::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", production_line_agent::APP_NAME);
    tracing::info!("系统版本: {}", production_line_agent::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let speed: u32 = match args.next() {
        Some(v) => v.parse()?,
        None => 1,
    };
    let ticks: u32 = match args.next() {
        Some(v) => v.parse()?,
        None => 20,
    };
    let seed: Option<u64> = match args.next() {
        Some(v) => Some(v.parse()?),
        None => None,
    };

    // 创建AppState (事件以日志形式输出)
    let events = OptionalEventPublisher::with_publisher(Arc::new(TracingEventPublisher));
    let state = match seed {
        Some(seed) => AppState::with_seed(seed, events),
        None => AppState::with_defaults(events),
    };

    commands::set_simulation_speed(&state, speed)
        .await
        .map_err(anyhow::Error::msg)?;
    commands::start_simulation(&state)
        .await
        .map_err(anyhow::Error::msg)?;

    let renderer = DashboardRenderer::new();
    let interval_ms = state.config.tick_interval_ms(speed);

    for _ in 0..ticks {
        tokio::time::sleep(Duration::from_millis(interval_ms)).await;
        let snapshot = state.snapshot().map_err(|e| anyhow::anyhow!("{}", e))?;
        println!("{}", renderer.render(&snapshot));
    }

    commands::pause_simulation(&state)
        .await
        .map_err(anyhow::Error::msg)?;
    tracing::info!("演示结束");
    Ok(())
}
