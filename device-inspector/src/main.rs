//! Demo binary: prints the device snapshot, then streams live sensor
//! readings into the view. With a handset base URL argument the readings
//! come from its REST API; without one, a mock handset runs for ten
//! seconds.

use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use device_inspector::adapters::Platform;
use device_inspector::{snapshot, Inspector, InspectorView};
use inspector_common::types::SensorKind;
use sensor_hub::adapters::{Handset, HandsetMock};
use sensor_hub::ports::HubPort;
use sensor_hub::SensorService;

const REDRAW_PERIOD_SECS: u64 = 1;
const OFFLINE_RUN_MILLIS: u64 = 10_000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let platform = Platform::new();
    let device = snapshot::collect(&platform);

    let mut view = InspectorView::new();
    view.set_info(device.render());

    let sensor_cluster = SensorKind::ALL.to_vec();
    match std::env::args().nth(1) {
        Some(base_url) => {
            let service = Arc::new(SensorService::new(Handset::new(
                &base_url,
                sensor_cluster,
            )?));
            run(service, view, None).await
        }
        None => {
            log::info!("No handset URL given, running against the mock handset");
            let service = Arc::new(SensorService::new(HandsetMock::new(sensor_cluster, true)?));
            run(service, view, Some(OFFLINE_RUN_MILLIS)).await
        }
    }
}

async fn run<C>(
    service: Arc<SensorService<C>>,
    view: InspectorView,
    run_for_millis: Option<u64>,
) -> Result<(), Box<dyn Error>>
where
    C: HubPort + 'static,
{
    let view = Arc::new(Mutex::new(view));
    let mut inspector = Inspector::new(service, Arc::clone(&view));
    inspector.enter_foreground()?;

    let started = Instant::now();
    let time_budget = run_for_millis.map(Duration::from_millis);
    let mut redraw = tokio::time::interval(Duration::from_secs(REDRAW_PERIOD_SECS));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                break;
            }

            _ = redraw.tick() => {
                println!("{}", view.lock().await.render());
                if time_budget.is_some_and(|budget| started.elapsed() >= budget) {
                    break;
                }
            }
        }
    }

    inspector.exit_foreground();
    Ok(())
}
