use std::sync::Arc;
use std::time::Duration;

use log::info;
use tokio::sync::Mutex;
use uuid::Uuid;

use inspector_common::traits::SensorSource;
use inspector_common::types::Reading;
use publisher::Listener;
use sensor_hub::ports::HubPort;
use sensor_hub::{SensorService, NORMAL_RATE_MILLIS};

use crate::view::InspectorView;

/// Listener registrations held while the view is in the foreground.
/// Dropping the subscription unregisters every listener and stops
/// acquisition, whatever the exit path.
struct ForegroundSubscription<C>
where
    C: HubPort + 'static,
{
    service: Arc<SensorService<C>>,
    listener_ids: Vec<Uuid>,
}

impl<C> Drop for ForegroundSubscription<C>
where
    C: HubPort + 'static,
{
    fn drop(&mut self) {
        for id in self.listener_ids.drain(..) {
            self.service.unregister_listener(id);
        }
        self.service.stop();
    }
}

/// The device inspector's foreground lifecycle around a sensor service.
///
/// While in the foreground, one listener per sensor kind writes formatted
/// readings into the shared view; while backgrounded, no subscription
/// exists and no callback can touch the view.
pub struct Inspector<C>
where
    C: HubPort + 'static,
{
    service: Arc<SensorService<C>>,
    view: Arc<Mutex<InspectorView>>,
    subscription: Option<ForegroundSubscription<C>>,
}

impl<C> Inspector<C>
where
    C: HubPort + 'static,
{
    pub fn new(service: Arc<SensorService<C>>, view: Arc<Mutex<InspectorView>>) -> Self {
        Self {
            service,
            view,
            subscription: None,
        }
    }

    pub fn view(&self) -> Arc<Mutex<InspectorView>> {
        Arc::clone(&self.view)
    }

    /// Foreground entry: registers one view-updating listener per sensor
    /// kind and starts acquisition at the normal tier. Re-entering while
    /// already in the foreground changes nothing.
    pub fn enter_foreground(&mut self) -> Result<(), String> {
        if self.subscription.is_some() {
            info!("Already in the foreground, ignoring");
            return Ok(());
        }

        let kinds = self.service.available_sensors();
        let mut listener_ids = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let view = Arc::clone(&self.view);
            let mut listener = Listener::new(move |_id, reading: Arc<Reading>| {
                let view = Arc::clone(&view);
                async move {
                    view.lock().await.apply(&reading);
                }
            });
            match self.service.register_listener(&mut listener, kind) {
                Ok(id) => listener_ids.push(id),
                Err(e) => {
                    for id in listener_ids.drain(..) {
                        self.service.unregister_listener(id);
                    }
                    return Err(e);
                }
            }
        }

        let service = Arc::clone(&self.service);
        tokio::spawn(async move {
            if let Err(e) = service
                .start(Duration::from_millis(NORMAL_RATE_MILLIS), None)
                .await
            {
                log::error!("Sensor acquisition failed: {}", e);
            }
        });

        self.subscription = Some(ForegroundSubscription {
            service: Arc::clone(&self.service),
            listener_ids,
        });
        Ok(())
    }

    /// Foreground exit: releases every registration and stops acquisition.
    /// Safe to call when not in the foreground.
    pub fn exit_foreground(&mut self) {
        if self.subscription.take().is_none() {
            info!("Not in the foreground, nothing to release");
        }
    }
}
