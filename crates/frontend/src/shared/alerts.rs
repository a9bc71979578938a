//! Process-wide notification channel.
//!
//! Any component may broadcast; the layout renders the stack. Alerts
//! dismiss themselves after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;

const AUTO_DISMISS_MS: u32 = 8_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: Uuid,
    pub message: String,
}

/// Provided once via Leptos context at application start.
#[derive(Clone, Copy)]
pub struct AlertService {
    alerts: RwSignal<Vec<Alert>>,
}

impl AlertService {
    pub fn new() -> Self {
        Self {
            alerts: RwSignal::new(Vec::new()),
        }
    }

    pub fn alerts(&self) -> RwSignal<Vec<Alert>> {
        self.alerts
    }

    /// Broadcast an error message.
    pub fn error(&self, message: impl Into<String>) {
        let alert = Alert {
            id: Uuid::new_v4(),
            message: message.into(),
        };
        log::warn!("{}", alert.message);
        let alerts = self.alerts;
        let id = alert.id;
        alerts.update(|list| list.push(alert));
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            alerts.update(|list| list.retain(|a| a.id != id));
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.alerts.update(|list| list.retain(|a| a.id != id));
    }
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_alerts() -> AlertService {
    use_context::<AlertService>().expect("AlertService not found in context")
}
