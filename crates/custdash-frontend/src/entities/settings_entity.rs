use custdash_bridge::config::Config;
use gpui::{AppContext, Entity};

/// Configuration the backend is running with. Stays at the defaults until the
/// backend has answered the configuration request.
#[derive(Debug, Clone, Default)]
pub struct SettingsEntity {
    pub config: Config,
    pub received: bool,
}

impl SettingsEntity {
    /// Where customers are fetched from, once the backend has reported it.
    pub fn data_source(&self) -> Option<&str> {
        self.received.then_some(self.config.api_url.as_str())
    }

    pub fn update<C: AppContext>(entity: &Entity<Self>, config: Config, cx: &mut C) {
        entity.update(cx, |this, cx| {
            this.config = config;
            this.received = true;
            cx.notify();
        });
    }
}
