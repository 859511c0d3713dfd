use std::sync::{Arc, Mutex};

use footprint_desktop::config::Settings;

pub struct DesktopState {
    pub settings: Arc<Mutex<Settings>>,
}

impl DesktopState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(Mutex::new(settings)),
        }
    }
}
