use super::App;
use crate::config::ViewerConfig;
use crate::event::Event;

impl App {
    /// Drains watcher notifications and queues a reload. A file that fails to parse or
    /// validate leaves the running config untouched.
    pub fn process_config_file_events(&mut self) {
        let Some(rx) = self.config_event_rx.as_ref() else {
            return;
        };
        // Editors often emit several events per save
        if rx.try_iter().count() == 0 {
            return;
        }
        let Some(path) = self.config_path.clone() else {
            return;
        };
        match ViewerConfig::from_path(&path) {
            Ok(cfg) => {
                log::info!("reloaded {}", path.display());
                self.queue.emit_now(Event::ConfigReloaded(Box::new(cfg)));
            }
            Err(e) => {
                log::warn!("keeping previous config; {} failed: {}", path.display(), e);
            }
        }
    }
}
