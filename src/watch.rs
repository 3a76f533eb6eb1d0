use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};

/// True when any path in a notify event names the watched file.
fn touches_file(paths: &[PathBuf], file_name: &OsString) -> bool {
    paths
        .iter()
        .any(|p| p.file_name().is_some_and(|n| n == file_name.as_os_str()))
}

/// Watches the directory holding `path` on a background thread and sends `()` whenever
/// an event names the file. Watching the directory keeps working across saves that
/// rename a temporary file over the config.
pub fn watch_file(path: PathBuf) -> Receiver<()> {
    let (tx, rx) = channel::<()>();
    std::thread::spawn(move || {
        use notify::{EventKind, RecursiveMode, Watcher};
        let Some(file_name) = path.file_name().map(|n| n.to_os_string()) else {
            log::warn!("cannot watch {}: no file name", path.display());
            return;
        };
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                match event.kind {
                    EventKind::Modify(_)
                    | EventKind::Create(_)
                    | EventKind::Remove(_)
                    | EventKind::Any => {
                        if touches_file(&event.paths, &file_name) {
                            let _ = tx.send(());
                        }
                    }
                    _ => {}
                }
            }
        });
        let mut watcher = match watcher {
            Ok(w) => w,
            Err(e) => {
                log::warn!("config watcher unavailable: {}", e);
                return;
            }
        };
        if let Err(e) = watcher.watch(Path::new(&dir), RecursiveMode::NonRecursive) {
            log::warn!("failed to watch {}: {}", dir.display(), e);
            return;
        }
        log::info!("watching {} for changes", path.display());
        loop {
            std::thread::sleep(std::time::Duration::from_secs(3600));
        }
    });
    rx
}
