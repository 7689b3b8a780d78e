use anyhow::{Context, Result};
use formsmith_core::debounce::Debouncer;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Blocks until a watched schema file settles after a change.
///
/// The parent directory is watched rather than the file itself, so editors
/// that save by writing a temp file and renaming it are still seen.
pub struct SchemaWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    target: PathBuf,
    debouncer: Debouncer<()>,
    started: Instant,
}

impl SchemaWatcher {
    pub fn new(path: &Path, debounce_ms: u64) -> Result<Self> {
        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(tx, Config::default())?;

        let target = path
            .canonicalize()
            .with_context(|| format!("Cannot watch {}", path.display()))?;
        let dir = target.parent().unwrap_or(Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        info!("Watching schema file: {}", target.display());

        Ok(Self {
            _watcher: watcher,
            rx,
            target,
            debouncer: Debouncer::new(debounce_ms),
            started: Instant::now(),
        })
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn is_relevant(&self, event: &Event) -> bool {
        matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        ) && event
            .paths
            .iter()
            .any(|p| p.file_name() == self.target.file_name())
    }

    /// Wait for the next burst of changes to the file to go quiet
    pub fn wait_for_change(&mut self) -> Result<()> {
        loop {
            let received = match self.debouncer.due_at() {
                Some(due_at) => {
                    let wait = due_at.saturating_sub(self.now_ms());
                    self.rx.recv_timeout(Duration::from_millis(wait))
                }
                None => self.rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(Ok(event)) => {
                    if self.is_relevant(&event) {
                        debug!("Schema file event: {:?}", event.kind);
                        let now = self.now_ms();
                        self.debouncer.push(now, ());
                    }
                }
                Ok(Err(e)) => error!("Watch error: {:?}", e),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    anyhow::bail!("Watch channel closed");
                }
            }

            let now = self.now_ms();
            if self.debouncer.poll(now).is_some() {
                info!("Schema change detected, re-checking...");
                return Ok(());
            }
        }
    }
}
