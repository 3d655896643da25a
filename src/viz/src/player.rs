use engine::{Playback, TICK_INTERVAL_MS};
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

/// Drives a [`Playback`] state machine with a real ticker. Owns the
/// one interval task a viewer instance is allowed; `play` while
/// already playing is a no-op, and both `pause` and dropping the
/// driver abort the task, so no tick can fire after teardown.
pub struct PlaybackDriver {
    state: Arc<RwLock<Playback>>,
    ticker: Option<JoinHandle<()>>,
}

impl PlaybackDriver {
    pub fn new(total_frames: u32) -> Self {
        PlaybackDriver {
            state: Arc::new(RwLock::new(Playback::new(total_frames))),
            ticker: None,
        }
    }

    /// Shared handle onto the transport state, for rendering loops.
    pub fn state(&self) -> Arc<RwLock<Playback>> {
        Arc::clone(&self.state)
    }

    pub async fn current_frame(&self) -> u32 {
        self.state.read().await.current_frame()
    }

    pub async fn is_playing(&self) -> bool {
        self.state.read().await.is_playing()
    }

    pub async fn play(&mut self) {
        if self.ticker.is_some() {
            return;
        }

        self.state.write().await.play();

        let state = Arc::clone(&self.state);
        let period = Duration::from_millis(TICK_INTERVAL_MS);
        self.ticker = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                state.write().await.tick();
            }
        }));

        debug!("playback started");
    }

    pub async fn pause(&mut self) {
        if let Some(task) = self.ticker.take() {
            task.abort();
        }
        self.state.write().await.pause();

        debug!("playback paused at frame {}", self.current_frame().await);
    }

    pub async fn seek(&mut self, frame: u32) {
        self.state.write().await.seek(frame);
    }
}

impl Drop for PlaybackDriver {
    fn drop(&mut self) {
        if let Some(task) = self.ticker.take() {
            task.abort();
        }
    }
}
