//! Terminal input thread and session event channel.
//!
//! [`EventHandler`] polls crossterm on an OS thread because `poll()` blocks.
//! The session loop owns all state and drains one event at a time, so every
//! handler runs to completion before the next key is looked at.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// Terminal I/O failed; the session cannot continue.
    Error(String),
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    shutdown: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_flag = shutdown.clone();

        let thread = std::thread::spawn(move || {
            while !shutdown_flag.load(Ordering::Relaxed) {
                match event::poll(tick_rate) {
                    Err(e) => {
                        let _ = tx.send(AppEvent::Error(format!("Terminal poll error: {e}")));
                        break;
                    }
                    Ok(false) => {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        continue;
                    }
                    Ok(true) => {}
                }
                let sent = match event::read() {
                    Ok(CrosstermEvent::Key(key)) => tx.send(AppEvent::Key(key)),
                    Ok(CrosstermEvent::Resize(w, h)) => tx.send(AppEvent::Resize(w, h)),
                    Ok(_) => Ok(()),
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Ok(()),
                    Err(e) => {
                        let _ = tx.send(AppEvent::Error(format!("Terminal read error: {e}")));
                        break;
                    }
                };
                if sent.is_err() {
                    break;
                }
            }
        });

        Self {
            rx,
            shutdown,
            thread: Some(thread),
        }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread.take() {
            if let Err(panic_payload) = handle.join() {
                let msg = panic_payload.downcast::<String>().map_or_else(
                    |p| {
                        p.downcast::<&str>()
                            .map_or_else(|_| "unknown panic".to_string(), |s| s.to_string())
                    },
                    |s| *s,
                );
                tracing::error!("event thread panicked: {msg}");
            }
        }
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        // Signal only; joining here could deadlock if poll() is blocked during unwinding.
        self.shutdown.store(true, Ordering::Relaxed);
    }
}
