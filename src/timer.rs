use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum TimerEvent {
    Tick { position: usize, remaining: u32 },
    Expired { position: usize },
}

/// Handle to an armed countdown. Disarming stops the thread before its next
/// send; events already queued carry the position so the consumer can drop
/// ones for a position it has left.
#[derive(Debug)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    pub fn disarm(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

/// Arm the countdown for one question position: one tick per wall-clock
/// second from `seconds` down to zero, then a single `Expired`.
pub fn arm(tx: mpsc::Sender<TimerEvent>, position: usize, seconds: u32) -> TimerHandle {
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = cancelled.clone();

    thread::spawn(move || {
        let mut remaining = seconds;
        loop {
            if flag.load(Ordering::SeqCst) {
                break;
            }
            if tx.send(TimerEvent::Tick { position, remaining }).is_err() {
                break;
            }
            if remaining == 0 {
                if !flag.load(Ordering::SeqCst) {
                    let _ = tx.send(TimerEvent::Expired { position });
                }
                break;
            }

            thread::sleep(Duration::from_secs(1));
            remaining -= 1;
        }
    });

    TimerHandle { cancelled }
}

pub fn format_seconds(secs: u32) -> String {
    format!("{:02}", secs)
}
