use crate::clock::TimeOfDay;
use crate::common::time::{Clock, time_of_day};
use crate::config::UtcOffset;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickerControl {
    Pause(bool),
    SetOffset(UtcOffset),
    Stop,
}

pub struct TickerHandle {
    pub sender: Sender<TickerControl>,
    pub join: Option<JoinHandle<()>>,
}

impl TickerHandle {
    pub fn stop(&mut self) {
        let _ = self.sender.send(TickerControl::Stop);
        if let Some(join) = self.join.take()
            && join.join().is_err()
        {
            tracing::error!("ticker thread panicked");
        }
    }
}

/// Polls `clock` every `interval` and publishes the time of day whenever the
/// displayed second changes.
pub fn spawn_ticker<C>(
    clock: C,
    interval: Duration,
    offset: UtcOffset,
    tick_tx: Sender<TimeOfDay>,
) -> TickerHandle
where
    C: Clock + Send + 'static,
{
    let (tx, rx) = crossbeam_channel::unbounded();
    let join = thread::spawn(move || run_ticker(clock, interval, offset, rx, tick_tx));
    TickerHandle {
        sender: tx,
        join: Some(join),
    }
}

struct Ticker<C> {
    clock: C,
    offset: UtcOffset,
    last: Option<TimeOfDay>,
    tick_tx: Sender<TimeOfDay>,
}

impl<C: Clock> Ticker<C> {
    /// Returns false once nobody is listening.
    fn poll(&mut self) -> bool {
        let now = time_of_day(self.clock.now(), self.offset);
        if self.last == Some(now) {
            return true;
        }
        self.last = Some(now);
        self.tick_tx.send(now).is_ok()
    }
}

fn run_ticker<C: Clock>(
    clock: C,
    interval: Duration,
    offset: UtcOffset,
    control_rx: Receiver<TickerControl>,
    tick_tx: Sender<TimeOfDay>,
) {
    let mut ticker = Ticker {
        clock,
        offset,
        last: None,
        tick_tx,
    };
    let mut paused = false;
    tracing::debug!(?interval, %offset, "ticker started");

    // First tick goes out immediately so the display never starts blank.
    if !ticker.poll() {
        return;
    }

    loop {
        let message = if paused {
            control_rx.recv().map_err(|_| RecvTimeoutError::Disconnected)
        } else {
            control_rx.recv_timeout(interval)
        };

        match message {
            Ok(TickerControl::Pause(flag)) => {
                paused = flag;
                tracing::debug!(paused, "ticker pause toggled");
                if !paused && !ticker.poll() {
                    break;
                }
            }
            Ok(TickerControl::SetOffset(offset)) => {
                ticker.offset = offset;
                tracing::debug!(%offset, "ticker offset changed");
                if !paused && !ticker.poll() {
                    break;
                }
            }
            Ok(TickerControl::Stop) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                if !ticker.poll() {
                    break;
                }
            }
        }
    }
    tracing::debug!("ticker stopped");
}
