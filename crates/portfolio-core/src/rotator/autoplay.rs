//! Timer-driven autoplay for the testimonial rotator.
//!
//! One tokio task owns the [`TestimonialRotator`] and every timer that acts
//! on it. The UI talks to it through a [`RotatorHandle`]: commands go in
//! over an mpsc channel, snapshots come out over a watch channel.
//!
//! The tick timer belongs to the current (hover, capacity, selection)
//! configuration. Any change to one of those cancels it and arms a fresh
//! one, so at most one tick timer exists and it is absent while hovered.

use std::future::pending;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep_until, Instant, Interval, MissedTickBehavior};

use super::state::{Advance, PhaseTicket, RotationStart, SlotView, TestimonialRotator};
use crate::config::{RotatorConfig, SiteConfig};
use crate::viewport::Breakpoints;

/// Published view of the rotator after every state change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RotatorSnapshot {
    pub slots: Vec<SlotView>,
    pub paused: bool,
    pub animating: bool,
}

impl RotatorSnapshot {
    /// Pool indices in slot order.
    pub fn selection(&self) -> Vec<usize> {
        self.slots.iter().map(|slot| slot.pool_index).collect()
    }
}

#[derive(Debug)]
enum Command {
    SetHovered(bool),
    Refresh,
    SetViewportWidth(f64),
}

/// Handle to a running autoplay task.
///
/// Dropping the handle stops the task and cancels its timers.
#[derive(Debug)]
pub struct RotatorHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<RotatorSnapshot>,
    task: JoinHandle<()>,
}

impl RotatorHandle {
    /// Start autoplay over a pool of `pool_size` testimonials.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(pool_size: usize, viewport_width: f64, config: &SiteConfig) -> Self {
        Self::spawn_with_rng(pool_size, viewport_width, config, StdRng::from_os_rng())
    }

    /// Start autoplay with a caller-supplied RNG.
    pub fn spawn_with_rng<R>(pool_size: usize, viewport_width: f64, config: &SiteConfig, rng: R) -> Self
    where
        R: Rng + Send + 'static,
    {
        let capacity = config.breakpoints.items_per_view(viewport_width);
        let rotator = TestimonialRotator::new(pool_size, capacity, rng);

        let (snapshot_tx, snapshot_rx) = watch::channel(snapshot_of(&rotator, false));
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let autoplay = Autoplay {
            rotator,
            timings: config.rotator,
            breakpoints: config.breakpoints,
            hovered: false,
            ticker: None,
            pending: None,
            snapshots: snapshot_tx,
        };

        tracing::debug!(pool_size, capacity, "Starting testimonial autoplay");
        let task = tokio::spawn(autoplay.run(command_rx));

        Self {
            commands: command_tx,
            snapshots: snapshot_rx,
            task,
        }
    }

    /// Pointer entered (true) or left (false) the testimonial container.
    pub fn set_hovered(&self, hovered: bool) {
        self.send(Command::SetHovered(hovered));
    }

    /// Manual refresh: replace every visible testimonial.
    pub fn refresh(&self) {
        self.send(Command::Refresh);
    }

    /// New viewport width from a resize event.
    pub fn set_viewport_width(&self, width: f64) {
        self.send(Command::SetViewportWidth(width));
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<RotatorSnapshot> {
        self.snapshots.clone()
    }

    /// Latest published state.
    pub fn snapshot(&self) -> RotatorSnapshot {
        self.snapshots.borrow().clone()
    }

    fn send(&self, command: Command) {
        // Only fails once the task has stopped, when there is nothing to drive.
        if self.commands.send(command).is_err() {
            tracing::trace!("Testimonial autoplay already stopped");
        }
    }
}

impl Drop for RotatorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn snapshot_of<R: Rng>(rotator: &TestimonialRotator<R>, paused: bool) -> RotatorSnapshot {
    RotatorSnapshot {
        slots: rotator.slots(),
        paused,
        animating: rotator.is_animating(),
    }
}

struct Autoplay<R> {
    rotator: TestimonialRotator<R>,
    timings: RotatorConfig,
    breakpoints: Breakpoints,
    hovered: bool,
    ticker: Option<Interval>,
    /// Phase in flight and when it ends
    pending: Option<(PhaseTicket, Instant)>,
    snapshots: watch::Sender<RotatorSnapshot>,
}

impl<R: Rng> Autoplay<R> {
    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        self.rearm();

        loop {
            let deadline = self.pending.map(|(_, at)| at);

            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                _ = next_tick(&mut self.ticker) => self.on_tick(),
                _ = phase_deadline(deadline) => self.on_phase_due(),
            }

            self.publish();
        }

        tracing::debug!("Testimonial autoplay stopped");
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::SetHovered(hovered) => {
                if hovered != self.hovered {
                    self.hovered = hovered;
                    self.rearm();
                }
            }
            Command::Refresh => {
                let start = self.rotator.reset_all();
                self.begin(start);
            }
            Command::SetViewportWidth(width) => {
                if self.rotator.on_viewport_change(width, &self.breakpoints) {
                    self.pending = None;
                    self.rearm();
                }
            }
        }
    }

    fn on_tick(&mut self) {
        let start = self.rotator.rotate_one();
        self.begin(start);
    }

    fn begin(&mut self, start: RotationStart) {
        match start {
            RotationStart::Started(ticket) => {
                self.pending = Some((ticket, Instant::now() + self.timings.exit_duration()));
            }
            RotationStart::Busy => tracing::trace!("Rotation dropped, transition in flight"),
            RotationStart::Saturated => tracing::trace!("Rotation skipped, all testimonials shown"),
        }
    }

    fn on_phase_due(&mut self) {
        let Some((ticket, _)) = self.pending.take() else {
            return;
        };

        match self.rotator.advance(ticket) {
            Advance::Entering(next) => {
                self.pending = Some((next, Instant::now() + self.timings.enter_duration()));
                // Selection changed: the tick timer restarts from here
                self.rearm();
            }
            Advance::Settled => {}
            Advance::Aborted => tracing::debug!("Rotation aborted, no unused testimonial"),
            Advance::Stale => tracing::trace!("Ignoring stale phase ticket"),
        }
    }

    /// Cancel the tick timer and create a new one for the current configuration.
    fn rearm(&mut self) {
        self.ticker = if self.hovered {
            None
        } else {
            let period = self.timings.tick_interval();
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            Some(ticker)
        };
    }

    fn publish(&self) {
        let next = snapshot_of(&self.rotator, self.hovered);
        self.snapshots.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => pending().await,
    }
}

async fn phase_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => pending().await,
    }
}
