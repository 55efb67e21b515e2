//! Hosts a [`Carousel`] on a tokio task.
//!
//! The task sleeps until the controller's next deadline or the next command,
//! whichever comes first, and publishes a [`CarouselState`] snapshot after
//! every step. Dropping the [`CarouselHandle`] unmounts the carousel and
//! stops the task, so no timer outlives its owner.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace};

use super::controller::{Carousel, CarouselState};
use super::types::{CarouselConfig, Direction};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselCommand {
    Navigate(Direction),
    PointerEnter,
    PointerLeave,
    TouchStart,
    TouchEnd,
    Resize(f32),
    SetTotalItems(usize),
}

#[derive(Debug)]
pub struct CarouselHandle {
    commands: mpsc::UnboundedSender<CarouselCommand>,
    snapshots: watch::Receiver<CarouselState>,
    task: JoinHandle<()>,
}

impl CarouselHandle {
    /// Queue a command. Returns false once the carousel is gone.
    pub fn send(&self, command: CarouselCommand) -> bool {
        self.commands.send(command).is_ok()
    }

    pub fn snapshot(&self) -> CarouselState {
        *self.snapshots.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselState> {
        self.snapshots.clone()
    }

    /// Unmount explicitly; equivalent to dropping the handle.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Mount a carousel on the current tokio runtime.
pub fn spawn_carousel(
    config: CarouselConfig,
    total_items: usize,
    viewport_width: f32,
) -> CarouselHandle {
    let carousel =
        Carousel::mount(config, total_items, viewport_width, now());
    let (commands, rx) = mpsc::unbounded_channel();
    let (tx, snapshots) = watch::channel(carousel.state());
    let task = tokio::spawn(run(carousel, rx, tx));

    CarouselHandle {
        commands,
        snapshots,
        task,
    }
}

async fn run(
    mut carousel: Carousel,
    mut commands: mpsc::UnboundedReceiver<CarouselCommand>,
    snapshots: watch::Sender<CarouselState>,
) {
    loop {
        let deadline = carousel.next_deadline();
        // Disabled select branches still build their future.
        let wake_at = deadline
            .map(Instant::from_std)
            .unwrap_or_else(|| Instant::now() + Duration::from_secs(86_400));

        tokio::select! {
            command = commands.recv() => match command {
                Some(command) => apply(&mut carousel, command),
                None => break,
            },
            _ = tokio::time::sleep_until(wake_at), if deadline.is_some() => {
                for event in carousel.tick(now()) {
                    trace!(?event, "carousel event");
                }
            }
        }

        for event in carousel.drain_events() {
            trace!(?event, "carousel event");
        }
        snapshots.send_replace(carousel.state());
    }

    carousel.unmount();
    snapshots.send_replace(carousel.state());
    debug!("carousel driver stopped");
}

fn apply(carousel: &mut Carousel, command: CarouselCommand) {
    let at = now();
    match command {
        CarouselCommand::Navigate(Direction::Next) => {
            carousel.next(at);
        }
        CarouselCommand::Navigate(Direction::Prev) => {
            carousel.prev(at);
        }
        CarouselCommand::Navigate(Direction::JumpTo(page)) => {
            carousel.jump_to(page, at);
        }
        CarouselCommand::PointerEnter => carousel.pointer_enter(),
        CarouselCommand::PointerLeave => carousel.pointer_leave(at),
        CarouselCommand::TouchStart => carousel.touch_start(),
        CarouselCommand::TouchEnd => carousel.touch_end(at),
        CarouselCommand::Resize(width) => carousel.resize(width, at),
        CarouselCommand::SetTotalItems(total) => {
            carousel.set_total_items(total, at)
        }
    }
}

/// Tokio's clock, so paused-time tests drive the carousel too.
fn now() -> std::time::Instant {
    Instant::now().into_std()
}
