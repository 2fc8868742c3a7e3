use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use rand::Rng;
use tokio::time::{interval, sleep};

use crate::{data::ProviderError, domain::weather::Observation};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickClock,
    TickRefresh,
    Input(Event),
    FetchStarted,
    FetchCompleted {
        seq: u64,
        outcome: Result<Observation, ProviderError>,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// One-second ticker driving the local clock between refreshes.
pub fn start_clock_task(tx: tokio::sync::mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(1));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickClock).await.is_err() {
                break;
            }
        }
    });
}

/// Jittered polling timer re-issuing the remote fetch.
pub fn start_refresh_task(tx: tokio::sync::mpsc::Sender<AppEvent>, refresh_secs: u64) {
    tokio::spawn(async move {
        let base = refresh_secs.max(10);
        loop {
            let wait_secs = {
                let mut rng = rand::rng();
                let jitter = rng.random_range(-0.1f32..0.1f32);
                ((base as f32) * (1.0 + jitter)).max(1.0)
            };
            sleep(Duration::from_secs_f32(wait_secs)).await;
            if tx.send(AppEvent::TickRefresh).await.is_err() {
                break;
            }
        }
    });
}
