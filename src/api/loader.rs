//! Startup loader threads
//!
//! Each collection is fetched once, on its own worker thread, with the
//! result handed to the UI loop over an mpsc channel. The two workers
//! share nothing and finish in whatever order the network decides;
//! results are applied as they arrive.

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::types::{Exercise, Meal};
use anyhow::Result;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use tracing::debug;

/// A completed fetch attempt, successful or not
#[derive(Debug)]
pub enum DataEvent {
    Exercises(Result<Vec<Exercise>>),
    Meals(Result<Vec<Meal>>),
}

/// Spawn both fetch workers and return the result channel
///
/// Each worker sends exactly one event and exits. Dropping the last
/// sender disconnects the channel, which the UI loop treats as "all
/// loads finished".
pub fn spawn_loaders(config: &ApiConfig) -> Receiver<DataEvent> {
    let (tx, rx) = mpsc::channel();

    {
        let config = config.clone();
        let tx = tx.clone();
        thread::spawn(move || {
            debug!("fetching exercise catalog");
            let result = ApiClient::new(&config).and_then(|client| client.exercises());
            let _ = tx.send(DataEvent::Exercises(result));
        });
    }

    {
        let config = config.clone();
        thread::spawn(move || {
            debug!("fetching today's meals");
            let result = ApiClient::new(&config).and_then(|client| client.meals_today());
            let _ = tx.send(DataEvent::Meals(result));
        });
    }

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_channel_carries_both_outcomes() {
        let (tx, rx) = mpsc::channel();
        tx.send(DataEvent::Exercises(Ok(Vec::new()))).unwrap();
        tx.send(DataEvent::Meals(Err(anyhow!("connection refused"))))
            .unwrap();
        drop(tx);

        let events: Vec<DataEvent> = rx.iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], DataEvent::Exercises(Ok(_))));
        assert!(matches!(events[1], DataEvent::Meals(Err(_))));
    }
}
