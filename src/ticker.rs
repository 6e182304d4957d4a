//! Per-subscription counter stream.
//!
//! Each subscription gets its own producer task that owns an interval timer
//! and counts up from zero, delivering values through a bounded single-slot
//! channel. Dropping the consumer stream closes the channel, which stops the
//! producer task and releases its timer. Subscriptions are fully independent
//! of each other.

use std::time::Duration;

use futures_util::Stream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_stream::wrappers::ReceiverStream;
use tracing::debug;

/// Interval between counter increments.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// The channel holds at most one undelivered value, so the producer runs at
/// most one tick ahead of a slow consumer.
const CHANNEL_CAPACITY: usize = 1;

/// Create an infinite stream of integers `1, 2, 3, ...`, one per `period`.
///
/// The stream is lazy and cancellable: the backing task exits as soon as the
/// returned stream is dropped. A stream cannot be restarted once dropped;
/// callers create a fresh one per subscription.
pub fn tick_stream(period: Duration) -> impl Stream<Item = i32> {
    let (stream, _handle) = spawn_ticker(period);
    stream
}

/// Spawn the producer task and return the consumer stream plus the task
/// handle. The handle is only observed by tests; `tick_stream` discards it.
fn spawn_ticker(period: Duration) -> (ReceiverStream<i32>, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

    let handle = tokio::spawn(async move {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of a tokio interval completes immediately; consume
        // it so the first value arrives one full period after subscribing.
        interval.tick().await;

        let mut counter: i32 = 0;
        loop {
            interval.tick().await;
            counter += 1;
            if tx.send(counter).await.is_err() {
                // Consumer unsubscribed
                debug!(last_value = counter, "ticker consumer gone, stopping");
                break;
            }
        }
    });

    (ReceiverStream::new(rx), handle)
}
