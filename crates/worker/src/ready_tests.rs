// SPDX-License-Identifier: MIT

use super::*;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn wait_returns_once_every_signal_is_in() {
    let barrier = Arc::new(ReadyBarrier::new(2));
    let b1 = barrier.clone();
    tokio::spawn(async move { b1.signal().await });
    let b2 = barrier.clone();
    tokio::spawn(async move { b2.signal().await });

    let wait = tokio::time::timeout(Duration::from_secs(1), barrier.wait(Duration::from_secs(5)));
    wait.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn wait_gives_up_at_the_deadline_if_nobody_signals() {
    let barrier = ReadyBarrier::new(1);
    let start = tokio::time::Instant::now();
    barrier.wait(Duration::from_secs(5)).await;
    assert!(start.elapsed() >= Duration::from_secs(5));
}

#[tokio::test]
async fn extra_signals_beyond_the_total_are_ignored() {
    let barrier = ReadyBarrier::new(1);
    barrier.signal().await;
    barrier.signal().await;
    assert_eq!(*barrier.remaining.lock().await, 0);
}

#[tokio::test]
async fn wait_stays_pending_until_the_last_signal_lands() {
    let barrier = Arc::new(ReadyBarrier::new(1));
    let mut wait = tokio_test::task::spawn(barrier.wait(Duration::from_secs(5)));
    tokio_test::assert_pending!(wait.poll());

    barrier.signal().await;
    tokio_test::assert_ready!(wait.poll());
}
