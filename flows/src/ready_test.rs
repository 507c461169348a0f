use std::cell::Cell;

use super::*;

#[test]
fn records_retry_then_ready_once() {
    let mut poll = ReadinessPoll::new();
    assert_eq!(poll.record(false), PollStep::RetryAfter(READY_POLL_INTERVAL));
    assert_eq!(poll.record(false), PollStep::RetryAfter(Duration::from_millis(1500)));
    assert_eq!(poll.record(true), PollStep::Ready);
    assert_eq!(poll.record(true), PollStep::Stopped);
    assert_eq!(poll.attempts(), 3);
    assert!(poll.is_ready());
}

#[test]
fn cancelled_poll_stops() {
    let mut poll = ReadinessPoll::new();
    poll.cancel_handle().cancel();
    assert_eq!(poll.record(true), PollStep::Stopped);
    assert!(!poll.is_ready());
}

#[tokio::test]
async fn retries_until_ready_with_fixed_delay() {
    let mut poll = ReadinessPoll::with_interval(Duration::from_millis(1));
    let calls = Cell::new(0_u32);
    let mut delays = Vec::new();

    let ready = poll_until_ready(
        &mut poll,
        || {
            calls.set(calls.get() + 1);
            let ok = calls.get() >= 4;
            async move { ok }
        },
        |delay| {
            delays.push(delay);
            tokio::time::sleep(delay)
        },
    )
    .await;

    assert!(ready);
    assert_eq!(calls.get(), 4);
    assert_eq!(delays, vec![Duration::from_millis(1); 3]);
}

#[tokio::test]
async fn signals_ready_exactly_once() {
    let mut poll = ReadinessPoll::with_interval(Duration::ZERO);
    let first = poll_until_ready(&mut poll, || async { true }, |_| async {}).await;
    let second = poll_until_ready(&mut poll, || async { true }, |_| async {}).await;
    assert!(first);
    assert!(!second);
    assert_eq!(poll.attempts(), 1);
}

#[tokio::test]
async fn cancel_during_probe_ends_the_loop() {
    let mut poll = ReadinessPoll::with_interval(Duration::ZERO);
    let handle = poll.cancel_handle();
    let calls = Cell::new(0_u32);

    let ready = poll_until_ready(
        &mut poll,
        || {
            calls.set(calls.get() + 1);
            if calls.get() == 2 {
                handle.cancel();
            }
            async { false }
        },
        |_| async {},
    )
    .await;

    assert!(!ready);
    assert_eq!(calls.get(), 2);
    assert!(!poll.is_ready());
}
