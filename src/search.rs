//! Search simulator - step-traced linear and binary search over a candidate list.
//!
//! Both searches record every probe in order. Pacing between probes is
//! delegated to a [`Pacer`], so demos can slow the trace down while tests run
//! with no delay at all.

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::types::{AttemptRecord, BinarySearchResult, SearchComparison, SearchResult};

/// Pause strategy invoked after every probe.
///
/// Returning `ControlFlow::Break` stops the search after the current probe.
pub trait Pacer {
    fn pause(&self) -> ControlFlow<()>;
}

/// Never pauses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Blocks the calling thread for the given duration. Zero means no pause.
impl Pacer for Duration {
    fn pause(&self) -> ControlFlow<()> {
        if !self.is_zero() {
            std::thread::sleep(*self);
        }
        ControlFlow::Continue(())
    }
}

/// Longest uninterrupted sleep taken by [`CancellablePacer`].
#[cfg(feature = "async")]
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Blocking delay that stops the search once its token is cancelled.
///
/// The delay is slept in short slices so a cancel cuts the current pause short.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct CancellablePacer {
    delay: Duration,
    token: CancellationToken,
}

#[cfg(feature = "async")]
impl CancellablePacer {
    pub fn new(delay: Duration, token: CancellationToken) -> Self {
        Self { delay, token }
    }
}

#[cfg(feature = "async")]
impl Pacer for CancellablePacer {
    fn pause(&self) -> ControlFlow<()> {
        let deadline = Instant::now() + self.delay;
        loop {
            if self.token.is_cancelled() {
                return ControlFlow::Break(());
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return ControlFlow::Continue(());
            }
            std::thread::sleep(remaining.min(CANCEL_POLL_INTERVAL));
        }
    }
}

/// Probes candidates in their given order until one equals `target`.
pub fn linear_search<P>(target: &str, candidates: &[String], pacer: &P) -> SearchResult
where
    P: Pacer + ?Sized,
{
    let start = Instant::now();
    let mut trace = Vec::new();
    let mut interrupted = false;

    for candidate in candidates {
        let is_match = candidate == target;
        trace.push(AttemptRecord::new(candidate.as_str(), is_match));
        let flow = pacer.pause();
        if is_match {
            break;
        }
        if flow.is_break() {
            interrupted = true;
            break;
        }
    }

    let result = SearchResult::from_trace(trace, start.elapsed(), interrupted);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "linear search finished: {} attempts, found={}",
        result.attempt_count(),
        result.found
    );

    result
}

/// Classic binary search over a sorted copy of `candidates`.
///
/// With duplicate entries the probe that matches is whichever one the halving
/// lands on, not necessarily the first.
pub fn binary_search<P>(target: &str, candidates: &[String], pacer: &P) -> BinarySearchResult
where
    P: Pacer + ?Sized,
{
    let mut sorted = candidates.to_vec();
    sorted.sort();

    let start = Instant::now();
    let mut trace = Vec::new();
    let mut interrupted = false;

    // Half-open range [low, high); midpoint rounds down over the inclusive bounds.
    let mut low = 0usize;
    let mut high = sorted.len();
    while low < high {
        let mid = low + (high - low - 1) / 2;
        let tried = sorted[mid].as_str();
        let is_match = tried == target;
        trace.push(AttemptRecord::new(tried, is_match));
        let flow = pacer.pause();
        if is_match {
            break;
        }
        if flow.is_break() {
            interrupted = true;
            break;
        }
        if target < tried {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    let result = SearchResult::from_trace(trace, start.elapsed(), interrupted);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "binary search finished: {} attempts, found={}",
        result.attempt_count(),
        result.found
    );

    BinarySearchResult { sorted, result }
}

/// Runs linear then binary search for the same target.
pub fn simulate_search<P>(target: &str, candidates: &[String], pacer: &P) -> SearchComparison
where
    P: Pacer + ?Sized,
{
    let linear = linear_search(target, candidates, pacer);
    let binary = binary_search(target, candidates, pacer);
    SearchComparison {
        target: target.to_string(),
        linear,
        binary,
    }
}

/// Runs both searches on a blocking task and sends the comparison via channel.
#[cfg(feature = "async")]
pub async fn simulate_search_tx(
    target: String,
    candidates: Vec<String>,
    delay: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<SearchComparison>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!(
        "search simulation is about to start over {} candidates...",
        candidates.len()
    );

    let pacer = CancellablePacer::new(delay, token);
    let handle =
        tokio::task::spawn_blocking(move || simulate_search(&target, &candidates, &pacer));

    match handle.await {
        Ok(comparison) => {
            if let Err(_e) = tx.send(comparison).await {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send search comparison: {}", _e);
            }
        }
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Search simulation task failed: {}", _e);
        }
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cancelled_pacer_stops_after_first_probe() {
        let token = CancellationToken::new();
        token.cancel();
        let pacer = CancellablePacer::new(Duration::ZERO, token);

        let result = linear_search("c", &list(&["a", "b", "c"]), &pacer);
        assert!(result.interrupted);
        assert_eq!(result.attempt_count(), 1);
    }

    #[test]
    fn test_cancel_cuts_long_pause_short() {
        let token = CancellationToken::new();
        let pacer = CancellablePacer::new(Duration::from_secs(30), token.clone());

        let canceller = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            token.cancel();
        });

        let start = Instant::now();
        let flow = pacer.pause();
        canceller.join().expect("canceller thread panicked");

        assert!(flow.is_break());
        assert!(start.elapsed() < Duration::from_secs(5), "{:?}", start.elapsed());
    }

    #[test]
    fn test_uncancelled_pacer_waits_full_delay() {
        let pacer = CancellablePacer::new(Duration::from_millis(30), CancellationToken::new());

        let start = Instant::now();
        assert!(pacer.pause().is_continue());
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_simulate_search_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        simulate_search_tx(
            "bee".to_string(),
            list(&["ant", "bee", "cat"]),
            Duration::ZERO,
            token,
            tx,
        )
        .await;

        let comparison = rx.recv().await.expect("Should receive comparison");
        assert!(comparison.linear.found);
        assert!(comparison.binary.result.found);
        assert_eq!(comparison.binary.result.attempt_count(), 1);
    }

    #[tokio::test]
    async fn test_simulate_search_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        simulate_search_tx(
            "zzz".to_string(),
            list(&["ant", "bee", "cat"]),
            Duration::ZERO,
            token,
            tx,
        )
        .await;

        let comparison = rx.recv().await.expect("Should receive comparison");
        assert!(comparison.linear.interrupted);
        assert!(comparison.binary.result.interrupted);
        assert_eq!(comparison.linear.attempt_count(), 1);
    }
}
