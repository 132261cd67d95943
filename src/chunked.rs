//! `chunked` — hand a finished result list to a consumer a slice at a time.
//!
//! The search itself always runs to completion; this module only paces how the
//! sorted results are released so a UI loop is never handed everything in one
//! turn. Each progress callback receives every result delivered so far (the
//! cumulative sorted prefix). A shared [`AbortFlag`] is checked before each
//! chunk: once set, nothing more is delivered and the done callback never fires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::dictionary::Dictionary;
use crate::grid::LetterSource;
use crate::solver::{find_words_in, FoundWord, SearchError, SearchOptions};

/// Results released per chunk unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 20;
/// Pause between chunks unless configured otherwise (about one 60 Hz frame).
pub const DEFAULT_CHUNK_DELAY: Duration = Duration::from_millis(16);

/// Cancellation flag shared between the delivery loop and whoever may stop it.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct AbortFlag(Arc<AtomicBool>);

impl AbortFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop any delivery watching this flag before its next chunk.
    pub fn abort(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// How results are paced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkOptions {
    /// Results added per progress call; `0` is treated as `1`.
    pub chunk_size: usize,
    /// Pause between chunks. Ignored on wasm, where the caller drives
    /// [`ProgressiveDelivery`] from its own timer.
    pub delay: Duration,
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self { chunk_size: DEFAULT_CHUNK_SIZE, delay: DEFAULT_CHUNK_DELAY }
    }
}

/// How a delivery ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// Every result was delivered and the done callback ran.
    Completed { delivered: usize },
    /// The abort flag was seen before a chunk; `delivered` results had gone out.
    Aborted { delivered: usize },
}

/// Iterator over the growing prefixes of a result list.
///
/// Yields `results[..20]`, `results[..40]`, ... and finally the whole list
/// (an empty list still yields one empty prefix). Stops early, for good, once
/// the abort flag is set.
#[derive(Debug)]
pub struct ProgressiveDelivery<'a> {
    results: &'a [FoundWord],
    chunk_size: usize,
    delivered: usize,
    abort: AbortFlag,
    started: bool,
    aborted: bool,
}

impl<'a> ProgressiveDelivery<'a> {
    #[must_use]
    pub fn new(results: &'a [FoundWord], chunk_size: usize, abort: AbortFlag) -> Self {
        Self {
            results,
            chunk_size: chunk_size.max(1),
            delivered: 0,
            abort,
            started: false,
            aborted: false,
        }
    }

    /// Number of results released so far.
    #[must_use]
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// True once every result has been released.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.started && self.delivered == self.results.len()
    }

    /// True if delivery stopped because of the abort flag.
    #[must_use]
    pub fn was_aborted(&self) -> bool {
        self.aborted
    }
}

impl<'a> Iterator for ProgressiveDelivery<'a> {
    type Item = &'a [FoundWord];

    fn next(&mut self) -> Option<Self::Item> {
        if self.aborted || self.is_finished() {
            return None;
        }
        if self.abort.is_aborted() {
            self.aborted = true;
            debug!("delivery aborted after {}/{} results", self.delivered, self.results.len());
            return None;
        }

        self.started = true;
        self.delivered = (self.delivered + self.chunk_size).min(self.results.len());
        Some(&self.results[..self.delivered])
    }
}

fn pause(delay: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        let _ = delay;
    }
}

/// Release `results` chunk by chunk, pausing `options.delay` between chunks.
///
/// `on_progress` gets the cumulative prefix after each chunk. `on_done` gets the
/// full list once everything is out, and is never called after an abort.
pub fn deliver_chunked<P, D>(
    results: &[FoundWord],
    options: &ChunkOptions,
    abort: &AbortFlag,
    mut on_progress: P,
    on_done: D,
) -> DeliveryStatus
where
    P: FnMut(&[FoundWord]),
    D: FnOnce(&[FoundWord]),
{
    let mut delivery = ProgressiveDelivery::new(results, options.chunk_size, abort.clone());

    while let Some(prefix) = delivery.next() {
        on_progress(prefix);
        if !delivery.is_finished() {
            pause(options.delay);
        }
    }

    if delivery.was_aborted() {
        return DeliveryStatus::Aborted { delivered: delivery.delivered() };
    }

    on_done(results);
    DeliveryStatus::Completed { delivered: delivery.delivered() }
}

/// Search `source` and deliver the sorted results progressively.
///
/// # Errors
/// [`SearchError`] if the letters cannot be exported or are not square; in that
/// case neither callback runs.
pub fn chunked_word_search<L, P, D>(
    source: &L,
    dictionary: &Dictionary,
    search_options: &SearchOptions,
    chunk_options: &ChunkOptions,
    abort: &AbortFlag,
    on_progress: P,
    on_done: D,
) -> Result<DeliveryStatus, SearchError>
where
    L: LetterSource + ?Sized,
    P: FnMut(&[FoundWord]),
    D: FnOnce(&[FoundWord]),
{
    let result = find_words_in(source, dictionary, search_options)?;
    Ok(deliver_chunked(&result.results, chunk_options, abort, on_progress, on_done))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn fake_results(n: usize) -> Vec<FoundWord> {
        (0..n)
            .map(|i| FoundWord { word: format!("w{i:03}"), path: vec![(0, 0)] })
            .collect()
    }

    fn no_wait(chunk_size: usize) -> ChunkOptions {
        ChunkOptions { chunk_size, delay: Duration::ZERO }
    }

    #[test]
    fn test_progress_gets_cumulative_prefixes() {
        let results = fake_results(45);
        let mut seen = Vec::new();
        let mut done = None;
        let status = deliver_chunked(
            &results,
            &no_wait(20),
            &AbortFlag::new(),
            |prefix| seen.push(prefix.len()),
            |all| done = Some(all.len()),
        );
        assert_eq!(seen, vec![20, 40, 45]);
        assert_eq!(done, Some(45));
        assert_eq!(status, DeliveryStatus::Completed { delivered: 45 });
    }

    #[test]
    fn test_prefix_preserves_order() {
        let results = fake_results(5);
        let mut last = Vec::new();
        deliver_chunked(&results, &no_wait(2), &AbortFlag::new(), |p| last = p.to_vec(), |_| {});
        assert_eq!(last, results);
    }

    #[test]
    fn test_empty_results_still_complete() {
        let mut progress_calls = 0;
        let mut done_calls = 0;
        let status = deliver_chunked(
            &[],
            &no_wait(20),
            &AbortFlag::new(),
            |p| {
                assert!(p.is_empty());
                progress_calls += 1;
            },
            |_| done_calls += 1,
        );
        assert_eq!(progress_calls, 1);
        assert_eq!(done_calls, 1);
        assert_eq!(status, DeliveryStatus::Completed { delivered: 0 });
    }

    #[test]
    fn test_abort_before_start() {
        let abort = AbortFlag::new();
        abort.abort();
        let mut progress_calls = 0;
        let mut done = false;
        let status = deliver_chunked(&fake_results(10), &no_wait(3), &abort, |_| progress_calls += 1, |_| done = true);
        assert_eq!(progress_calls, 0);
        assert!(!done);
        assert_eq!(status, DeliveryStatus::Aborted { delivered: 0 });
    }

    #[test]
    fn test_abort_mid_delivery_suppresses_done() {
        let abort = AbortFlag::new();
        let watcher = abort.clone();
        let mut seen = Vec::new();
        let mut done = false;
        let status = deliver_chunked(
            &fake_results(50),
            &no_wait(20),
            &abort,
            |p| {
                seen.push(p.len());
                watcher.abort();
            },
            |_| done = true,
        );
        assert_eq!(seen, vec![20]);
        assert!(!done);
        assert_eq!(status, DeliveryStatus::Aborted { delivered: 20 });
    }

    #[test]
    fn test_abort_from_another_thread() {
        let abort = AbortFlag::new();
        let remote = abort.clone();
        let results = fake_results(100);
        let options = ChunkOptions { chunk_size: 1, delay: Duration::from_millis(5) };

        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(30));
            remote.abort();
        });
        let status = deliver_chunked(&results, &options, &abort, |_| {}, |_| {});
        handle.join().unwrap();

        match status {
            DeliveryStatus::Aborted { delivered } => assert!(delivered < 100),
            DeliveryStatus::Completed { .. } => panic!("delivery should have been aborted"),
        }
    }

    #[test]
    fn test_zero_chunk_size_treated_as_one() {
        let mut seen = Vec::new();
        deliver_chunked(&fake_results(3), &no_wait(0), &AbortFlag::new(), |p| seen.push(p.len()), |_| {});
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_iterator_stays_stopped_after_abort() {
        let results = fake_results(10);
        let abort = AbortFlag::new();
        let mut delivery = ProgressiveDelivery::new(&results, 4, abort.clone());
        assert_eq!(delivery.next().map(<[FoundWord]>::len), Some(4));
        abort.abort();
        assert!(delivery.next().is_none());
        assert!(delivery.next().is_none());
        assert!(delivery.was_aborted());
        assert_eq!(delivery.delivered(), 4);
    }

    #[test]
    fn test_default_options() {
        let options = ChunkOptions::default();
        assert_eq!(options.chunk_size, 20);
        assert_eq!(options.delay, Duration::from_millis(16));
    }

    #[test]
    fn test_chunked_word_search_end_to_end() {
        let grid: Grid = "ca,sa".parse().unwrap();
        let dict: Dictionary = ["casa", "cas"].into_iter().collect();
        let mut words_done = Vec::new();
        let status = chunked_word_search(
            &grid,
            &dict,
            &SearchOptions { min_word_len: 3, diagonals: true },
            &no_wait(1),
            &AbortFlag::new(),
            |_| {},
            |all| words_done = all.iter().map(|r| r.word.clone()).collect(),
        )
        .unwrap();
        assert_eq!(status, DeliveryStatus::Completed { delivered: 2 });
        assert_eq!(words_done, vec!["casa", "cas"]);
    }

    #[test]
    fn test_chunked_word_search_bad_grid() {
        let rows = vec![vec!["c", "a"], vec!["s"]];
        let mut progressed = false;
        let mut done = false;
        let res = chunked_word_search(
            &rows,
            &Dictionary::new(),
            &SearchOptions::default(),
            &no_wait(1),
            &AbortFlag::new(),
            |_| progressed = true,
            |_| done = true,
        );
        assert!(res.is_err());
        assert!(!progressed && !done);
    }
}
