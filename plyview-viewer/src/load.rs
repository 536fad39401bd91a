//! Sequence-guarded asynchronous file loading
//!
//! Each load request gets a monotonically increasing sequence number.
//! Parsing runs on a spawned thread and the result re-enters the event
//! loop as a user event; a completion whose sequence is no longer the
//! latest issued is discarded, so two fast successive loads always leave
//! only the newest file applied.

use plyview_core::{ColoredPointCloud3f, Result};
use std::path::PathBuf;
use std::time::Instant;
use winit::event_loop::EventLoopProxy;

/// Events delivered back into the viewer's event loop
#[derive(Debug)]
pub enum ViewerEvent {
    LoadFinished(LoadOutcome),
}

/// Result of a finished load, tagged with its request sequence
#[derive(Debug)]
pub struct LoadOutcome {
    pub seq: u64,
    pub path: PathBuf,
    pub result: Result<ColoredPointCloud3f>,
}

/// Issues sequence numbers and decides which completions are current
#[derive(Debug, Default)]
pub struct LoadTracker {
    latest: u64,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load request, superseding all earlier ones
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether a completion with this sequence may still be applied.
    ///
    /// Sequence numbers start at 1, so nothing is current before the
    /// first request has been issued.
    pub fn is_current(&self, seq: u64) -> bool {
        self.latest > 0 && seq == self.latest
    }
}

/// Read and parse a file on a background thread.
///
/// `default_color` is given to vertices in files that carry no colors.
/// The outcome is posted through the event loop proxy; the send fails only
/// when the event loop has already shut down, which is not an error worth
/// surfacing.
pub fn spawn_load(
    proxy: EventLoopProxy<ViewerEvent>,
    seq: u64,
    path: PathBuf,
    default_color: [u8; 3],
) {
    log::info!("loading {} (request {})", path.display(), seq);

    std::thread::spawn(move || {
        let started = Instant::now();
        let result = plyview_io::read_colored_point_cloud_with(&path, default_color);

        if let Ok(cloud) = &result {
            log::info!(
                "parsed {} points from {} in {:.1?}",
                cloud.len(),
                path.display(),
                started.elapsed()
            );
        }

        let outcome = LoadOutcome { seq, path, result };
        if proxy.send_event(ViewerEvent::LoadFinished(outcome)).is_err() {
            log::warn!("event loop closed before load finished");
        }
    });
}
