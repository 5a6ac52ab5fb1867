// crates/trimstrip-media/src/worker.rs
//
// ThumbnailWorker: owns the background thread that turns tile requests into
// images. All public API the host calls lives here.
//
// The worker is the only asynchronous boundary in the system. Requests are
// fire-and-forget: the caller never blocks, a full queue drops the request
// (the tile stays blank; the next relayout re-issues anyway), and results
// carry their generation+index tag back so the core can discard anything
// that outlived its layout. Cancellation is implicit: the core bumps its
// generation and stale results die on arrival; nothing here needs to know.

use std::collections::HashMap;
use std::thread::{self, JoinHandle};

use anyhow::{anyhow, Result};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use uuid::Uuid;

use trimstrip_core::media_types::{Thumbnail, ThumbnailRequest, ThumbnailResult};

use crate::trimstrip_log;

/// Produces an image for a given time. Implemented by the host over
/// whatever decoder it uses; `None` means "nothing for that time" and the
/// tile stays blank; the worker never retries.
pub trait ThumbnailSource: Send {
    fn thumbnail(&mut self, time: f64) -> Option<Thumbnail>;
}

enum WorkerCmd {
    Register { asset: Uuid, source: Box<dyn ThumbnailSource> },
    Unregister { asset: Uuid },
    Fetch(ThumbnailRequest),
    Shutdown,
}

pub struct ThumbnailWorker {
    /// Delivered thumbnails, tagged. Drain with `try_results` on the owning
    /// thread and feed them to `TrimStrip::apply_thumbnail`.
    pub rx: Receiver<ThumbnailResult>,
    cmd_tx: Sender<WorkerCmd>,
    handle: Option<JoinHandle<()>>,
}

impl ThumbnailWorker {
    pub fn new() -> Self {
        // 512 slots of headroom on both sides: a relayout of a long asset
        // issues one request per tile in a burst, and results trickle back
        // while the UI thread is busy elsewhere.
        let (cmd_tx, cmd_rx) = bounded::<WorkerCmd>(512);
        let (result_tx, rx) = bounded::<ThumbnailResult>(512);

        let handle = thread::spawn(move || {
            let mut sources: HashMap<Uuid, Box<dyn ThumbnailSource>> = HashMap::new();
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    WorkerCmd::Register { asset, source } => {
                        sources.insert(asset, source);
                    }
                    WorkerCmd::Unregister { asset } => {
                        sources.remove(&asset);
                    }
                    WorkerCmd::Fetch(req) => {
                        let image = sources
                            .get_mut(&req.asset)
                            .and_then(|s| s.thumbnail(req.time));
                        let result = ThumbnailResult { asset: req.asset, tag: req.tag, image };
                        // A full result queue means the host stopped
                        // draining; dropping is the blank-tile failure mode.
                        if result_tx.try_send(result).is_err() {
                            trimstrip_log!(
                                "[worker] result queue full; dropping gen {} tile {}",
                                req.tag.generation,
                                req.tag.index
                            );
                        }
                    }
                    WorkerCmd::Shutdown => return,
                }
            }
        });

        Self { rx, cmd_tx, handle: Some(handle) }
    }

    /// Make `source` answer requests for `asset`. Replaces any previous
    /// source for the same asset.
    pub fn register_source(&self, asset: Uuid, source: Box<dyn ThumbnailSource>) {
        let _ = self.cmd_tx.send(WorkerCmd::Register { asset, source });
    }

    pub fn unregister_source(&self, asset: Uuid) {
        let _ = self.cmd_tx.send(WorkerCmd::Unregister { asset });
    }

    /// Queue one tile request. Never blocks: when the queue is full the
    /// request is dropped and logged; the tile stays blank until the next
    /// relayout re-issues it.
    pub fn request(&self, req: ThumbnailRequest) {
        let tag = req.tag;
        match self.cmd_tx.try_send(WorkerCmd::Fetch(req)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                trimstrip_log!(
                    "[worker] request queue full; dropping gen {} tile {}",
                    tag.generation,
                    tag.index
                );
            }
            Err(TrySendError::Disconnected(_)) => {
                trimstrip_log!("[worker] request after shutdown; gen {} dropped", tag.generation);
            }
        }
    }

    /// Queue a whole relayout's worth of requests.
    pub fn request_all(&self, reqs: impl IntoIterator<Item = ThumbnailRequest>) {
        for req in reqs {
            self.request(req);
        }
    }

    /// Everything delivered since the last call, in arrival order.
    /// Non-blocking.
    pub fn try_results(&self) -> Vec<ThumbnailResult> {
        self.rx.try_iter().collect()
    }

    /// Stop the worker thread and wait for it to exit.
    pub fn shutdown(mut self) -> Result<()> {
        let _ = self.cmd_tx.send(WorkerCmd::Shutdown);
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| anyhow!("thumbnail worker thread panicked")),
            None => Ok(()),
        }
    }
}

impl Default for ThumbnailWorker {
    fn default() -> Self {
        Self::new()
    }
}
