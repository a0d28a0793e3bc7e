//! Thread-per-model tagger pool.
//!
//! Each worker thread loads its own model and owns it for the life of the
//! process. Requests reach a worker over a channel and the reply comes back on
//! a oneshot, so the async runtime never runs inference itself.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing::{error, info};

use super::tagger::{PosTagger, TaggerError, Token};

/// A loaded model that tags text synchronously on its worker thread.
pub trait TaggingModel {
    fn tag(&self, text: &str) -> Vec<Token>;
}

type Job = (String, oneshot::Sender<Vec<Token>>);

pub struct TaggerPool {
    workers: Vec<mpsc::Sender<Job>>,
    next: AtomicUsize,
}

impl TaggerPool {
    /// Spawns `workers` threads (at least one), each calling `load` for its own
    /// model, and waits until every one is ready. Any load failure is returned
    /// as `ModelUnavailable`.
    pub fn spawn<M, L>(workers: usize, load: L) -> Result<Self, TaggerError>
    where
        M: TaggingModel + 'static,
        L: Fn() -> Result<M, String> + Send + Sync + 'static,
    {
        let load = Arc::new(load);
        let count = workers.max(1);
        let mut senders = Vec::with_capacity(count);
        let mut ready = Vec::with_capacity(count);

        for id in 0..count {
            let (job_tx, job_rx) = mpsc::channel::<Job>();
            let (ready_tx, ready_rx) = mpsc::channel::<Result<(), String>>();
            let load = Arc::clone(&load);

            thread::Builder::new()
                .name(format!("pos-tagger-{id}"))
                .spawn(move || run_worker(id, load.as_ref(), job_rx, ready_tx))
                .map_err(|e| TaggerError::ModelUnavailable(e.to_string()))?;

            senders.push(job_tx);
            ready.push(ready_rx);
        }

        for ready_rx in ready {
            match ready_rx.recv() {
                Ok(Ok(())) => {}
                Ok(Err(message)) => return Err(TaggerError::ModelUnavailable(message)),
                Err(_) => {
                    return Err(TaggerError::ModelUnavailable(
                        "tagger worker exited during model load".to_string(),
                    ))
                }
            }
        }

        info!("Part-of-speech model loaded on {} worker(s)", senders.len());
        Ok(Self {
            workers: senders,
            next: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl PosTagger for TaggerPool {
    async fn tag(&self, text: &str) -> Result<Vec<Token>, TaggerError> {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.workers.len();
        let (reply_tx, reply_rx) = oneshot::channel();

        self.workers[index]
            .send((text.to_string(), reply_tx))
            .map_err(|_| TaggerError::WorkerGone)?;

        reply_rx.await.map_err(|_| TaggerError::WorkerGone)
    }
}

fn run_worker<M, L>(
    id: usize,
    load: &L,
    jobs: mpsc::Receiver<Job>,
    ready: mpsc::Sender<Result<(), String>>,
) where
    M: TaggingModel,
    L: Fn() -> Result<M, String>,
{
    let model = match load() {
        Ok(model) => model,
        Err(e) => {
            error!("Tagger worker {id} failed to load model: {e}");
            let _ = ready.send(Err(e));
            return;
        }
    };
    let _ = ready.send(Ok(()));

    // Ends when the pool (and with it every sender) is dropped.
    while let Ok((text, reply)) = jobs.recv() {
        match panic::catch_unwind(AssertUnwindSafe(|| model.tag(&text))) {
            Ok(tokens) => {
                let _ = reply.send(tokens);
            }
            // Dropping `reply` fails this request only; the worker keeps its model.
            Err(_) => error!(
                "Tagger worker {id} panicked on a {} byte input; request dropped",
                text.len()
            ),
        }
    }
}
