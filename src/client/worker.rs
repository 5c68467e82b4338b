use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::client::{CompareClient, CompareTransport};
use crate::error::{DoccmpError, Result};
use crate::model::{DiffResult, PickedFile};

#[derive(Debug, Clone)]
pub struct CompareJob {
    pub generation: u64,
    pub server: String,
    pub original: PickedFile,
    pub modified: PickedFile,
}

#[derive(Debug)]
pub struct CompareReply {
    pub generation: u64,
    pub outcome: Result<DiffResult>,
}

/// Runs compare uploads off the UI thread. Jobs are served in order.
pub struct CompareWorker {
    job_tx: Sender<CompareJob>,
    reply_rx: Receiver<CompareReply>,
}

impl CompareWorker {
    pub fn spawn<T: CompareTransport + 'static>(mut client: CompareClient<T>) -> Self {
        let (job_tx, job_rx) = mpsc::channel::<CompareJob>();
        let (reply_tx, reply_rx) = mpsc::channel::<CompareReply>();

        thread::spawn(move || {
            while let Ok(job) = job_rx.recv() {
                let outcome = client.compare(&job.server, &job.original, &job.modified);
                let reply = CompareReply {
                    generation: job.generation,
                    outcome,
                };
                if reply_tx.send(reply).is_err() {
                    break;
                }
            }
        });

        Self { job_tx, reply_rx }
    }

    /// Queue a job. Fails when the worker thread has exited.
    pub fn request(&self, job: CompareJob) -> Result<()> {
        self.job_tx.send(job).map_err(|e| {
            log::error!("compare worker is gone; request dropped");
            DoccmpError::Transport(format!("compare worker stopped: {e}"))
        })
    }

    pub fn try_recv(&self) -> Option<CompareReply> {
        self.reply_rx.try_recv().ok()
    }

    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<CompareReply> {
        self.reply_rx.recv_timeout(timeout).ok()
    }
}
