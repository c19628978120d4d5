use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use crate::io::images::ImageStore;

use super::{
    DocumentSnapshot,
    print::{PrintDocument, PrintRenderer, PrintSettings},
};

struct Job {
    generation: u64,
    snapshot: Arc<DocumentSnapshot>,
}

/// Runs print layout on a background thread.
///
/// Every submission gets a new generation. Only the result for the newest
/// generation is ever handed back; older ones are dropped on arrival, and
/// queued jobs superseded before they start are skipped.
pub struct RenderWorker {
    jobs: Option<Sender<Job>>,
    results: Receiver<(u64, PrintDocument)>,
    handle: Option<JoinHandle<()>>,
    submitted: u64,
}

impl RenderWorker {
    pub fn spawn(settings: PrintSettings, images: Arc<dyn ImageStore + Send + Sync>) -> Self {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (result_tx, result_rx) = mpsc::channel();
        let renderer = PrintRenderer::new(settings);

        let handle = thread::spawn(move || {
            while let Ok(mut job) = job_rx.recv() {
                // coalesce: only the newest queued job is worth doing
                while let Ok(newer) = job_rx.try_recv() {
                    job = newer;
                }
                let doc = renderer.render(&job.snapshot, images.as_ref());
                if result_tx.send((job.generation, doc)).is_err() {
                    break;
                }
            }
        });

        Self {
            jobs: Some(job_tx),
            results: result_rx,
            handle: Some(handle),
            submitted: 0,
        }
    }

    /// Queues a snapshot for layout and returns its generation.
    pub fn submit(&mut self, snapshot: Arc<DocumentSnapshot>) -> u64 {
        self.submitted += 1;
        let generation = self.submitted;
        if let Some(jobs) = &self.jobs
            && jobs.send(Job {
                generation,
                snapshot,
            })
            .is_err()
        {
            log::warn!("render worker has stopped; generation {generation} dropped");
        }
        generation
    }

    /// Newest submitted generation.
    pub fn generation(&self) -> u64 {
        self.submitted
    }

    /// Non-blocking: the result for the newest generation, if it has arrived.
    pub fn poll_latest(&mut self) -> Option<(u64, PrintDocument)> {
        let mut latest = None;
        while let Ok(result) = self.results.try_recv() {
            latest = self.keep_if_current(result).or(latest);
        }
        latest
    }

    /// Blocks until the newest generation's result arrives or `timeout` passes.
    pub fn wait_latest(&mut self, timeout: Duration) -> Option<(u64, PrintDocument)> {
        let deadline = Instant::now() + timeout;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.results.recv_timeout(left) {
                Ok(result) => {
                    if let Some(current) = self.keep_if_current(result) {
                        return Some(current);
                    }
                }
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    fn keep_if_current(&self, (generation, doc): (u64, PrintDocument)) -> Option<(u64, PrintDocument)> {
        if generation == self.submitted {
            Some((generation, doc))
        } else {
            log::debug!(
                "discarding stale print result {generation} (latest {})",
                self.submitted
            );
            None
        }
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        // closing the job channel ends the thread's loop
        self.jobs.take();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            log::warn!("render worker thread panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        io::images::NoImages,
        options::EngineOptions,
        render::print::layout::DrawOp,
    };

    fn snapshot(text: &str) -> Arc<DocumentSnapshot> {
        Arc::new(DocumentSnapshot::prepare(text, &EngineOptions::default()).unwrap())
    }

    fn first_text(doc: &PrintDocument) -> Option<String> {
        doc.pages[0].ops.iter().find_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
    }

    #[test]
    fn returns_only_the_newest_generation() {
        let mut worker = RenderWorker::spawn(PrintSettings::default(), Arc::new(NoImages));
        worker.submit(snapshot("old"));
        let newest = worker.submit(snapshot("new"));
        assert_eq!(newest, 2);

        let (generation, doc) = worker.wait_latest(Duration::from_secs(10)).unwrap();
        assert_eq!(generation, 2);
        assert_eq!(first_text(&doc).as_deref(), Some("new"));
        assert!(worker.poll_latest().is_none());
    }

    #[test]
    fn result_matches_synchronous_render() {
        let snap = snapshot("# Heading\n- [ ] item");
        let sync = PrintRenderer::new(PrintSettings::default()).render(&snap, &NoImages);
        let mut worker = RenderWorker::spawn(PrintSettings::default(), Arc::new(NoImages));
        worker.submit(snap);
        let (_, doc) = worker.wait_latest(Duration::from_secs(10)).unwrap();
        assert_eq!(doc, sync);
    }

    #[test]
    fn drop_joins_the_thread() {
        let mut worker = RenderWorker::spawn(PrintSettings::default(), Arc::new(NoImages));
        worker.submit(snapshot("x"));
        drop(worker);
    }
}
