use crate::session::Session;
use crate::verse::{VerseRecord, VerseRequest};
use crate::{Error, Result, VerseSource};
use std::sync::mpsc::{self, Sender};
use std::thread;
use tokio::sync::oneshot;

enum Command {
    Fetch(VerseRequest, oneshot::Sender<Result<Vec<VerseRecord>>>),
    Close(oneshot::Sender<Result<()>>),
}

/// An async-friendly verse fetcher backed by a dedicated worker thread.
///
/// The worker thread owns a synchronous [`VerseSource`] and serves requests
/// sent from async tasks, so blocking HTTP clients never run on the async
/// executor and the source does not need to be `Send` once built.
#[derive(Clone)]
pub struct Fetcher {
    cmd_tx: Sender<Command>,
}

impl Fetcher {
    /// Spawn the worker and build the source on it with `init`.
    pub async fn new<S, F>(init: F) -> Result<Self>
    where
        S: VerseSource + 'static,
        F: FnOnce() -> Result<S> + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let (init_tx, init_rx): (oneshot::Sender<Result<()>>, oneshot::Receiver<Result<()>>) =
            oneshot::channel();

        thread::spawn(move || {
            // Build the source on the worker thread
            let source = match init() {
                Ok(s) => s,
                Err(err) => {
                    let _ = init_tx.send(Err(err));
                    return;
                }
            };

            let _ = init_tx.send(Ok(()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::Fetch(request, resp) => {
                        let res = source.fetch(&request);
                        let _ = resp.send(res);
                    }
                    Command::Close(resp) => {
                        let _ = resp.send(Ok(()));
                        break;
                    }
                }
            }
        });

        // Wait for the worker to report initialization success or failure
        let init_res = init_rx
            .await
            .map_err(|e| Error::Other(format!("Worker init canceled: {}", e)))?;
        init_res?;

        Ok(Self { cmd_tx })
    }

    /// Fetcher over the HTTP verse source
    #[cfg(feature = "http")]
    pub async fn http(config: crate::SessionConfig) -> Result<Self> {
        Self::new(move || crate::http::HttpVerseSource::new(config)).await
    }

    /// Fetch the verses for `request`
    pub async fn fetch(&self, request: &VerseRequest) -> Result<Vec<VerseRecord>> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Fetch(request.clone(), tx))
            .map_err(|_| Error::Other("Fetch worker has shut down".into()))?;
        rx.await
            .map_err(|e| Error::Other(format!("Fetch canceled: {}", e)))?
    }

    /// Shut down the worker thread
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Close(tx));
        rx.await
            .map_err(|e| Error::Other(format!("Close canceled: {}", e)))?
    }
}

/// Fetch the session's passage through `fetcher` and append its slides.
///
/// The session stays busy while the request is awaited; a second call on the
/// same session in that window is refused with [`Error::Busy`]. Dropping the
/// returned future before it completes abandons the fetch and leaves the
/// session ready for the next one.
pub async fn add_slides(session: &mut Session, fetcher: &Fetcher) -> Result<usize> {
    let request = session.begin_fetch()?;
    let mut guard = PendingFetch {
        session,
        finished: false,
    };
    let result = fetcher.fetch(&request).await;
    guard.finished = true;
    guard.session.finish_fetch(result)
}

/// Aborts the session's fetch if dropped before the answer arrived
struct PendingFetch<'a> {
    session: &'a mut Session,
    finished: bool,
}

impl Drop for PendingFetch<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.session.abort_fetch();
        }
    }
}
