use std::sync::{
    mpsc::{self, Receiver, TryRecvError},
    Arc,
};

use anyhow::anyhow;

use crate::{chat::ChatState, SwitcherError};

use super::{
    builder::{spawn_build, BuildHandle, IndexEvent},
    Index, Matches,
};

// Surfaces fatal build errors to the user.
pub trait ErrorReporter {
    fn report(&self, err: &SwitcherError);
}

impl<F: Fn(&SwitcherError)> ErrorReporter for F {
    fn report(&self, err: &SwitcherError) {
        self(err)
    }
}

type Done = Box<dyn FnOnce(&mut Index)>;

// An update waiting for its build to finish.
struct PendingUpdate {
    rx: Receiver<IndexEvent>,
    done: Done,
    _handle: BuildHandle,
}

// The popup controller. Owns the index and applies builds on the thread
// that owns it.
pub struct QuickSwitcher<S: ?Sized> {
    state: Arc<S>,
    index: Index,
    reporter: Box<dyn ErrorReporter>,
    // Whether guild channels are fetched one guild at a time.
    sequential: bool,
    pending: Option<PendingUpdate>,
}

impl<S: ChatState + ?Sized + 'static> QuickSwitcher<S> {
    pub fn new<R: ErrorReporter + 'static>(state: Arc<S>, reporter: R) -> Self {
        Self {
            state,
            index: Index::new(),
            reporter: Box::new(reporter),
            sequential: false,
            pending: None,
        }
    }

    pub fn sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }

    // Rebuilds the index in the background. `done` runs on this thread once
    // the outcome is applied by `poll` or `wait`, after a failure too. A newer
    // update, `cancel` or dropping the switcher discards `done` unrun.
    pub fn update<F>(&mut self, done: F)
    where
        F: FnOnce(&mut Index) + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_build(self.state.clone(), self.sequential, tx);

        self.pending = Some(PendingUpdate {
            rx,
            done: Box::new(done),
            _handle: handle,
        });
    }

    pub fn is_updating(&self) -> bool {
        self.pending.is_some()
    }

    // Applies a finished build, if any. Returns whether one was applied.
    pub fn poll(&mut self) -> bool {
        let event = match self.pending.as_ref().map(|pending| pending.rx.try_recv()) {
            Some(Ok(event)) => Some(event),
            Some(Err(TryRecvError::Disconnected)) => None,
            Some(Err(TryRecvError::Empty)) | None => return false,
        };

        self.finish(event);
        true
    }

    // Blocks until the pending update, if any, is applied.
    pub fn wait(&mut self) {
        if let Some(pending) = &self.pending {
            let event = pending.rx.recv().ok();
            self.finish(event);
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn search(&mut self, query: &str) -> Matches<'_> {
        self.index.search(query)
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    fn finish(&mut self, event: Option<IndexEvent>) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        match event {
            Some(IndexEvent::Built(items)) => self.index.replace(items),
            Some(IndexEvent::Failed(err)) => self.reporter.report(&err),
            None => self
                .reporter
                .report(&anyhow!("Index build stopped unexpectedly")),
        }

        (pending.done)(&mut self.index);
    }
}
