use std::{
    io::{self, IsTerminal, Write},
    sync::mpsc::{self, Sender},
    thread::{self, JoinHandle},
    time::Duration,
};

use once_cell::sync::Lazy;

static FRAMES: Lazy<Vec<&str>> = Lazy::new(|| {
    vec![
        "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃", "▂",
    ]
});

const TICK: Duration = Duration::from_millis(100);

// A struct used for logging progress to the terminal with an animated spinner.
// Stays silent when stderr is not a terminal.
pub struct Logger {
    tx: Sender<()>,
    msg: &'static str,
    spinner: Option<JoinHandle<()>>,
}

impl Logger {
    pub fn start(msg: &'static str) -> Self {
        let (tx, rx) = mpsc::channel();

        let spinner = io::stderr().is_terminal().then(|| {
            thread::spawn(move || {
                let mut frames = FRAMES.iter().cycle();
                loop {
                    match rx.try_recv() {
                        Ok(_) | Err(mpsc::TryRecvError::Disconnected) => break,
                        Err(mpsc::TryRecvError::Empty) => {
                            let frame = frames.next().unwrap_or(&" ");
                            eprint!("\r[quickswitch]: {} {} ", msg, frame);
                            io::stderr().flush().unwrap_or_default();
                            thread::sleep(TICK);
                        }
                    }
                }
            })
        });

        Logger { tx, msg, spinner }
    }

    pub fn stop(&mut self, summary: &str) {
        let _ = self.tx.send(());

        if let Some(spinner) = self.spinner.take() {
            _ = spinner.join();
            eprintln!("\r\x1b[2K[quickswitch]: {}: {}", self.msg, summary);
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.tx.send(());
    }
}
