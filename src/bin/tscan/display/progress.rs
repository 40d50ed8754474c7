use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

pub struct FileBar {
    bar: ProgressBar,
    start: Instant,
}

impl FileBar {
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("  {spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("━╸ ")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(80));
        Self {
            bar,
            start: Instant::now(),
        }
    }

    pub fn start_item(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    pub fn finish_item(&self) {
        self.bar.inc(1);
    }

    /// Logs through the bar so lines do not tear the progress display.
    pub fn println(&self, line: &str) {
        self.bar.println(line);
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
        print_footer(self.start.elapsed());
    }
}

fn print_footer(elapsed: Duration) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(
        stderr,
        "  \x1b[2m╺━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╸\x1b[0m"
    );
    let _ = writeln!(stderr);
    let _ = writeln!(
        stderr,
        "  \x1b[32m✓\x1b[0m Scan complete {:>36}",
        format!("Total: {:.2}s", elapsed.as_secs_f64())
    );
    let _ = writeln!(stderr);
}

pub enum Progress {
    Interactive(FileBar),
    Silent,
}

impl Progress {
    pub fn new(interactive: bool, total: usize) -> Self {
        if interactive {
            Self::Interactive(FileBar::new(total as u64))
        } else {
            Self::Silent
        }
    }

    pub fn start_item(&self, name: &str) {
        if let Self::Interactive(bar) = self {
            bar.start_item(name);
        }
    }

    pub fn finish_item(&self) {
        if let Self::Interactive(bar) = self {
            bar.finish_item();
        }
    }

    /// Reports a skipped item: above the bar when interactive, as a log
    /// record otherwise.
    pub fn skipped(&self, name: &str, reason: &str) {
        match self {
            Self::Interactive(bar) => {
                bar.println(&format!("  \x1b[33m!\x1b[0m skipped {name}: {reason}"));
            }
            Self::Silent => log::warn!("skipping {name}: {reason}"),
        }
    }

    pub fn finish(self) {
        match self {
            Self::Interactive(bar) => bar.finish(),
            Self::Silent => {}
        }
    }
}
