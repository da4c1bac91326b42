//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes into `{dir}/{app}.log`,
//! keeping only the newest lines. Records emitted through the `log` facade
//! are bridged into the same file.

use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Lines kept before the oldest are dropped
pub const DEFAULT_MAX_LINES: usize = 2000;

/// File backing the installed subscriber
static LOG_FILE: OnceLock<Arc<RollingFile>> = OnceLock::new();

/// Log file keeping the newest `max_lines` lines.
///
/// Lines are appended; the file is rewritten with only the newest lines once
/// it reaches twice the capacity, so it never holds more than `2 * max_lines`.
#[derive(Debug)]
pub struct RollingFile {
    path: PathBuf,
    max_lines: usize,
    state: Mutex<RollingState>,
}

#[derive(Debug)]
struct RollingState {
    lines: VecDeque<String>,
    lines_on_disk: usize,
}

impl RollingFile {
    /// Open `path`, keeping its newest `max_lines` existing lines
    pub fn open(path: impl Into<PathBuf>, max_lines: usize) -> io::Result<Self> {
        let path = path.into();
        let max_lines = max_lines.max(1);
        let mut lines: VecDeque<String> = match fs::read_to_string(&path) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => VecDeque::new(),
            Err(e) => return Err(e),
        };
        while lines.len() > max_lines {
            lines.pop_front();
        }

        let file = Self {
            path,
            max_lines,
            state: Mutex::new(RollingState {
                lines,
                lines_on_disk: 0,
            }),
        };
        {
            let mut state = file.lock_state();
            file.compact(&mut state)?;
        }
        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line, compacting the file when it is full
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let line = line.trim_end_matches(['\r', '\n']);
        let mut state = self.lock_state();
        state.lines.push_back(line.to_string());
        while state.lines.len() > self.max_lines {
            state.lines.pop_front();
        }

        if state.lines_on_disk + 1 >= 2 * self.max_lines {
            return self.compact(&mut state);
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", line)?;
        state.lines_on_disk += 1;
        Ok(())
    }

    /// Snapshot of the newest lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lock_state().lines.iter().cloned().collect()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, RollingState> {
        // a panic while holding the lock only leaves a partially written line
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn compact(&self, state: &mut RollingState) -> io::Result<()> {
        let mut content = String::with_capacity(state.lines.iter().map(|l| l.len() + 1).sum());
        for line in &state.lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        state.lines_on_disk = state.lines.len();
        Ok(())
    }
}

/// Per-event writer handed out to the fmt layer
pub struct RollingWriter {
    file: Arc<RollingFile>,
    buf: Vec<u8>,
}

impl RollingWriter {
    pub fn new(file: Arc<RollingFile>) -> Self {
        Self {
            file,
            buf: Vec::new(),
        }
    }

    fn commit(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let text = String::from_utf8_lossy(&self.buf).into_owned();
        self.buf.clear();
        for line in text.lines() {
            self.file.append_line(line)?;
        }
        Ok(())
    }
}

impl Write for RollingWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.commit()
    }
}

impl Drop for RollingWriter {
    fn drop(&mut self) {
        let _ = self.commit();
    }
}

/// Local wall-clock timestamps
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the global logger writing to `{log_dir}/{app_name}.log`
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    init_logger_with_capacity(log_dir, app_name, DEFAULT_MAX_LINES)
}

pub fn init_logger_with_capacity(
    log_dir: PathBuf,
    app_name: &str,
    max_lines: usize,
) -> Result<(), String> {
    fs::create_dir_all(&log_dir)
        .map_err(|e| format!("Failed to create log dir {}: {}", log_dir.display(), e))?;

    let path = log_dir.join(format!("{}.log", app_name));
    let file = Arc::new(
        RollingFile::open(&path, max_lines)
            .map_err(|e| format!("Failed to open log file {}: {}", path.display(), e))?,
    );

    let writer_file = file.clone();
    tracing_subscriber::fmt()
        .with_writer(move || RollingWriter::new(writer_file.clone()))
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;
    let _ = LOG_FILE.set(file);

    log::info!("{} logger initialized at {}", app_name, path.display());
    Ok(())
}

/// Path of the active log file, if `init_logger` succeeded
pub fn log_path() -> Option<PathBuf> {
    LOG_FILE.get().map(|file| file.path().to_path_buf())
}

fn ensure_initialized() -> Result<(), String> {
    if LOG_FILE.get().is_some() {
        Ok(())
    } else {
        Err("Logger not initialized".to_string())
    }
}

/// Record `message` at info level; fails if no rolling file is installed
pub fn info(message: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn warn(message: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::warn!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::error!("{}", message);
    Ok(())
}
