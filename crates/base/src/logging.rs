use {
    crate::clock::{format_date, format_timestamp},
    log::{LevelFilter, Log, Metadata, Record},
    std::{
        fs::{File, OpenOptions, create_dir_all},
        io::Write,
        path::PathBuf,
        sync::Mutex,
        time::SystemTime,
    },
};

fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} [{}] {}:{} - {}",
        format_timestamp(SystemTime::now()),
        record.level(),
        record.target(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

/// Writes every record to stdout.
pub struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", format_record(record));
        }
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

struct FileLoggerState {
    dir: PathBuf,
    current_date: String,
    file: File,
}

/// Writes records to `<dir>/vla-YYYY-MM-DD.log`, rolling over at midnight UTC.
pub struct FileLogger {
    state: Mutex<FileLoggerState>,
}

fn open_day_file(dir: &PathBuf, date: &str) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("vla-{}.log", date)))
}

impl FileLogger {
    pub fn new(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        create_dir_all(&dir)?;
        let current_date = format_date(SystemTime::now());
        let file = open_day_file(&dir, &current_date)?;
        Ok(Self {
            state: Mutex::new(FileLoggerState {
                dir,
                current_date,
                file,
            }),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let today = format_date(SystemTime::now());
        if today != state.current_date {
            match open_day_file(&state.dir, &today) {
                Ok(file) => {
                    state.file = file;
                    state.current_date = today;
                }
                Err(error) => eprintln!("failed to roll over log file: {}", error),
            }
        }
        let line = format_record(record);
        if let Err(error) = writeln!(state.file, "{}", line) {
            eprintln!("failed to write log file: {}", error);
            eprintln!("{}", line);
        }
    }

    fn flush(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.file.flush().ok();
    }
}

/// Install `StdoutLogger` as the global logger.
///
/// Only the first installation wins; later calls are ignored.
pub fn init_stdout_logger(level: LevelFilter) {
    static LOGGER: StdoutLogger = StdoutLogger;
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Install a `FileLogger` writing into `dir` as the global logger.
pub fn init_file_logger(dir: impl Into<PathBuf>, level: LevelFilter) -> anyhow::Result<()> {
    let logger = FileLogger::new(dir)?;
    // set_logger needs a &'static; leaking once per process is fine
    if log::set_logger(Box::leak(Box::new(logger))).is_ok() {
        log::set_max_level(level);
    }
    Ok(())
}

/// Parse a level name such as `debug` or `WARN`, falling back to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}
