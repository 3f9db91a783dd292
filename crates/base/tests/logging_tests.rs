use {
    base::{FileLogger, StdoutLogger, format_date, parse_level},
    log::{LevelFilter, Log},
    std::{fs, time::SystemTime},
};

fn record_with(message: std::fmt::Arguments<'_>, f: impl FnOnce(&log::Record)) {
    let record = log::RecordBuilder::new()
        .level(log::Level::Error)
        .target("logging_tests")
        .file(Some("logging_tests.rs"))
        .line(Some(7))
        .args(message)
        .build();
    f(&record);
}

#[test]
fn test_stdout_logger_does_not_panic() {
    record_with(format_args!("hello"), |record| {
        StdoutLogger.log(record);
        StdoutLogger.flush();
    });
}

#[test]
fn test_file_logger_writes_day_file() {
    let dir = std::env::temp_dir().join(format!("vla-log-test-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let logger = FileLogger::new(&dir).expect("failed to create FileLogger");
    log::set_max_level(LevelFilter::Trace);
    record_with(format_args!("vehicle not connected"), |record| logger.log(record));
    logger.flush();

    let path = dir.join(format!("vla-{}.log", format_date(SystemTime::now())));
    let content = fs::read_to_string(&path).expect("log file missing");
    assert!(content.contains("vehicle not connected"));
    assert!(content.contains("ERROR"));
    assert!(content.contains("logging_tests.rs:7"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_parse_level() {
    assert_eq!(parse_level("debug"), LevelFilter::Debug);
    assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
    assert_eq!(parse_level("nonsense"), LevelFilter::Info);
}
