use tagdesk::config::LoggingConfig;
use tagdesk::constants::LOG_BUFFER_CAPACITY;
use tagdesk::logger::{self, Logger};

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].contains("second"));
    assert!(logs[1].contains("first"));
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from clone".to_string());

    assert_eq!(logger.get_logs().len(), 1);
    logger.clear();
    assert!(clone.get_logs().is_empty());
}

#[test]
fn test_buffer_is_capped() {
    let logger = Logger::new();
    for i in 0..LOG_BUFFER_CAPACITY + 5 {
        logger.log(format!("entry {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), LOG_BUFFER_CAPACITY);
    assert!(logs[0].contains(&format!("entry {}", LOG_BUFFER_CAPACITY + 4)));
    assert!(!logs.iter().any(|line| line.ends_with("] entry 0")));
}

#[test]
fn test_file_logging_disabled() {
    let result = logger::setup_file_logging(&LoggingConfig { enabled: false }).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_file_logging_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("tagdesk.log");

    logger::init_file_logging(&path).unwrap();
    log::info!("file logging test");

    assert!(path.exists());
}

#[test]
fn test_entries_use_local_time() {
    let logger = Logger::new();
    let before = chrono::Local::now().time();
    logger.log("timestamped".to_string());
    let after = chrono::Local::now().time();

    let entry = &logger.get_logs()[0];
    let stamp = &entry[1..entry.find(']').unwrap()];
    let logged = chrono::NaiveTime::parse_from_str(stamp, "%H:%M:%S%.3f").unwrap();

    // Millisecond truncation can put the entry just before `before`
    let tolerance = chrono::Duration::milliseconds(1);
    assert!(logged + tolerance >= before && logged <= after, "{stamp} not in {before}..{after}");
}
