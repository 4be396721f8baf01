use battleship_hotseat::{init_logging, level_from_env};
use log::LevelFilter;

#[test]
fn test_level_defaults_to_warn() {
    assert_eq!(level_from_env(None), LevelFilter::Warn);
    assert_eq!(level_from_env(Some("loud")), LevelFilter::Warn);
}

#[test]
fn test_level_parsed_case_insensitive() {
    assert_eq!(level_from_env(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from_env(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(level_from_env(Some("off")), LevelFilter::Off);
}

#[test]
fn test_init_logging_twice_is_harmless() {
    init_logging();
    init_logging();
}
