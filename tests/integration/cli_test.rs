use clap::error::ErrorKind;
use std::path::PathBuf;
use treetop::commands::build_cli;

#[test]
fn test_cli_config_and_delay() {
    let matches = build_cli()
        .try_get_matches_from(["treetop", "watch.conf", "-d", "3"])
        .unwrap();
    assert_eq!(
        matches.get_one::<PathBuf>("config"),
        Some(&PathBuf::from("watch.conf"))
    );
    assert_eq!(matches.get_one::<u64>("delay"), Some(&3));
}

#[test]
fn test_cli_delay_is_optional() {
    let matches = build_cli()
        .try_get_matches_from(["treetop", "watch.conf"])
        .unwrap();
    assert!(matches.get_one::<u64>("delay").is_none());
}

#[test]
fn test_cli_requires_config() {
    let err = build_cli().try_get_matches_from(["treetop"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_cli_rejects_bad_delay() {
    for bad in ["-1", "soon"] {
        let result = build_cli().try_get_matches_from(["treetop", "watch.conf", "-d", bad]);
        assert!(result.is_err(), "delay {:?} should be rejected", bad);
    }
}

#[test]
fn test_cli_help() {
    let err = build_cli()
        .try_get_matches_from(["treetop", "-h"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}
