use super::json::{load_from_file, save_to_file, save_to_file_pretty};
use crate::error::ErrorType;
use crate::utils::test_util::{init, waypoints, Init};
use crate::waypoint::Waypoint;

use rstest::rstest;
use std::fs;

#[rstest]
fn save_and_load(_init: Init, #[values(false, true)] pretty: bool) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("waypoints.json");
    let input = waypoints(&[(1, 53.32, 18.45), (2, 53.33, 18.44)]);

    if pretty {
        save_to_file_pretty(&input, &path).unwrap();
    } else {
        save_to_file(&input, &path).unwrap();
    }

    let loaded: Vec<Waypoint> = load_from_file(&path).unwrap();
    assert_eq!(loaded, input);
}

#[rstest]
fn load_frontend_markers(_init: Init) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("markers.json");
    fs::write(
        &path,
        r#"[{"id":1718000000000,"position":{"lat":53.3,"lng":18.4}},
           {"id":"home","position":{"lat":53.4,"lng":18.5}}]"#,
    )
    .unwrap();

    let loaded: Vec<Waypoint> = load_from_file(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id.to_string(), "1718000000000");
    assert_eq!(loaded[1].id.to_string(), "home");
}

#[rstest]
fn load_missing_file(_init: Init) {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_file::<Vec<Waypoint>, _>(dir.path().join("nope"))
        .unwrap_err();
    assert_eq!(err.get_type(), ErrorType::IoError);
}

#[rstest]
fn load_malformed_file(_init: Init) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"[{"id":1,"position":{"lat":"x"}}]"#).unwrap();
    let err = load_from_file::<Vec<Waypoint>, _>(&path).unwrap_err();
    assert_eq!(err.get_type(), ErrorType::FormatError);
}
