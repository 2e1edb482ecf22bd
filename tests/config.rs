use camino::Utf8PathBuf;
use campusmap::config::MapConfig;
use campusmap::geometry::Vec2f;
use std::fs;

#[test]
fn defaults_match_map_screen() {
    let cfg = MapConfig::default();
    assert_eq!(cfg.vertical_lift, 60.0);
    assert_eq!(cfg.vote_step, 10);
    assert_eq!(cfg.default_available_votes, 100);
    assert!(cfg.clamp_popup);
    assert!(cfg.effective_hit_diameter() >= 24.0);
}

#[test]
fn partial_file_keeps_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("map.json");
    fs::write(&path, r#"{ "vertical_lift": 72.0, "popup_size": { "x": 200.0, "y": 120.0 }, "default_available_votes": 70 }"#).unwrap();
    let path = Utf8PathBuf::from_path_buf(path).unwrap();
    let cfg = MapConfig::load(&path).unwrap();
    assert_eq!(cfg.vertical_lift, 72.0);
    assert_eq!(cfg.popup_size, Vec2f::new(200.0, 120.0));
    assert_eq!(cfg.default_available_votes, 70);
    assert_eq!(cfg.edge_margin, MapConfig::default().edge_margin);
}

#[test]
fn bad_files_report_errors() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ vertical_lift: ").unwrap();
    let path = Utf8PathBuf::from_path_buf(path).unwrap();
    let err = MapConfig::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Parse config"));

    let missing = Utf8PathBuf::from_path_buf(temp_dir.path().join("nope.json")).unwrap();
    assert!(MapConfig::load(&missing).is_err());
    assert_eq!(MapConfig::load_or_default(None).unwrap(), MapConfig::default());
}
