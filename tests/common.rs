#![allow(dead_code)]
use chrono::{DateTime, Local, NaiveDateTime};
use fleetlog::Fleet;
use fleetlog::store::Store;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Create a unique test store path inside the system temp dir and remove
/// any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fleetlog.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Open a fleet on a fresh store: demo registry and default admin seeded
pub fn open_seeded(name: &str) -> Fleet {
    Fleet::open(Store::new(setup_test_store(name))).expect("open fleet")
}

/// Open a fleet whose store file exists but is empty: no demo vehicles,
/// only the default admin account
pub fn open_blank(name: &str) -> Fleet {
    let path = setup_test_store(name);
    fs::write(&path, "{}").expect("write blank store");
    Fleet::open(Store::new(path)).expect("open fleet")
}

/// Parse "YYYY-MM-DD HH:MM:SS" as a local timestamp
pub fn ts(s: &str) -> DateTime<Local> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .expect("parse timestamp")
        .and_local_timezone(Local)
        .unwrap()
}
