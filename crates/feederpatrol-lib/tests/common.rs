#![allow(dead_code)]

use std::path::PathBuf;

use feederpatrol_lib::{load_graph, LoadedGraph};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn load_fixture(name: &str) -> LoadedGraph {
    load_graph(&fixtures_dir().join(name)).expect("fixture table loads")
}
