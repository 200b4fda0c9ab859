use std::io;
use std::path::Path;

use serde::Serialize;

/// A single progress sample, written after every controller iteration when
/// a worker integration wants a cheap external status check.
#[derive(Debug, Clone, Serialize)]
pub struct HeartbeatEntry {
    pub iter: u32,
    pub objective: f64,
    pub n_columns: usize,
    pub reduced_cost: f64,
    pub total_weight: f64,
}

/// Write `entry` to `path` atomically: serialize to a sibling `.tmp` file,
/// then rename over the destination, so a concurrent reader never observes
/// a half-written heartbeat.
pub fn write_heartbeat(path: impl AsRef<Path>, entry: &HeartbeatEntry) -> io::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string(entry).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let tmp_path = path.with_extension("tmp");
    std::fs::write(&tmp_path, json)?;
    std::fs::rename(&tmp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_replaces_the_heartbeat_file() {
        let dir = std::env::temp_dir().join(format!("bz-io-heartbeat-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("heartbeat.json");

        let entry = HeartbeatEntry {
            iter: 3,
            objective: 12.5,
            n_columns: 4,
            reduced_cost: -0.5,
            total_weight: 9.0,
        };
        write_heartbeat(&path, &entry).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"iter\":3"));

        let updated = HeartbeatEntry { iter: 4, ..entry };
        write_heartbeat(&path, &updated).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"iter\":4"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
