//! Test helpers for writing rank requests into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Create a temporary directory and a request path inside it.
pub(super) fn request_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let request_path = root.join("request.json");
    (tmp, request_path)
}

/// Three equally available workers listed out of order against a
/// Monday 09:00 pattern, plus one worker with no availability.
pub(super) fn workers_request() -> Value {
    let monday_high = json!([{ "slot": { "day": 0, "hour": 9 }, "priority": "high" }]);
    json!({
        "mode": "workers_for_pattern",
        "pattern": [{ "day": 0, "hour": 9 }],
        "workers": [
            { "id": "b", "availability": monday_high },
            { "id": "idle", "availability": [] },
            { "id": "a", "availability": monday_high },
            { "id": "c", "availability": monday_high },
        ],
    })
}

/// One worker with a normal Monday 09:00 slot against three patterns.
pub(super) fn patterns_request() -> Value {
    json!({
        "mode": "patterns_for_worker",
        "availability": [{ "slot": { "day": 0, "hour": 9 }, "priority": "normal" }],
        "patterns": [
            { "id": "split", "slots": [{ "day": 0, "hour": 9 }, { "day": 1, "hour": 10 }] },
            { "id": "exact", "slots": [{ "day": 0, "hour": 9 }] },
            { "id": "miss", "slots": [{ "day": 6, "hour": 23 }] },
        ],
    })
}

/// Serialise `request` into `path`.
pub(super) fn write_request(path: &Utf8Path, request: &Value) {
    let payload = serde_json::to_vec_pretty(request).expect("serialise request");
    write_utf8(path, &payload);
}
