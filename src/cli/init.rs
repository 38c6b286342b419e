use std::path::Path;

use serde_json::json;

use crate::db::connection;
use crate::output;

pub fn run(db: &Path, json_output: bool) -> i32 {
    match connection::open_db(db) {
        Ok(_) => {
            if json_output {
                output::json::print(&output::json::success(json!({
                    "path": db.to_string_lossy()
                })));
            } else {
                println!("Initialized task database at {}", db.display());
            }
            0
        }
        Err(e) => super::report(&e, json_output),
    }
}
