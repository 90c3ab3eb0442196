use crate::commands::{CmdMessage, CmdResult, TodoPaths};
use crate::error::Result;
use crate::store::{StorageBackend, TodoStore};

pub fn run<B: StorageBackend>(paths: &TodoPaths, store: &TodoStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_paths(vec![paths.data_dir.clone()]);
    if !store.persists() {
        result.add_message(CmdMessage::info(format!(
            "Persistence is off; changes to {} are not saved",
            store.backend().location()
        )));
    }
    Ok(result)
}
