//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use casekit::config::Config;
use casekit::messages::Msg;
use casekit::model::AppModel;
use casekit::runtime::{Effects, MemoryClipboard, Session};
use casekit::update::update;

/// Create a test model seeded with `text` and default config
pub fn test_model(text: &str) -> AppModel {
    AppModel::with_text(Config::default(), text)
}

/// Create a test model with a specific history limit
pub fn test_model_with_limit(text: &str, history_limit: usize) -> AppModel {
    let config = Config {
        history_limit,
        ..Config::default()
    };
    AppModel::with_text(config, text)
}

/// Run a sequence of messages through `update`, discarding commands
pub fn run_all(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) {
    for msg in msgs {
        update(model, msg);
    }
}

/// Create a session backed by an in-memory clipboard
pub fn test_session(model: AppModel) -> Session<MemoryClipboard> {
    Session::new(model, Effects::new(MemoryClipboard::default()))
}

/// Feed `script` to a session and return everything it printed
pub fn run_script(session: &mut Session<MemoryClipboard>, script: &str) -> String {
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}
