//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use product_dashboard::api::{PageResult, Record};
use product_dashboard::config::Config;
use product_dashboard::ui::app::{App, UiCommand};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Default config pointed at `base_url`.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.connect_timeout_seconds = 2;
    config
}

// -- Data helpers -------------------------------------------------------------

pub fn product(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Product {id}"),
        "category": "beauty",
        "price": 9.99,
        "brand": "Essence",
        "rating": 4.2,
    })
}

pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

/// Response body for one page of `count` products starting at `skip`.
pub fn page_body(count: u64, total: u64, skip: u64, limit: u64) -> String {
    let products: Vec<Value> = (skip + 1..=skip + count).map(product).collect();
    json!({ "products": products, "total": total, "skip": skip, "limit": limit }).to_string()
}

pub fn page(count: u64, total: u64, skip: u64) -> PageResult {
    PageResult {
        items: (skip + 1..=skip + count).map(|id| record(product(id))).collect(),
        total,
        skip,
        limit: 12,
    }
}

// -- App helpers --------------------------------------------------------------

/// App with default config and a command channel the test can drain.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let mut app = App::new(&Config::default());
    let (tx, rx) = mpsc::channel(32);
    app.attach_commands(tx);
    (app, rx)
}

/// All commands queued so far.
pub fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}
