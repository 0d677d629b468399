// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires these modules into the interactive poem converter.
//
// Module responsibilities:
// - `poem`: The JSON record, its file naming and the write/read helpers
//   for the archive's `static/poems` directory.
// - `ui`: The prompt flow (metadata, body, summary, repeat) behind the
//   `Prompter` trait, with a terminal and a plain stream implementation.
// - `config`: Fixed defaults (output directory, default category and
//   location, preview length).
// - `error`: The error type shared by the modules above.
pub mod config;
pub mod error;
pub mod poem;
pub mod ui;
