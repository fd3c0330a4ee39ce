// Library root
// -----------
// This crate exposes a small library surface for the console app. The
// binary (`main.rs`) parses the command line and hands a terminal console
// to the navigator in `ui`.
//
// Module responsibilities:
// - `cli`: command-line surface (subcommands, version, logging flags).
// - `console`: the prompt/output seam. `TerminalConsole` talks to the real
//   terminal; `ScriptedConsole` replays canned answers for tests.
// - `ui`: the menu navigator and its screens.
// - `files`, `calc`, `system`: the work behind each menu choice.
//
// Keeping the handlers behind the `Console` trait lets the whole menu flow
// run without a terminal attached.
pub mod calc;
pub mod cli;
pub mod console;
pub mod files;
pub mod system;
pub mod ui;
