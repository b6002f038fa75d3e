// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires the modules together.
//
// Module responsibilities:
// - `title`: fetches a page and extracts its `<title>` text.
// - `api`: the shortening-service client (request/response structs and
//   the POST call).
// - `profile`: the local credential store and the `CredentialProvider`
//   trait the shortener client consumes.
// - `ui`: the terminal flow that sequences the two operations and
//   prints the result line.
pub mod api;
pub mod profile;
pub mod title;
pub mod ui;
