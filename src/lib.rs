#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown
)]

pub mod app;
pub mod cli;
pub mod events;
pub mod expansion;
pub mod incident;
pub mod input;
pub mod projector;
pub mod seed;
pub mod store;
pub mod tui;
pub mod validator;
