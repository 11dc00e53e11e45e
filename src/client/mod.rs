//! Headless state for the two catalog screens: the public accordion and the passcode-gated admin
//! dashboard. Rendering is left to whatever front end drives these types

pub mod admin;
pub mod api;
pub mod auth;
pub mod catalog_tree;
pub mod forms;
pub mod list_state;
pub mod notification;
pub mod shell;

#[cfg(test)]
mod tests;
