//! Core models for the Mars dashboards.
//!
//! - `gas` / `composition`: the fixed atmosphere dataset and its filtered chart projections
//! - `sol` / `timeline`: the InSight weather feed and per-sol navigation
//! - `selection`: selection-by-identity shared by both dashboards
//! - `render`: chart payloads and the `RenderSink` trait renderers implement

pub mod composition;
pub mod error;
pub mod feed;
pub mod gas;
pub mod render;
pub mod selection;
pub mod sol;
pub mod timeline;
