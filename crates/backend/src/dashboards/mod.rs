//! Dashboard services
//!
//! Each dashboard has its own directory with the service logic that
//! fetches upstream data and reshapes it into the contracts DTOs.

pub mod d100_progress_board;
pub mod d101_design_tasks;
