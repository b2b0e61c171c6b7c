pub mod d100_progress_board;
pub mod d101_design_tasks;
