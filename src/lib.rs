pub mod disk;
pub mod transfer_planner;
pub mod peg_board;
pub mod disk_input;
pub mod stack_generator;
