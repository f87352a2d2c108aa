pub mod call_sequence;
pub mod dispatch;
pub mod jump_table;
pub mod program;
pub mod recursion;
