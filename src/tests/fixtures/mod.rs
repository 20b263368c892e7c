pub mod expenses;
pub mod state;
