pub mod event_reader;
pub mod state_writer;
