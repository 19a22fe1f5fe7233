mod line_writer;
mod table;

pub use line_writer::{LineWriter, StdoutLineWriter};
pub use table::{events_table, format_amount, format_date};
