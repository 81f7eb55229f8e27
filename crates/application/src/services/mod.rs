mod record_formatter;

pub use record_formatter::RecordFormatter;
