pub mod alarm_text;
pub mod handler;

pub use alarm_text::parse_alarm;
pub use handler::handle_key;
