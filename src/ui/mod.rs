mod output;

pub use output::{display_reply, log_verbose};
