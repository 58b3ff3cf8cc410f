mod import;
mod new_round;
mod status;

pub use import::{cmd_import, read_records};
pub use new_round::cmd_new_round;
pub use status::cmd_status;
