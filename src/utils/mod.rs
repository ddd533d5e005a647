pub(crate) mod debug;
pub(crate) mod path;

pub(crate) use debug::{debug_enabled, debug_log, set_debug};
pub(crate) use path::{absolutize, default_name, to_slash};
