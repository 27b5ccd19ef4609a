pub mod environment;
pub mod paths;

pub use environment::ClaudePaths;
pub use paths::{encode_project_path, format_path_with_tilde, project_display_name, project_log_dir};
