mod spa;

pub use spa::{project_name, resolve_public_dir, router};
