pub mod display_name;

pub use display_name::{
    readable_file_name, DisplayNameResolver, NoResolver, ResolveWith, CONTENT_SCHEME,
};
