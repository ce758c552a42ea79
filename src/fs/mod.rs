pub mod copy;
pub mod inspect;
pub mod mutate;
pub mod storage;

pub use copy::{copy_file, try_copy_file};
pub use inspect::{is_valid_file, parent_folder_name};
pub use mutate::{delete_file_if_exists, rename_file, try_delete_file, try_rename_file};
pub use storage::{is_external_storage_writable, MountProbe, StorageStateSource};
