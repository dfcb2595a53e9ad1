// src/ui/mod.rs
pub mod dialog;
pub mod json_tree;
pub mod results;
pub mod section;
pub mod upload;

pub use results::DownloadRequest;
pub use upload::UploadAction;
