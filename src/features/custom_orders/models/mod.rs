mod custom_order;

pub use custom_order::{CustomOrder, UploadedFileInfo};
