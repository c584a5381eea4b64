mod session;
mod view;

pub use view::UploadView;
