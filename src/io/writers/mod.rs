//! Output writers: in-place image files for folder mode, multi-page PDFs for
//! archive mode, and the JPEG encoding used for PDF pages.
pub mod image;
pub mod jpeg;
pub mod pdf;

pub use self::image::write_in_place;
pub use pdf::write_pdf;
