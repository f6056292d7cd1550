//! Multi-page PDF assembly: one page per image, sized to the image at 72 dpi,
//! each page carrying its image as a JPEG (DCTDecode) XObject.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{DynamicImage, GenericImageView};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::io::writers::jpeg::{encode_gray_jpeg, encode_rgb_jpeg};

/// JPEG quality used for embedded pages.
pub const PAGE_JPEG_QUALITY: u8 = 90;

/// Write `images` as the pages of a new PDF at `output`, first image on page 1.
///
/// An empty slice is an [`Error::EmptyResultSet`]; nothing is created on disk then.
pub fn write_pdf(images: &[DynamicImage], output: &Path) -> Result<()> {
    if images.is_empty() {
        return Err(Error::EmptyResultSet {
            path: output.to_path_buf(),
        });
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::with_capacity(images.len());
    for image in images {
        let page_id = add_page(&mut doc, pages_id, image)?;
        kids.push(Object::from(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut writer = BufWriter::new(File::create(output)?);
    doc.save_to(&mut writer).map_err(Error::pdf)?;
    writer.flush()?;

    info!("Wrote {} page(s) to {:?}", count, output);
    Ok(())
}

fn add_page(doc: &mut Document, pages_id: ObjectId, image: &DynamicImage) -> Result<ObjectId> {
    let (cols, rows) = image.dimensions();
    let (data, color_space) = match image {
        DynamicImage::ImageLuma8(gray) => (
            encode_gray_jpeg(cols, rows, gray.as_raw(), PAGE_JPEG_QUALITY)?,
            "DeviceGray",
        ),
        other => {
            let rgb = other.to_rgb8();
            (
                encode_rgb_jpeg(cols, rows, rgb.as_raw(), PAGE_JPEG_QUALITY)?,
                "DeviceRGB",
            )
        }
    };
    debug!("Page {}x{} {} ({} bytes)", cols, rows, color_space, data.len());

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => cols as i64,
            "Height" => rows as i64,
            "ColorSpace" => color_space,
            "BitsPerComponent" => 8_i64,
            "Filter" => "DCTDecode",
        },
        data,
    ));

    let (w, h) = (Object::Integer(cols as i64), Object::Integer(rows as i64));
    let zero = || Object::Integer(0);
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new("cm", vec![w.clone(), zero(), zero(), h.clone(), zero(), zero()]),
            Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().map_err(Error::pdf)?,
    ));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![zero(), zero(), w, h],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                "Im0" => image_id,
            },
        },
    }))
}
