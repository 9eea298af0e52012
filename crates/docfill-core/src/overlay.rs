//! Apply the placement table to a template document
//!
//! The template is parsed fresh from bytes on every call, stamped, and
//! serialized back out. Page structure is never altered; each touched
//! page gets its existing content wrapped in `q`/`Q` and an appended text
//! block drawn in the default coordinate space.

use std::collections::BTreeMap;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

use crate::error::FillError;
use crate::fields::DocumentFields;
use crate::rules::{placements_for_page_count, Placement};

/// Resource name under which the overlay font is registered on each page.
const FONT_RESOURCE: &str = "DfHelv";

/// Fill the template with the given field values.
///
/// Placements whose page exists are applied; a 1-page template passes
/// through untouched but still round-trips the serializer. Any failure
/// returns `Err` with nothing partially produced.
pub fn fill_template(template: &[u8], fields: &DocumentFields) -> Result<Vec<u8>, FillError> {
    let mut doc = Document::load_mem(template).map_err(|e| FillError::Parse(e.to_string()))?;

    let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
    if pages.is_empty() {
        return Err(FillError::NoPages);
    }

    // One appended content stream per stamped page
    let mut by_page: BTreeMap<u32, Vec<&Placement>> = BTreeMap::new();
    for placement in placements_for_page_count(pages.len()) {
        by_page
            .entry(placement.page_index)
            .or_default()
            .push(placement);
    }

    if by_page.is_empty() {
        return serialize(doc);
    }

    // Helvetica is one of the standard 14; no embedding required.
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    for (page_index, stamps) in by_page {
        let page_id = *pages
            .get(page_index as usize)
            .ok_or(FillError::MissingPage(page_index))?;
        let height = page_height(&doc, page_id)?;

        let mut operations = Vec::new();
        for placement in stamps {
            operations.extend(text_block(placement, fields.value(placement.field), height));
        }
        let encoded = Content { operations }
            .encode()
            .map_err(|e| FillError::Serialize(e.to_string()))?;

        append_overlay(&mut doc, page_id, &encoded)?;
        ensure_font_resource(&mut doc, page_id, font_id)?;
    }

    serialize(doc)
}

/// Operators for one placement: position from the top of the owning page.
fn text_block(placement: &Placement, value: &str, page_height: f64) -> Vec<Operation> {
    let y = page_height - placement.y_from_top;
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                FONT_RESOURCE.into(),
                Object::Real(placement.font_size as f32),
            ],
        ),
        Operation::new(
            "rg",
            vec![
                Object::Real(placement.color.r),
                Object::Real(placement.color.g),
                Object::Real(placement.color.b),
            ],
        ),
        Operation::new(
            "Td",
            vec![Object::Real(placement.x as f32), Object::Real(y as f32)],
        ),
        Operation::new("Tj", vec![Object::string_literal(value)]),
        Operation::new("ET", vec![]),
    ]
}

fn serialize(mut doc: Document) -> Result<Vec<u8>, FillError> {
    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| FillError::Serialize(e.to_string()))?;
    Ok(out)
}

fn page_dict<'a>(doc: &'a Document, page_id: ObjectId) -> Result<&'a Dictionary, FillError> {
    doc.get_object(page_id)
        .and_then(|obj| obj.as_dict())
        .map_err(|e| FillError::Parse(e.to_string()))
}

/// Page height from the MediaBox (or CropBox), following the `Parent`
/// inheritance chain. Pages may differ in size, so this is resolved per
/// stamped page.
fn page_height(doc: &Document, page_id: ObjectId) -> Result<f64, FillError> {
    let media_box = inherited_media_box(doc, page_id)?;
    if media_box.len() < 4 {
        return Err(FillError::MediaBox("expected four entries".to_string()));
    }
    let y1 = numeric(&media_box[1])?;
    let y2 = numeric(&media_box[3])?;
    Ok(y2 - y1)
}

fn numeric(obj: &Object) -> Result<f64, FillError> {
    match obj {
        Object::Integer(v) => Ok(*v as f64),
        Object::Real(v) => Ok(*v as f64),
        other => Err(FillError::MediaBox(format!(
            "non-numeric bound: {:?}",
            other
        ))),
    }
}

fn inherited_media_box(doc: &Document, page_id: ObjectId) -> Result<Vec<Object>, FillError> {
    let mut current = page_id;
    // Parent chains are shallow; the cap guards against reference cycles
    for _ in 0..10 {
        let dict = doc
            .get_object(current)
            .and_then(|obj| obj.as_dict())
            .map_err(|e| FillError::MediaBox(e.to_string()))?;

        if let Ok(found) = dict.get(b"MediaBox").or_else(|_| dict.get(b"CropBox")) {
            return match found {
                Object::Array(entries) => Ok(entries.clone()),
                Object::Reference(id) => doc
                    .get_object(*id)
                    .and_then(|obj| obj.as_array())
                    .map(|entries| entries.clone())
                    .map_err(|e| FillError::MediaBox(e.to_string())),
                _ => Err(FillError::MediaBox("not an array".to_string())),
            };
        }

        match dict.get(b"Parent") {
            Ok(Object::Reference(parent)) => current = *parent,
            _ => break,
        }
    }
    Err(FillError::MediaBox(
        "no MediaBox on page or ancestors".to_string(),
    ))
}

/// Collect a page's current content bytes, decompressing and
/// concatenating stream arrays as needed.
fn existing_content(doc: &Document, page_id: ObjectId) -> Result<Vec<u8>, FillError> {
    fn push(out: &mut Vec<u8>, stream: &Stream) {
        let data = stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone());
        out.extend_from_slice(&data);
    }

    let dict = page_dict(doc, page_id)?;
    let mut combined = Vec::new();
    match dict.get(b"Contents") {
        Ok(Object::Stream(stream)) => push(&mut combined, stream),
        Ok(Object::Reference(id)) => {
            if let Ok(Object::Stream(stream)) = doc.get_object(*id) {
                push(&mut combined, stream);
            }
        }
        Ok(Object::Array(parts)) => {
            for part in parts {
                match part {
                    Object::Reference(id) => {
                        if let Ok(Object::Stream(stream)) = doc.get_object(*id) {
                            push(&mut combined, stream);
                        }
                    }
                    Object::Stream(stream) => push(&mut combined, stream),
                    _ => {}
                }
            }
        }
        _ => {}
    }
    Ok(combined)
}

/// Replace the page's content with `q <existing> Q <overlay>` so whatever
/// transform the template's own stream leaves active cannot displace the
/// stamped text.
fn append_overlay(doc: &mut Document, page_id: ObjectId, overlay: &[u8]) -> Result<(), FillError> {
    let existing = existing_content(doc, page_id)?;

    let mut merged = Vec::with_capacity(existing.len() + overlay.len() + 6);
    merged.extend_from_slice(b"q\n");
    merged.extend_from_slice(&existing);
    merged.extend_from_slice(b"\nQ\n");
    merged.extend_from_slice(overlay);

    let stream_id = doc.add_object(Stream::new(Dictionary::new(), merged));
    let page = doc
        .get_object_mut(page_id)
        .and_then(|obj| obj.as_dict_mut())
        .map_err(|e| FillError::Parse(e.to_string()))?;
    page.set("Contents", Object::Reference(stream_id));
    Ok(())
}

/// Where the overlay font reference needs to land for a given page.
enum FontTarget {
    /// Page's Resources and Font are both indirect; mutate the font dict
    FontDict(ObjectId),
    /// Resources is indirect with no usable Font entry
    Resources(ObjectId),
    /// Resources is inline on the page dict (or absent)
    Page,
}

fn ensure_font_resource(
    doc: &mut Document,
    page_id: ObjectId,
    font_id: ObjectId,
) -> Result<(), FillError> {
    let target = {
        let page = page_dict(doc, page_id)?;
        match page.get(b"Resources") {
            Ok(Object::Reference(res_id)) => {
                let res = doc
                    .get_object(*res_id)
                    .and_then(|obj| obj.as_dict())
                    .map_err(|e| FillError::Parse(e.to_string()))?;
                match res.get(b"Font") {
                    Ok(Object::Reference(fonts_id)) => FontTarget::FontDict(*fonts_id),
                    _ => FontTarget::Resources(*res_id),
                }
            }
            Ok(Object::Dictionary(res)) => match res.get(b"Font") {
                Ok(Object::Reference(fonts_id)) => FontTarget::FontDict(*fonts_id),
                _ => FontTarget::Page,
            },
            _ => FontTarget::Page,
        }
    };

    match target {
        FontTarget::FontDict(fonts_id) => {
            let fonts = doc
                .get_object_mut(fonts_id)
                .and_then(|obj| obj.as_dict_mut())
                .map_err(|e| FillError::Parse(e.to_string()))?;
            fonts.set(FONT_RESOURCE, Object::Reference(font_id));
        }
        FontTarget::Resources(res_id) => {
            let res = doc
                .get_object_mut(res_id)
                .and_then(|obj| obj.as_dict_mut())
                .map_err(|e| FillError::Parse(e.to_string()))?;
            set_inline_font(res, font_id);
        }
        FontTarget::Page => {
            let page = doc
                .get_object_mut(page_id)
                .and_then(|obj| obj.as_dict_mut())
                .map_err(|e| FillError::Parse(e.to_string()))?;
            match page.get_mut(b"Resources") {
                Ok(Object::Dictionary(res)) => set_inline_font(res, font_id),
                _ => {
                    let mut res = Dictionary::new();
                    set_inline_font(&mut res, font_id);
                    page.set("Resources", Object::Dictionary(res));
                }
            }
        }
    }
    Ok(())
}

fn set_inline_font(resources: &mut Dictionary, font_id: ObjectId) {
    match resources.get_mut(b"Font") {
        Ok(Object::Dictionary(fonts)) => {
            fonts.set(FONT_RESOURCE, Object::Reference(font_id));
        }
        _ => {
            let mut fonts = Dictionary::new();
            fonts.set(FONT_RESOURCE, Object::Reference(font_id));
            resources.set("Font", Object::Dictionary(fonts));
        }
    }
}
