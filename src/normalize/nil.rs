//! Nil element stripping
//!
//! The gateway marks absent values as `<field nil="true"/>`. Left in place,
//! such an element decodes as an empty string (or fails to parse as a date
//! or number). Removing it makes the field decode as missing.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

const ACCESSOR: &str = "strip_nil_elements";

/// Remove every element whose `nil_attribute` is `"true"`, subtree included.
///
/// Namespace prefixes are ignored, so `xsi:nil="true"` matches `"nil"`.
/// Fails on malformed XML; callers fall back to the original bytes.
pub fn strip_nil_elements(input: &[u8], nil_attribute: &str) -> Result<Vec<u8>> {
    let mut reader = Reader::from_reader(input);
    let mut writer = Writer::new(Vec::with_capacity(input.len()));

    // Open elements written so far, and nesting inside a skipped subtree
    let mut depth = 0usize;
    let mut skip_depth = 0usize;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Error::xml_parse(ACCESSOR, e))?;

        if skip_depth > 0 {
            match event {
                Event::Start(_) => skip_depth += 1,
                Event::End(_) => skip_depth -= 1,
                Event::Eof => break,
                _ => {}
            }
            continue;
        }

        match &event {
            Event::Eof => break,
            Event::Start(e) if is_nil(e, nil_attribute)? => {
                skip_depth = 1;
                continue;
            }
            Event::Empty(e) if is_nil(e, nil_attribute)? => continue,
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {}
        }

        writer
            .write_event(event)
            .map_err(|e| Error::xml_parse(ACCESSOR, e))?;
    }

    if depth > 0 || skip_depth > 0 {
        return Err(Error::xml_parse(ACCESSOR, "unexpected end of document"));
    }

    Ok(writer.into_inner())
}

fn is_nil(element: &BytesStart<'_>, nil_attribute: &str) -> Result<bool> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| Error::xml_parse(ACCESSOR, e))?;
        if attr.key.local_name().as_ref() == nil_attribute.as_bytes() {
            return Ok(attr.value.eq_ignore_ascii_case(b"true"));
        }
    }
    Ok(false)
}
