//! Root element sniffing

use super::types::EntityKind;
use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::trace;

const ACCESSOR: &str = "sniff";

/// Local name of the document's root element.
///
/// Stops at the first start tag; child content is never inspected.
pub fn sniff(buffer: &[u8]) -> Result<String> {
    let mut reader = Reader::from_reader(buffer);

    loop {
        match reader
            .read_event()
            .map_err(|e| Error::xml_parse(ACCESSOR, e))?
        {
            Event::Start(e) | Event::Empty(e) => {
                let name = std::str::from_utf8(e.local_name().as_ref())
                    .map_err(|err| Error::xml_parse(ACCESSOR, err))?
                    .to_string();
                trace!("Sniffed root element <{name}>");
                return Ok(name);
            }
            Event::Eof => {
                return Err(Error::xml_parse(ACCESSOR, "document has no root element"));
            }
            // declaration, comments, doctype, whitespace
            _ => {}
        }
    }
}

/// Root element classified as an [`EntityKind`]
pub fn sniff_kind(buffer: &[u8]) -> Result<EntityKind> {
    sniff(buffer).map(|name| EntityKind::from_tag(&name))
}
