//! SmartArt diagram data part text extraction.
//!
//! SmartArt text does not live on the slide shape; it sits in a separate
//! diagram data part as a flat list of points (`dgm:ptLst`), each carrying
//! its own text body. Every non-blank point becomes one fragment.

use crate::xml::local_name;
use quick_xml::events::Event;
use quick_xml::Reader;
use slidetext_core::{Error, Result};

/// Extract the text of each diagram node, in point-list order.
pub(crate) fn diagram_fragments(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut fragments = Vec::new();
    let mut in_pt = false;
    let mut buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"pt" => {
                    in_pt = true;
                    buf.clear();
                }
                b"p" if in_pt && !buf.is_empty() => buf.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if in_pt {
                    buf.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::End(ref e)) => {
                if local_name(e.name().as_ref()) == b"pt" {
                    in_pt = false;
                    if !buf.trim().is_empty() {
                        fragments.push(std::mem::take(&mut buf));
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!("error parsing diagram: {}", e)));
            }
            _ => {}
        }
    }

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIAGRAM: &str = r#"<?xml version="1.0"?>
<dgm:dataModel xmlns:dgm="d" xmlns:a="a">
  <dgm:ptLst>
    <dgm:pt modelId="1" type="doc"><dgm:prSet/></dgm:pt>
    <dgm:pt modelId="2">
      <dgm:t><a:bodyPr/><a:p><a:r><a:t>Plan</a:t></a:r></a:p></dgm:t>
    </dgm:pt>
    <dgm:pt modelId="3">
      <dgm:t><a:bodyPr/><a:p><a:r><a:t>Build</a:t></a:r></a:p></dgm:t>
    </dgm:pt>
    <dgm:pt modelId="4" type="parTrans"></dgm:pt>
  </dgm:ptLst>
</dgm:dataModel>"#;

    #[test]
    fn test_diagram_nodes_in_order() {
        let fragments = diagram_fragments(DIAGRAM).unwrap();
        assert_eq!(fragments, vec!["Plan", "Build"]);
    }

    #[test]
    fn test_empty_point_list() {
        let xml = r#"<dgm:dataModel xmlns:dgm="d"><dgm:ptLst/></dgm:dataModel>"#;
        assert_eq!(diagram_fragments(xml).unwrap(), Vec::<String>::new());
    }
}
