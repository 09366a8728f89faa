//! Streaming walker over one slide's shape tree.
//!
//! Produces [`SlideItem`]s in document order: slide shapes top to bottom,
//! table rows top to bottom with cells left to right, group children in
//! child order. Chart and SmartArt references are surfaced as items so the
//! caller can resolve them through the slide's relationships without
//! disturbing fragment order.

use crate::xml::{attr_value, local_name};
use quick_xml::events::Event;
use quick_xml::Reader;
use slidetext_core::{Error, FragmentKind, Result};

/// Elements that count as shapes directly under `spTree`.
const SHAPE_ELEMENTS: &[&[u8]] = &[
    b"sp",
    b"grpSp",
    b"graphicFrame",
    b"pic",
    b"cxnSp",
    b"contentPart",
];

/// One item encountered while walking a slide, in document order.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SlideItem {
    /// A candidate text fragment; may still be blank.
    Text { kind: FragmentKind, text: String },
    /// A chart part reference (`r:id`) to resolve via the slide's rels.
    ChartRef(String),
    /// A SmartArt data part reference (`r:dm`) to resolve via the rels.
    DiagramRef(String),
    /// A top-level shape finished; used for progress accounting.
    ShapeDone,
}

/// Options distinguishing the default and full-fidelity traversals.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WalkOptions {
    /// Deepest group nesting level whose children still contribute
    /// fragments. `1` keeps direct children of top-level groups only.
    pub max_group_depth: usize,
    /// Whether SmartArt diagram references are collected.
    pub include_diagrams: bool,
}

impl WalkOptions {
    /// The bounded default traversal: one level of group nesting, no SmartArt.
    pub fn bounded() -> Self {
        Self {
            max_group_depth: 1,
            include_diagrams: false,
        }
    }

    /// The full-fidelity traversal: unlimited nesting plus SmartArt nodes.
    pub fn full() -> Self {
        Self {
            max_group_depth: usize::MAX,
            include_diagrams: true,
        }
    }
}

/// Walk a slide part and collect its items in document order.
pub(crate) fn walk_slide(xml: &str, opts: WalkOptions) -> Result<Vec<SlideItem>> {
    // Text events are taken verbatim; a run can end in a significant space
    // ("Hello " + "world"). Trimming happens once, at the fragment level.
    let mut reader = Reader::from_str(xml);

    let mut items = Vec::new();

    let mut in_sp_tree = false;
    // Open elements below spTree; 0 means the next Start is a direct child.
    let mut depth = 0usize;
    let mut top_is_shape = false;
    let mut group_depth = 0usize;

    let mut current_sp: Option<FragmentKind> = None;
    let mut sp_buf = String::new();
    let mut current_cell: Option<String> = None;
    let mut in_txbody = false;
    let mut in_paragraph = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                let local = local_name(name.as_ref());

                if !in_sp_tree {
                    if local == b"spTree" {
                        in_sp_tree = true;
                    }
                    continue;
                }

                if depth == 0 {
                    top_is_shape = SHAPE_ELEMENTS.contains(&local);
                }
                depth += 1;

                match local {
                    b"grpSp" => group_depth += 1,
                    b"sp" => {
                        if group_depth <= opts.max_group_depth {
                            current_sp = Some(if group_depth == 0 {
                                FragmentKind::TextBox
                            } else {
                                FragmentKind::GroupChild
                            });
                            sp_buf.clear();
                        }
                    }
                    b"tc" => current_cell = Some(String::new()),
                    b"txBody" => in_txbody = true,
                    b"p" if in_txbody => {
                        in_paragraph = true;
                        // Paragraph boundary within the active text target
                        if let Some(cell) = current_cell.as_mut() {
                            if !cell.is_empty() {
                                cell.push('\n');
                            }
                        } else if current_sp.is_some() && !sp_buf.is_empty() {
                            sp_buf.push('\n');
                        }
                    }
                    b"chart" => {
                        if let Some(rid) = attr_value(e, b"r:id") {
                            items.push(SlideItem::ChartRef(rid));
                        }
                    }
                    b"relIds" if opts.include_diagrams => {
                        if let Some(rid) = attr_value(e, b"r:dm") {
                            items.push(SlideItem::DiagramRef(rid));
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = e.name();
                let local = local_name(name.as_ref());

                if !in_sp_tree {
                    continue;
                }

                match local {
                    b"br" if in_paragraph => {
                        if let Some(cell) = current_cell.as_mut() {
                            cell.push('\n');
                        } else if current_sp.is_some() {
                            sp_buf.push('\n');
                        }
                    }
                    b"chart" => {
                        if let Some(rid) = attr_value(e, b"r:id") {
                            items.push(SlideItem::ChartRef(rid));
                        }
                    }
                    b"relIds" if opts.include_diagrams => {
                        if let Some(rid) = attr_value(e, b"r:dm") {
                            items.push(SlideItem::DiagramRef(rid));
                        }
                    }
                    _ => {}
                }

                // A self-closing direct child of spTree is a complete shape
                if depth == 0 && SHAPE_ELEMENTS.contains(&local) {
                    items.push(SlideItem::ShapeDone);
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_paragraph {
                    let text = e.unescape().unwrap_or_default();
                    if let Some(cell) = current_cell.as_mut() {
                        cell.push_str(&text);
                    } else if current_sp.is_some() {
                        sp_buf.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let local = local_name(name.as_ref());

                if !in_sp_tree {
                    continue;
                }
                if local == b"spTree" {
                    in_sp_tree = false;
                    continue;
                }

                depth = depth.saturating_sub(1);

                match local {
                    b"grpSp" => group_depth = group_depth.saturating_sub(1),
                    b"sp" => {
                        if let Some(kind) = current_sp.take() {
                            items.push(SlideItem::Text {
                                kind,
                                text: std::mem::take(&mut sp_buf),
                            });
                        }
                        in_txbody = false;
                        in_paragraph = false;
                    }
                    b"tc" => {
                        if let Some(cell) = current_cell.take() {
                            items.push(SlideItem::Text {
                                kind: FragmentKind::TableCell,
                                text: cell,
                            });
                        }
                        in_txbody = false;
                        in_paragraph = false;
                    }
                    b"txBody" => in_txbody = false,
                    b"p" => in_paragraph = false,
                    _ => {}
                }

                if depth == 0 && top_is_shape {
                    items.push(SlideItem::ShapeDone);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!("error parsing slide: {}", e)));
            }
            _ => {}
        }
    }

    Ok(items)
}

/// Count the top-level shapes on a slide (for progress totals).
pub(crate) fn count_shapes(xml: &str) -> usize {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut count = 0usize;
    let mut in_sp_tree = false;
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                let local = local_name(name.as_ref());
                if !in_sp_tree {
                    if local == b"spTree" {
                        in_sp_tree = true;
                    }
                    continue;
                }
                if depth == 0 && SHAPE_ELEMENTS.contains(&local) {
                    count += 1;
                }
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => {
                if in_sp_tree && depth == 0 {
                    let name = e.name();
                    let local = local_name(name.as_ref());
                    if SHAPE_ELEMENTS.contains(&local) {
                        count += 1;
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                if in_sp_tree {
                    if local_name(e.name().as_ref()) == b"spTree" {
                        in_sp_tree = false;
                    } else {
                        depth = depth.saturating_sub(1);
                    }
                }
            }
            Ok(Event::Eof) => break,
            // Malformed markup past this point cannot add shapes
            Err(_) => break,
            _ => {}
        }
    }

    count
}
