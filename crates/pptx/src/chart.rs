//! Chart part text extraction.
//!
//! A chart contributes, in order: its title (if present), the category
//! labels, then for each data series the series name followed by each
//! cached numeric value rendered as text. Values come from the chart's
//! cached data (`numCache`/`strCache`), so no spreadsheet part is needed.

use crate::xml::local_name;
use quick_xml::events::Event;
use quick_xml::Reader;
use slidetext_core::{Error, FragmentKind, Result};

#[derive(Debug, Default)]
struct SeriesAcc {
    name: String,
    categories: Vec<String>,
    values: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Name,
    Categories,
    Values,
}

/// Extract ordered text fragments from a chart part.
pub(crate) fn chart_fragments(xml: &str) -> Result<Vec<(FragmentKind, String)>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut title = String::new();
    let mut series: Vec<SeriesAcc> = Vec::new();

    let mut in_title = false;
    let mut in_axis = false;
    let mut in_formula = false;
    let mut current: Option<SeriesAcc> = None;
    let mut section = Section::None;
    let mut in_v = false;
    let mut v_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"valAx" | b"catAx" | b"serAx" | b"dateAx" => in_axis = true,
                b"title" if !in_axis => in_title = true,
                b"ser" => {
                    current = Some(SeriesAcc::default());
                    section = Section::None;
                }
                b"tx" if current.is_some() => section = Section::Name,
                b"cat" if current.is_some() => section = Section::Categories,
                b"val" if current.is_some() => section = Section::Values,
                b"v" => {
                    in_v = true;
                    v_buf.clear();
                }
                // Cached cell references (c:f) are not display text
                b"f" => in_formula = true,
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().unwrap_or_default();
                if in_formula {
                    // skip
                } else if in_title && !in_axis {
                    title.push_str(&text);
                } else if in_v && current.is_some() {
                    v_buf.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"valAx" | b"catAx" | b"serAx" | b"dateAx" => in_axis = false,
                b"f" => in_formula = false,
                b"title" => {
                    if in_title {
                        in_title = false;
                    }
                }
                b"p" if in_title => title.push('\n'),
                b"ser" => {
                    if let Some(acc) = current.take() {
                        series.push(acc);
                    }
                    section = Section::None;
                }
                b"tx" | b"cat" | b"val" => {
                    if current.is_some() {
                        section = Section::None;
                    }
                }
                b"v" => {
                    in_v = false;
                    if in_title {
                        continue;
                    }
                    if let Some(acc) = current.as_mut() {
                        let value = std::mem::take(&mut v_buf);
                        match section {
                            Section::Name => {
                                if !acc.name.is_empty() {
                                    acc.name.push(' ');
                                }
                                acc.name.push_str(&value);
                            }
                            Section::Categories => acc.categories.push(value),
                            Section::Values => acc.values.push(value),
                            Section::None => {}
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!("error parsing chart: {}", e)));
            }
            _ => {}
        }
    }

    let mut fragments = Vec::new();

    if !title.trim().is_empty() {
        fragments.push((FragmentKind::ChartTitle, title));
    }

    // Category labels are cached per series but identical across them;
    // emit the first non-empty set once.
    if let Some(with_cats) = series.iter().find(|s| !s.categories.is_empty()) {
        for category in &with_cats.categories {
            fragments.push((FragmentKind::ChartCategory, category.clone()));
        }
    }

    for acc in &series {
        if !acc.name.trim().is_empty() {
            fragments.push((FragmentKind::ChartSeriesName, acc.name.clone()));
        }
        for value in &acc.values {
            fragments.push((FragmentKind::ChartValue, value.clone()));
        }
    }

    Ok(fragments)
}
