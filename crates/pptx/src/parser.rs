//! PPTX extraction strategies over the OOXML package.

use crate::chart;
use crate::diagram;
use crate::rels::{parse_relationships, rels_path_for, resolve_target, Relationship};
use crate::slide::{count_shapes, walk_slide, SlideItem, WalkOptions};
use crate::xml::{attr_value, local_name};
use quick_xml::events::Event;
use quick_xml::Reader;
use slidetext_core::types::looks_like_legacy_ppt;
use slidetext_core::{Error, ExtractedText, FragmentKind, Result, SourceFormat};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// How text is pulled out of the document. A closed set: every strategy
/// yields the same [`ExtractedText`] contract, they differ only in coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Bounded walk of text boxes, tables, one level of grouped shapes,
    /// and charts.
    #[default]
    Shapes,
    /// Every text run in document order, one fragment per slide.
    FlatText,
    /// Full-fidelity walk: unlimited group nesting plus SmartArt nodes.
    Fidelity,
}

/// Extractor for PPTX (Office Open XML) files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PptxExtractor {
    strategy: Strategy,
}

impl PptxExtractor {
    /// Create an extractor using the default shape traversal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with an explicit strategy.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// The configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Extract text from a file on disk, verifying the format first.
    pub fn extract_path(&self, path: &Path) -> Result<ExtractedText> {
        self.extract_path_with_progress(path, |_| {})
    }

    /// Extract from a file on disk, reporting completion percentages.
    pub fn extract_path_with_progress<F>(
        &self,
        path: &Path,
        on_progress: F,
    ) -> Result<ExtractedText>
    where
        F: FnMut(u8),
    {
        let mut file = File::open(path)?;

        let mut magic = [0u8; 8];
        let n = file.read(&mut magic)?;
        if SourceFormat::from_magic(&magic[..n]).is_none() {
            if looks_like_legacy_ppt(&magic[..n]) {
                return Err(Error::UnsupportedFormat(format!(
                    "{} is a legacy binary .ppt file; convert it to .pptx first",
                    path.display()
                )));
            }
            return Err(Error::UnsupportedFormat(format!(
                "{} is not a .pptx package",
                path.display()
            )));
        }
        file.rewind()?;

        self.extract_with_progress(BufReader::new(file), on_progress)
    }

    /// Extract text from an already-open reader.
    pub fn extract<R: Read + Seek>(&self, reader: R) -> Result<ExtractedText> {
        self.extract_with_progress(reader, |_| {})
    }

    /// Extract text, reporting a monotonically non-decreasing completion
    /// percentage after each processed shape (or, for the flat strategy,
    /// each slide). Advisory only.
    pub fn extract_with_progress<R, F>(&self, reader: R, mut on_progress: F) -> Result<ExtractedText>
    where
        R: Read + Seek,
        F: FnMut(u8),
    {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::Zip(format!("failed to open archive: {}", e)))?;

        let slide_paths = slide_order(&mut archive)?;

        // Slide parts are read up front so progress has a total to report
        // against before the walk starts.
        let mut slides = Vec::with_capacity(slide_paths.len());
        for path in &slide_paths {
            slides.push((path.clone(), read_part(&mut archive, path)?));
        }

        match self.strategy {
            Strategy::FlatText => extract_flat(&slides, &mut on_progress),
            Strategy::Shapes => {
                extract_walked(&mut archive, &slides, WalkOptions::bounded(), &mut on_progress)
            }
            Strategy::Fidelity => {
                extract_walked(&mut archive, &slides, WalkOptions::full(), &mut on_progress)
            }
        }
    }
}

/// Walk each slide's shape tree, resolving chart and diagram references.
fn extract_walked<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    slides: &[(String, String)],
    opts: WalkOptions,
    on_progress: &mut dyn FnMut(u8),
) -> Result<ExtractedText> {
    let total: usize = slides.iter().map(|(_, xml)| count_shapes(xml)).sum();
    let mut done = 0usize;

    let mut out = ExtractedText::new();
    out.slide_count = slides.len();

    for (slide_path, xml) in slides {
        let items = walk_slide(xml, opts)?;
        let mut slide_rels: Option<Vec<Relationship>> = None;

        for item in items {
            match item {
                SlideItem::Text { kind, text } => {
                    out.push(kind, text);
                }
                SlideItem::ChartRef(rid) => {
                    match referenced_part(archive, slide_path, &mut slide_rels, &rid)? {
                        Some(part_xml) => {
                            for (kind, text) in chart::chart_fragments(&part_xml)? {
                                out.push(kind, text);
                            }
                        }
                        None => {
                            log::warn!("chart part {} missing for {}", rid, slide_path);
                        }
                    }
                }
                SlideItem::DiagramRef(rid) => {
                    match referenced_part(archive, slide_path, &mut slide_rels, &rid)? {
                        Some(part_xml) => {
                            for text in diagram::diagram_fragments(&part_xml)? {
                                out.push(FragmentKind::DiagramNode, text);
                            }
                        }
                        None => {
                            log::warn!("diagram part {} missing for {}", rid, slide_path);
                        }
                    }
                }
                SlideItem::ShapeDone => {
                    done += 1;
                    if total > 0 {
                        let percent = (done * 100 / total).min(100) as u8;
                        on_progress(percent);
                    }
                }
            }
        }
    }

    Ok(out)
}

/// Collect every text run per slide, one fragment per slide.
fn extract_flat(
    slides: &[(String, String)],
    on_progress: &mut dyn FnMut(u8),
) -> Result<ExtractedText> {
    let mut out = ExtractedText::new();
    out.slide_count = slides.len();

    for (idx, (_, xml)) in slides.iter().enumerate() {
        out.push(FragmentKind::SlideBody, flat_slide_text(xml)?);
        on_progress(((idx + 1) * 100 / slides.len()) as u8);
    }

    Ok(out)
}

/// Flatten one slide to its raw text runs, paragraphs as lines.
fn flat_slide_text(xml: &str) -> Result<String> {
    // No event-level trimming: spaces at run boundaries are significant
    let mut reader = Reader::from_str(xml);

    let mut text = String::new();
    let mut in_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if local_name(e.name().as_ref()) == b"t" {
                    in_run = true;
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_run {
                    text.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"t" => in_run = false,
                b"p" => {
                    if !text.is_empty() && !text.ends_with('\n') {
                        text.push('\n');
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!("error parsing slide: {}", e)));
            }
            _ => {}
        }
    }

    Ok(text)
}

/// Read the part a relationship id points to, caching the slide's rels.
/// A missing part or missing rels file yields `None`; the caller decides
/// whether that is worth a warning.
fn referenced_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    slide_path: &str,
    cache: &mut Option<Vec<Relationship>>,
    rid: &str,
) -> Result<Option<String>> {
    if cache.is_none() {
        let rels = match read_part(archive, &rels_path_for(slide_path)) {
            Ok(xml) => parse_relationships(&xml)?,
            Err(_) => Vec::new(),
        };
        *cache = Some(rels);
    }

    let rels = cache.as_ref().expect("cache was just populated");
    let Some(rel) = rels.iter().find(|r| r.id == rid) else {
        return Ok(None);
    };

    let base_dir = slide_path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");
    let part_path = resolve_target(base_dir, &rel.target);

    match read_part(archive, &part_path) {
        Ok(xml) => Ok(Some(xml)),
        Err(_) => Ok(None),
    }
}

/// Determine the ordered list of slide part paths.
///
/// The authoritative order is the `sldIdLst` in `ppt/presentation.xml`,
/// mapped to part paths through the presentation relationships. Packages
/// without an id list fall back to numeric rId/target ordering.
fn slide_order<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
    let rels_xml = read_part(archive, "ppt/_rels/presentation.xml.rels")?;
    let rels = parse_relationships(&rels_xml)?;
    let slide_rels: Vec<&Relationship> = rels
        .iter()
        .filter(|r| r.rel_type.ends_with("/slide"))
        .collect();

    let ordered_ids = match read_part(archive, "ppt/presentation.xml") {
        Ok(xml) => slide_id_list(&xml)?,
        Err(_) => Vec::new(),
    };

    let mut paths = Vec::new();
    for id in &ordered_ids {
        if let Some(rel) = slide_rels.iter().find(|r| &r.id == id) {
            paths.push(resolve_target("ppt", &rel.target));
        }
    }

    if paths.is_empty() {
        // No usable id list; sort by the number embedded in the rId or target
        let mut numbered: Vec<(String, Option<usize>)> = slide_rels
            .iter()
            .map(|r| {
                let order = trailing_number(&r.id).or_else(|| trailing_number(&r.target));
                (resolve_target("ppt", &r.target), order)
            })
            .collect();

        numbered.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        paths = numbered.into_iter().map(|(path, _)| path).collect();
    }

    Ok(paths)
}

/// Read the ordered slide relationship ids from `ppt/presentation.xml`.
fn slide_id_list(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut ids = Vec::new();
    let mut in_list = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                match local_name(e.name().as_ref()) {
                    b"sldIdLst" => in_list = true,
                    b"sldId" if in_list => {
                        if let Some(id) = attr_value(e, b"r:id") {
                            ids.push(id);
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::End(ref e)) => {
                if local_name(e.name().as_ref()) == b"sldIdLst" {
                    in_list = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!("error parsing presentation part: {}", e)));
            }
            _ => {}
        }
    }

    Ok(ids)
}

/// Read a part from the ZIP package as UTF-8 text.
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, path: &str) -> Result<String> {
    let mut file = archive
        .by_name(path)
        .map_err(|e| Error::Zip(format!("part '{}' not found in archive: {}", path, e)))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::Zip(format!("failed to read '{}': {}", path, e)))?;

    Ok(content)
}

/// Extract a trailing number from a string like "rId2" or "slide3.xml".
fn trailing_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::FileOptions;

    fn sp(text: &str) -> String {
        format!(
            "<p:sp><p:txBody><a:p><a:r><a:t>{}</a:t></a:r></a:p></p:txBody></p:sp>",
            text
        )
    }

    fn slide_xml(body: &str) -> String {
        format!(
            "<?xml version=\"1.0\"?><p:sld xmlns:a=\"a\" xmlns:p=\"p\" xmlns:r=\"r\">\
             <p:cSld><p:spTree><p:nvGrpSpPr/><p:grpSpPr/>{}</p:spTree></p:cSld></p:sld>",
            body
        )
    }

    fn presentation_xml(rids: &[&str]) -> String {
        let entries: String = rids
            .iter()
            .enumerate()
            .map(|(i, rid)| format!("<p:sldId id=\"{}\" r:id=\"{}\"/>", 256 + i, rid))
            .collect();
        format!(
            "<?xml version=\"1.0\"?><p:presentation xmlns:p=\"p\" xmlns:r=\"r\">\
             <p:sldIdLst>{}</p:sldIdLst></p:presentation>",
            entries
        )
    }

    fn presentation_rels(entries: &[(&str, &str)]) -> String {
        let body: String = entries
            .iter()
            .map(|(id, target)| {
                format!(
                    "<Relationship Id=\"{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide\" Target=\"{}\"/>",
                    id, target
                )
            })
            .collect();
        format!(
            "<?xml version=\"1.0\"?><Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">{}</Relationships>",
            body
        )
    }

    /// Build an in-memory .pptx package from (path, content) pairs.
    fn build_package(parts: &[(&str, &str)]) -> Cursor<Vec<u8>> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (path, content) in parts {
            writer.start_file(*path, FileOptions::default()).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap()
    }

    fn simple_package(slides: &[&str]) -> Cursor<Vec<u8>> {
        let rids: Vec<String> = (0..slides.len()).map(|i| format!("rId{}", i + 1)).collect();
        let rid_refs: Vec<&str> = rids.iter().map(|s| s.as_str()).collect();

        let targets: Vec<String> = (0..slides.len())
            .map(|i| format!("slides/slide{}.xml", i + 1))
            .collect();
        let rel_entries: Vec<(&str, &str)> = rid_refs
            .iter()
            .zip(targets.iter())
            .map(|(rid, target)| (*rid, target.as_str()))
            .collect();

        let presentation = presentation_xml(&rid_refs);
        let rels = presentation_rels(&rel_entries);

        let mut parts: Vec<(String, String)> = vec![
            ("ppt/presentation.xml".to_string(), presentation),
            ("ppt/_rels/presentation.xml.rels".to_string(), rels),
        ];
        for (i, body) in slides.iter().enumerate() {
            parts.push((
                format!("ppt/slides/slide{}.xml", i + 1),
                slide_xml(body),
            ));
        }

        let borrowed: Vec<(&str, &str)> = parts
            .iter()
            .map(|(p, c)| (p.as_str(), c.as_str()))
            .collect();
        build_package(&borrowed)
    }

    #[test]
    fn test_text_box_and_table_scenario() {
        let body = format!(
            "{}<p:graphicFrame><a:graphic><a:graphicData><a:tbl>\
             <a:tr><a:tc><a:txBody><a:p><a:r><a:t>A</a:t></a:r></a:p></a:txBody></a:tc>\
             <a:tc><a:txBody><a:p><a:r><a:t>B</a:t></a:r></a:p></a:txBody></a:tc></a:tr>\
             </a:tbl></a:graphicData></a:graphic></p:graphicFrame>",
            sp("Hello")
        );
        let package = simple_package(&[&body]);

        let extracted = PptxExtractor::new().extract(package).unwrap();
        assert_eq!(extracted.to_text(), "Hello\n\nA\n\nB");
        assert_eq!(extracted.slide_count, 1);
    }

    #[test]
    fn test_slide_then_shape_order() {
        let package = simple_package(&[
            &format!("{}{}", sp("One"), sp("Two")),
            &sp("Three"),
        ]);

        let extracted = PptxExtractor::new().extract(package).unwrap();
        assert_eq!(extracted.to_text(), "One\n\nTwo\n\nThree");
        assert_eq!(extracted.slide_count, 2);
    }

    #[test]
    fn test_blank_shapes_are_skipped() {
        let package = simple_package(&[&format!("{}{}{}", sp("Kept"), sp("   "), sp(""))]);

        let extracted = PptxExtractor::new().extract(package).unwrap();
        assert_eq!(extracted.to_text(), "Kept");
        assert_eq!(extracted.fragment_count(), 1);
    }

    #[test]
    fn test_sld_id_list_overrides_rid_order() {
        // The id list names rId2's slide first even though rId1 sorts lower
        let presentation = presentation_xml(&["rId2", "rId1"]);
        let rels = presentation_rels(&[
            ("rId1", "slides/slide1.xml"),
            ("rId2", "slides/slide2.xml"),
        ]);
        let slide1 = slide_xml(&sp("First"));
        let slide2 = slide_xml(&sp("Second"));
        let package = build_package(&[
            ("ppt/presentation.xml", presentation.as_str()),
            ("ppt/_rels/presentation.xml.rels", rels.as_str()),
            ("ppt/slides/slide1.xml", slide1.as_str()),
            ("ppt/slides/slide2.xml", slide2.as_str()),
        ]);

        let extracted = PptxExtractor::new().extract(package).unwrap();
        assert_eq!(extracted.to_text(), "Second\n\nFirst");
    }

    #[test]
    fn test_fallback_order_without_presentation_part() {
        let rels = presentation_rels(&[
            ("rId3", "slides/slide3.xml"),
            ("rId1", "slides/slide1.xml"),
        ]);
        let slide1 = slide_xml(&sp("Alpha"));
        let slide3 = slide_xml(&sp("Gamma"));
        let package = build_package(&[
            ("ppt/_rels/presentation.xml.rels", rels.as_str()),
            ("ppt/slides/slide1.xml", slide1.as_str()),
            ("ppt/slides/slide3.xml", slide3.as_str()),
        ]);

        let extracted = PptxExtractor::new().extract(package).unwrap();
        assert_eq!(extracted.to_text(), "Alpha\n\nGamma");
    }

    #[test]
    fn test_progress_is_monotonic_and_reaches_100() {
        let package = simple_package(&[
            &format!("{}{}", sp("A"), sp("B")),
            &format!("{}{}", sp("C"), sp("D")),
        ]);

        let mut reports = Vec::new();
        PptxExtractor::new()
            .extract_with_progress(package, |pct| reports.push(pct))
            .unwrap();

        assert_eq!(reports, vec![25, 50, 75, 100]);
        assert!(reports.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_chart_fragments_resolved_through_rels() {
        let chart = r#"<c:chartSpace xmlns:c="c" xmlns:a="a"><c:chart>
            <c:title><c:tx><c:rich><a:p><a:r><a:t>Totals</a:t></a:r></a:p></c:rich></c:tx></c:title>
            <c:plotArea><c:barChart><c:ser>
              <c:tx><c:strRef><c:strCache><c:pt idx="0"><c:v>Series A</c:v></c:pt></c:strCache></c:strRef></c:tx>
              <c:cat><c:strRef><c:strCache><c:pt idx="0"><c:v>East</c:v></c:pt></c:strCache></c:strRef></c:cat>
              <c:val><c:numRef><c:numCache><c:pt idx="0"><c:v>42</c:v></c:pt></c:numCache></c:numRef></c:val>
            </c:ser></c:barChart></c:plotArea></c:chart></c:chartSpace>"#;

        let slide_body = format!(
            "{}<p:graphicFrame><a:graphic><a:graphicData>\
             <c:chart xmlns:c=\"c\" r:id=\"rId5\"/>\
             </a:graphicData></a:graphic></p:graphicFrame>",
            sp("Intro")
        );
        let slide_rels = r#"<Relationships><Relationship Id="rId5" Type=".../chart" Target="../charts/chart1.xml"/></Relationships>"#;

        let presentation = presentation_xml(&["rId1"]);
        let rels = presentation_rels(&[("rId1", "slides/slide1.xml")]);
        let slide1 = slide_xml(&slide_body);
        let package = build_package(&[
            ("ppt/presentation.xml", presentation.as_str()),
            ("ppt/_rels/presentation.xml.rels", rels.as_str()),
            ("ppt/slides/slide1.xml", slide1.as_str()),
            ("ppt/slides/_rels/slide1.xml.rels", slide_rels),
            ("ppt/charts/chart1.xml", chart),
        ]);

        let extracted = PptxExtractor::new().extract(package).unwrap();
        assert_eq!(
            extracted.to_text(),
            "Intro\n\nTotals\n\nEast\n\nSeries A\n\n42"
        );
    }

    #[test]
    fn test_missing_chart_part_is_skipped() {
        let slide_body = format!(
            "{}<p:graphicFrame><a:graphic><a:graphicData>\
             <c:chart xmlns:c=\"c\" r:id=\"rId9\"/>\
             </a:graphicData></a:graphic></p:graphicFrame>",
            sp("Still here")
        );
        let package = simple_package(&[&slide_body]);

        let extracted = PptxExtractor::new().extract(package).unwrap();
        assert_eq!(extracted.to_text(), "Still here");
    }

    #[test]
    fn test_flat_text_strategy_one_fragment_per_slide() {
        let package = simple_package(&[
            &format!("{}{}", sp("One"), sp("Two")),
            &sp("Three"),
        ]);

        let extracted = PptxExtractor::with_strategy(Strategy::FlatText)
            .extract(package)
            .unwrap();
        assert_eq!(extracted.fragment_count(), 2);
        assert_eq!(extracted.to_text(), "One\nTwo\n\nThree");
    }

    #[test]
    fn test_flat_text_keeps_space_between_runs() {
        let body = "<p:sp><p:txBody>\
                    <a:p><a:r><a:t>Hello </a:t></a:r><a:r><a:t>world</a:t></a:r></a:p>\
                    </p:txBody></p:sp>";
        let package = simple_package(&[body]);

        let extracted = PptxExtractor::with_strategy(Strategy::FlatText)
            .extract(package)
            .unwrap();
        assert_eq!(extracted.to_text(), "Hello world");
    }

    #[test]
    fn test_fidelity_strategy_reads_smartart() {
        let diagram = r#"<dgm:dataModel xmlns:dgm="d" xmlns:a="a"><dgm:ptLst>
            <dgm:pt modelId="1"><dgm:t><a:p><a:r><a:t>Step one</a:t></a:r></a:p></dgm:t></dgm:pt>
            <dgm:pt modelId="2"><dgm:t><a:p><a:r><a:t>Step two</a:t></a:r></a:p></dgm:t></dgm:pt>
        </dgm:ptLst></dgm:dataModel>"#;

        let slide_body = "<p:graphicFrame><a:graphic><a:graphicData>\
             <dgm:relIds xmlns:dgm=\"d\" r:dm=\"rId6\"/>\
             </a:graphicData></a:graphic></p:graphicFrame>";
        let slide_rels = r#"<Relationships><Relationship Id="rId6" Type=".../diagramData" Target="../diagrams/data1.xml"/></Relationships>"#;

        let presentation = presentation_xml(&["rId1"]);
        let rels = presentation_rels(&[("rId1", "slides/slide1.xml")]);
        let slide1 = slide_xml(slide_body);
        let parts = [
            ("ppt/presentation.xml", presentation.as_str()),
            ("ppt/_rels/presentation.xml.rels", rels.as_str()),
            ("ppt/slides/slide1.xml", slide1.as_str()),
            ("ppt/slides/_rels/slide1.xml.rels", slide_rels),
            ("ppt/diagrams/data1.xml", diagram),
        ];

        let extracted = PptxExtractor::with_strategy(Strategy::Fidelity)
            .extract(build_package(&parts))
            .unwrap();
        assert_eq!(extracted.to_text(), "Step one\n\nStep two");

        // The default traversal does not descend into SmartArt
        let extracted = PptxExtractor::new().extract(build_package(&parts)).unwrap();
        assert!(extracted.is_empty());
    }

    #[test]
    fn test_not_a_zip_fails_as_read_error() {
        let err = PptxExtractor::new()
            .extract(Cursor::new(b"plain text, no archive".to_vec()))
            .unwrap_err();
        assert!(err.is_read_error());
    }

    #[test]
    fn test_archive_without_presentation_rels_fails() {
        let package = build_package(&[("ppt/slides/slide1.xml", "<p:sld/>")]);
        let err = PptxExtractor::new().extract(package).unwrap_err();
        assert!(matches!(err, Error::Zip(_)));
    }

    #[test]
    fn test_extract_path_rejects_wrong_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pptx");
        std::fs::write(&path, b"%PDF-1.7 not a presentation").unwrap();

        let err = PptxExtractor::new().extract_path(&path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_extract_path_explains_legacy_ppt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.ppt");
        let mut header = vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
        header.extend_from_slice(&[0u8; 16]);
        std::fs::write(&path, &header).unwrap();

        let err = PptxExtractor::new().extract_path(&path).unwrap_err();
        match err {
            Error::UnsupportedFormat(msg) => assert!(msg.contains("legacy")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_trailing_number() {
        assert_eq!(trailing_number("rId1"), Some(1));
        assert_eq!(trailing_number("rId12"), Some(12));
        assert_eq!(trailing_number("slide3.xml"), Some(3));
        assert_eq!(trailing_number("nodigits"), None);
    }
}
