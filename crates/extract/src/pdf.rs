//! PDF text extraction, page by page.
//!
//! Every page contributes its text followed by a newline, in page order. A
//! page with no text still contributes its newline.

use docchat_core::error::ExtractionError;

/// Per-page access to a paginated document.
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Text of the page at `index` (0-based); `None` when the page has no
    /// text layer.
    fn page_text(&self, index: usize) -> Result<Option<String>, ExtractionError>;
}

/// Concatenate all pages of a source.
pub fn concat_pages(source: &impl PageSource) -> Result<String, ExtractionError> {
    let mut text = String::new();
    for index in 0..source.page_count() {
        if let Some(page) = source.page_text(index)? {
            text.push_str(&page);
        }
        text.push('\n');
    }
    Ok(text)
}

/// [`PageSource`] backed by `lopdf`.
pub struct LopdfPages {
    doc: lopdf::Document,
    pages: Vec<u32>,
}

impl LopdfPages {
    pub fn load(bytes: &[u8]) -> Result<Self, ExtractionError> {
        let doc =
            lopdf::Document::load_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))?;
        // get_pages is keyed by 1-based page number, already sorted
        let pages = doc.get_pages().keys().copied().collect();
        Ok(Self { doc, pages })
    }
}

impl PageSource for LopdfPages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<Option<String>, ExtractionError> {
        let Some(&number) = self.pages.get(index) else {
            return Ok(None);
        };
        let text = self
            .doc
            .extract_text(&[number])
            .map_err(|e| ExtractionError::Pdf(format!("page {number}: {e}")))?;
        // lopdf ends each page with its own line break; `concat_pages` adds ours.
        let text = text.trim_end_matches(['\r', '\n']);
        Ok(if text.is_empty() { None } else { Some(text.to_string()) })
    }
}

/// Extract the text of an in-memory PDF.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    concat_pages(&LopdfPages::load(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};

    /// Build a PDF with one `Tj` line of text per page.
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    struct StubPages(Vec<Option<&'static str>>);

    impl PageSource for StubPages {
        fn page_count(&self) -> usize {
            self.0.len()
        }

        fn page_text(&self, index: usize) -> Result<Option<String>, ExtractionError> {
            Ok(self.0[index].map(String::from))
        }
    }

    struct BrokenPage;

    impl PageSource for BrokenPage {
        fn page_count(&self) -> usize {
            1
        }

        fn page_text(&self, _index: usize) -> Result<Option<String>, ExtractionError> {
            Err(ExtractionError::Pdf("bad font".into()))
        }
    }

    #[test]
    fn two_pages_joined_with_trailing_newlines() {
        let text = concat_pages(&StubPages(vec![Some("A"), Some("B")])).unwrap();
        assert_eq!(text, "A\nB\n");
    }

    #[test]
    fn blank_page_is_empty_segment() {
        let text = concat_pages(&StubPages(vec![Some("A"), None, Some("C")])).unwrap();
        assert_eq!(text, "A\n\nC\n");
    }

    #[test]
    fn zero_pages_is_empty_string() {
        assert_eq!(concat_pages(&StubPages(vec![])).unwrap(), "");
    }

    #[test]
    fn page_failure_propagates() {
        assert!(matches!(
            concat_pages(&BrokenPage),
            Err(ExtractionError::Pdf(_))
        ));
    }

    #[test]
    fn real_pdf_pages_get_one_newline_each() {
        let bytes = build_pdf(&["A", "B"]);
        assert_eq!(extract(&bytes).unwrap(), "A\nB\n");
    }

    #[test]
    fn real_pdf_page_count_matches() {
        let pages = LopdfPages::load(&build_pdf(&["one", "two", "three"])).unwrap();
        assert_eq!(pages.page_count(), 3);
        assert_eq!(pages.page_text(1).unwrap().as_deref(), Some("two"));
        assert_eq!(pages.page_text(3).unwrap(), None);
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        assert!(LopdfPages::load(b"%PDF-garbage").is_err());
    }
}
