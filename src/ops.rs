//! The PDF operation runners.
//!
//! Both runners are stateless functions over file paths. Merging starts
//! from the first document and folds the rest into it: each subsequent
//! document is renumbered past the running max object id, its objects are
//! absorbed, and its page references are appended to the base page tree.
//! Splitting clones the source once per page, rewrites the page tree down
//! to that single page and prunes everything unreachable.

use crate::error::OpError;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub output: PathBuf,
    pub files_merged: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone)]
pub struct SplitOutcome {
    pub dir: PathBuf,
    pub files_written: usize,
}

/// Name of the per-page file produced by a split. The prefix is taken
/// verbatim; page indices are 1-based.
pub fn page_file_name(prefix: &str, page: u32) -> String {
    format!("{prefix}page_{page}.pdf")
}

/// Concatenate every page of every input, in list order, into one document
/// at `output`.
pub fn merge_files(inputs: &[PathBuf], output: &Path) -> Result<MergeOutcome, OpError> {
    let (first, rest) = inputs.split_first().ok_or(OpError::NoInputFiles)?;

    let mut merged = load(first)?;
    let mut max_id = merged.max_id;

    for path in rest {
        let mut doc = load(path)?;
        doc.renumber_objects_with(max_id + 1);
        max_id = doc.max_id;

        let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
        merged.objects.extend(doc.objects);
        append_pages(&mut merged, first, &pages)?;
    }

    merged.renumber_objects();
    let total_pages = merged.get_pages().len();

    merged.save(output).map_err(|source| OpError::Save {
        path: output.to_path_buf(),
        source: lopdf::Error::IO(source),
    })?;

    Ok(MergeOutcome {
        output: output.to_path_buf(),
        files_merged: inputs.len(),
        total_pages,
    })
}

/// Write one single-page document per page of `input` into `out_dir`,
/// named `{prefix}page_{n}.pdf`.
pub fn split_file(input: &Path, out_dir: &Path, prefix: &str) -> Result<SplitOutcome, OpError> {
    let doc = load(input)?;
    let mut files_written = 0;

    for (page_num, page_id) in doc.get_pages() {
        let mut single = doc.clone();
        retain_single_page(&mut single, input, page_id)?;
        single.prune_objects();
        single.renumber_objects();

        let out_path = out_dir.join(page_file_name(prefix, page_num));
        single.save(&out_path).map_err(|source| OpError::Save {
            path: out_path.clone(),
            source: lopdf::Error::IO(source),
        })?;
        files_written += 1;
    }

    Ok(SplitOutcome {
        dir: out_dir.to_path_buf(),
        files_written,
    })
}

fn load(path: &Path) -> Result<Document, OpError> {
    Document::load(path).map_err(|source| OpError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Run `f` against the root Pages dictionary of `doc`.
fn with_pages_dict<R>(
    doc: &mut Document,
    f: impl FnOnce(&mut Dictionary) -> Result<R, String>,
) -> Result<R, String> {
    let root_id = doc
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|e| format!("missing document catalog: {e}"))?;

    let pages_id = doc
        .get_object(root_id)
        .and_then(Object::as_dict)
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|e| format!("missing page tree: {e}"))?;

    match doc.get_object_mut(pages_id) {
        Ok(Object::Dictionary(dict)) => f(dict),
        Ok(_) => Err("pages object is not a dictionary".to_string()),
        Err(e) => Err(format!("missing pages object: {e}")),
    }
}

fn append_pages(merged: &mut Document, base: &Path, page_ids: &[ObjectId]) -> Result<(), OpError> {
    with_pages_dict(merged, |dict| {
        match dict.get_mut(b"Kids") {
            Ok(Object::Array(kids)) => {
                kids.extend(page_ids.iter().map(|&id| Object::Reference(id)));
            }
            _ => return Err("Kids is not an array".to_string()),
        }

        let count = dict.get(b"Count").and_then(Object::as_i64).unwrap_or(0);
        dict.set("Count", count + page_ids.len() as i64);
        Ok(())
    })
    .map_err(|details| OpError::PageTree {
        path: base.to_path_buf(),
        details,
    })
}

fn retain_single_page(doc: &mut Document, input: &Path, page_id: ObjectId) -> Result<(), OpError> {
    with_pages_dict(doc, |dict| {
        dict.set("Kids", vec![Object::Reference(page_id)]);
        dict.set("Count", 1_i64);
        Ok(())
    })
    .map_err(|details| OpError::PageTree {
        path: input.to_path_buf(),
        details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Stream};
    use tempfile::TempDir;

    /// Build a PDF with `page_count` pages, each carrying the marker text
    /// `{label}-{n}` in its content stream so page order stays checkable
    /// after a merge.
    fn sample_pdf(label: &str, page_count: usize) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::with_capacity(page_count);
        for n in 1..=page_count {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new(
                        "Tj",
                        vec![Object::string_literal(format!("{label}-{n}"))],
                    ),
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

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count as i64,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    fn write_sample(dir: &TempDir, name: &str, label: &str, pages: usize) -> PathBuf {
        let path = dir.path().join(name);
        sample_pdf(label, pages).save(&path).unwrap();
        path
    }

    fn page_marker(doc: &Document, page_num: u32) -> String {
        let page_id = doc.get_pages()[&page_num];
        let content = doc.get_page_content(page_id).unwrap();
        String::from_utf8_lossy(&content).to_string()
    }

    #[test]
    fn merge_concatenates_pages_in_list_order() {
        let dir = TempDir::new().unwrap();
        let a = write_sample(&dir, "a.pdf", "a", 2);
        let b = write_sample(&dir, "b.pdf", "b", 3);
        let output = dir.path().join("merged.pdf");

        let outcome = merge_files(&[a, b], &output).unwrap();
        assert_eq!(outcome.files_merged, 2);
        assert_eq!(outcome.total_pages, 5);

        let merged = Document::load(&output).unwrap();
        assert_eq!(merged.get_pages().len(), 5);
        assert!(page_marker(&merged, 1).contains("a-1"));
        assert!(page_marker(&merged, 2).contains("a-2"));
        assert!(page_marker(&merged, 3).contains("b-1"));
        assert!(page_marker(&merged, 5).contains("b-3"));
    }

    #[test]
    fn merge_single_input_round_trips() {
        let dir = TempDir::new().unwrap();
        let a = write_sample(&dir, "a.pdf", "a", 4);
        let output = dir.path().join("merged.pdf");

        let outcome = merge_files(&[a], &output).unwrap();
        assert_eq!(outcome.files_merged, 1);
        assert_eq!(outcome.total_pages, 4);
    }

    #[test]
    fn merge_without_inputs_is_rejected() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("merged.pdf");

        let err = merge_files(&[], &output).unwrap_err();
        assert!(matches!(err, OpError::NoInputFiles));
    }

    #[test]
    fn merge_names_the_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let a = write_sample(&dir, "a.pdf", "a", 1);
        let missing = dir.path().join("missing.pdf");
        let output = dir.path().join("merged.pdf");

        let err = merge_files(&[a, missing.clone()], &output).unwrap_err();
        match err {
            OpError::Load { path, .. } => assert_eq!(path, missing),
            other => panic!("expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn split_writes_one_file_per_page() {
        let dir = TempDir::new().unwrap();
        let c = write_sample(&dir, "c.pdf", "c", 4);
        let out_dir = TempDir::new().unwrap();

        let outcome = split_file(&c, out_dir.path(), "out_").unwrap();
        assert_eq!(outcome.files_written, 4);

        for n in 1..=4 {
            let path = out_dir.path().join(format!("out_page_{n}.pdf"));
            let doc = Document::load(&path).unwrap();
            assert_eq!(doc.get_pages().len(), 1);
            assert!(page_marker(&doc, 1).contains(&format!("c-{n}")));
        }
        assert!(!out_dir.path().join("out_page_5.pdf").exists());
    }

    #[test]
    fn split_of_zero_page_document_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let empty = write_sample(&dir, "empty.pdf", "e", 0);
        let out_dir = TempDir::new().unwrap();

        let outcome = split_file(&empty, out_dir.path(), "out_").unwrap();
        assert_eq!(outcome.files_written, 0);
        assert_eq!(std::fs::read_dir(out_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn split_takes_prefix_verbatim() {
        let dir = TempDir::new().unwrap();
        let c = write_sample(&dir, "c.pdf", "c", 1);
        let out_dir = TempDir::new().unwrap();

        split_file(&c, out_dir.path(), "weird prefix-").unwrap();
        assert!(out_dir.path().join("weird prefix-page_1.pdf").exists());
    }

    #[test]
    fn page_file_name_formats() {
        assert_eq!(page_file_name("", 1), "page_1.pdf");
        assert_eq!(page_file_name("out_", 12), "out_page_12.pdf");
    }
}
