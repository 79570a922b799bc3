#![allow(dead_code)]

use lopdf::{dictionary, Document, Object};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct TestFixtures;

impl TestFixtures {
    /// A well-formed PDF with `count` blank A4 pages
    pub fn pdf_with_pages(count: usize) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let kids: Vec<Object> = (0..count)
            .map(|_| {
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
                })
                .into()
            })
            .collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count as i64,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).expect("serialize fixture PDF");
        buffer
    }

    pub fn get_malformed_pdf() -> Vec<u8> {
        b"This is not a valid PDF file".to_vec()
    }

    /// Writes `bytes` to `dir/rel`, creating parent directories.
    pub fn write(dir: &Path, rel: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture directory");
        }
        fs::write(&path, bytes).expect("write fixture file");
        path
    }

    /// Sorted (relative path, contents) pairs of every file under `dir`
    pub fn snapshot(dir: &Path) -> Vec<(PathBuf, Vec<u8>)> {
        WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| entry.expect("fixture entry"))
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                let rel = entry.path().strip_prefix(dir).unwrap().to_path_buf();
                (rel, fs::read(entry.path()).unwrap())
            })
            .collect()
    }
}
