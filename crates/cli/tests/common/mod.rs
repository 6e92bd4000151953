#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Build a minimal DOCX-shaped archive whose document body wraps `text`.
pub fn docx(text: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    writer.start_file("[Content_Types].xml", options).unwrap();
    writer.write_all(b"<Types/>").unwrap();

    writer.start_file("word/document.xml", options).unwrap();
    let body = format!("<w:document><w:body><w:t>{text}</w:t></w:body></w:document>");
    writer.write_all(body.as_bytes()).unwrap();

    writer.finish().unwrap().into_inner()
}

pub fn write_docx(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, docx(text)).unwrap();
}

pub fn document_xml(bytes: &[u8]) -> String {
    use std::io::Read;
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut s = String::new();
    archive.by_name("word/document.xml").unwrap().read_to_string(&mut s).unwrap();
    s
}
