// SPDX-License-Identifier: MPL-2.0
use id3::{Tag, TagLike, Version};
use lopdf::{dictionary, Document, Object};
use media_columns::config::Config;
use media_columns::i18n::fluent::I18n;
use media_columns::{ColumnExtension, FileInfo, LocalFile};
use std::path::Path;
use tempfile::tempdir;

fn extension(lang: &str) -> ColumnExtension {
    let config = Config::default();
    let i18n = I18n::new(Some(lang.to_string()), &config);
    ColumnExtension::new(config, i18n)
}

fn write_pdf(path: &Path, media_box: bool) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut page = dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
    };
    if media_box {
        let media_box: Object = vec![0.into(), 0.into(), 612.into(), 792.into()].into();
        page.set("MediaBox", media_box);
    }
    let first = doc.add_object(page.clone());
    let second = doc.add_object(page);

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![first.into(), second.into()],
            "Count" => 2,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("This is the Title"),
        "Author" => Object::string_literal("Happy Woman"),
    });
    doc.trailer.set("Info", info_id);

    doc.save(path).expect("save pdf");
}

fn run(ext: &ColumnExtension, path: &Path, mime: &str) -> LocalFile {
    let mut file = LocalFile::new(path, mime).expect("local file");
    ext.update_file_info(&mut file);
    file
}

#[test]
fn pdf_columns_are_filled() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("sample one.pdf");
    write_pdf(&path, true);

    let file = run(&extension("en-US"), &path, "application/pdf");
    let attrs = file.attributes();

    assert_eq!(attrs.get("title"), Some("This is the Title"));
    assert_eq!(attrs.get("artist"), Some("Happy Woman"));
    assert_eq!(attrs.get("pages"), Some("2"));
    assert_eq!(attrs.get("width"), Some("216"));
    assert_eq!(attrs.get("height"), Some("280"));
    assert_eq!(attrs.get("album"), Some(""));
}

#[test]
fn every_column_is_written_once() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("doc.pdf");
    write_pdf(&path, true);

    let file = run(&extension("en-US"), &path, "application/pdf");
    let names: Vec<&str> = file.attributes().iter().map(|(name, _)| name).collect();
    let expected: Vec<&str> = media_columns::columns::COLUMN_DEFINITIONS
        .iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn page_size_failure_leaves_other_columns() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("no-box.pdf");
    write_pdf(&path, false);

    let file = run(&extension("en-US"), &path, "application/pdf");
    let attrs = file.attributes();

    assert_eq!(attrs.get("title"), Some("This is the Title"));
    assert_eq!(attrs.get("pages"), Some("2"));
    assert_eq!(attrs.get("width"), Some("Error"));
    assert_eq!(attrs.get("height"), Some("Error"));
}

#[test]
fn error_marker_is_localized() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("no-box.pdf");
    write_pdf(&path, false);

    let file = run(&extension("fr"), &path, "application/pdf");
    assert_eq!(file.attributes().get("width"), Some("Erreur"));
    assert_eq!(file.attributes().get("title"), Some("This is the Title"));
}

#[test]
fn png_dimensions_are_read() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("pixel.png");
    image_rs::RgbImage::new(3, 2).save(&path).expect("save png");

    let file = run(&extension("en-US"), &path, "image/png");
    let attrs = file.attributes();

    assert_eq!(attrs.get("width"), Some("3"));
    assert_eq!(attrs.get("height"), Some("2"));
    // No EXIF block: zero-defaulted accessors still render.
    assert_eq!(attrs.get("orientation"), Some("Unknown"));
    assert_eq!(attrs.get("gps_latitude"), Some("0.0"));
    assert_eq!(attrs.get("model"), Some(""));
    assert_eq!(attrs.get("rating"), Some(""));
}

#[test]
fn id3_tags_without_audio_stream() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("song.mp3");
    std::fs::write(&path, vec![0u8; 512]).expect("write");

    let mut tag = Tag::new();
    tag.set_title("Galway");
    tag.set_artist("Kevin MacLeod");
    tag.set_genre("Folk");
    tag.write_to_path(&path, Version::Id3v24).expect("write tag");

    let file = run(&extension("en-US"), &path, "audio/mpeg");
    let attrs = file.attributes();

    assert_eq!(attrs.get("title"), Some("Galway"));
    assert_eq!(attrs.get("artist"), Some("Kevin MacLeod"));
    assert_eq!(attrs.get("genre"), Some("Folk"));
    assert_eq!(attrs.get("album"), Some(""));
    assert_eq!(attrs.get("bitrate"), Some(""));
    assert_eq!(attrs.get("length"), Some(""));
}

#[test]
fn unreadable_file_leaves_columns_empty() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"not a pdf at all").expect("write");

    let file = run(&extension("en-US"), &path, "application/pdf");
    assert_eq!(file.attributes().non_empty().count(), 0);
    assert!(!file.attributes().is_empty());
}

#[test]
fn unsupported_mime_type_only_seeds() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"hello").expect("write");

    let file = run(&extension("en-US"), &path, "text/plain");
    assert_eq!(file.attributes().non_empty().count(), 0);
    assert_eq!(
        file.attributes().len(),
        media_columns::columns::COLUMN_DEFINITIONS.len()
    );
}

struct HostFile {
    uri: String,
    mime: String,
    written: Vec<(String, String)>,
}

impl FileInfo for HostFile {
    fn uri(&self) -> String {
        self.uri.clone()
    }

    fn mime_type(&self) -> String {
        self.mime.clone()
    }

    fn add_string_attribute(&mut self, name: &str, value: &str) {
        self.written.push((name.to_string(), value.to_string()));
    }
}

#[test]
fn remote_uri_is_not_touched() {
    let mut file = HostFile {
        uri: "http://example.com/a.pdf".into(),
        mime: "application/pdf".into(),
        written: Vec::new(),
    };
    extension("en-US").update_file_info(&mut file);
    assert!(file.written.is_empty());
}

#[test]
fn percent_encoded_uri_is_decoded() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("with space.pdf");
    write_pdf(&path, true);

    let uri = url::Url::from_file_path(&path).expect("file url").to_string();
    assert!(uri.contains("%20"));

    let mut file = HostFile {
        uri,
        mime: "application/pdf".into(),
        written: Vec::new(),
    };
    extension("en-US").update_file_info(&mut file);

    assert!(file
        .written
        .contains(&("pages".to_string(), "2".to_string())));
}

#[test]
fn columns_are_localized() {
    let columns = extension("fr").columns();
    let title = columns
        .iter()
        .find(|c| c.attribute == "title")
        .expect("title column");
    assert_eq!(title.name, "MediaColumns::title_column");
    assert_eq!(title.label, "Titre");
}
