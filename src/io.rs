//! File input and output.

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Creates the file at the given path, as well as any missing parent
/// directories.
pub fn create_file_and_required_directories(file_path: impl AsRef<Path>) -> Result<File> {
    let file_path = file_path.as_ref();
    if let Some(parent) = file_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create directory {}", parent.display()))?;
    }
    File::create(file_path).with_context(|| format!("Could not create {}", file_path.display()))
}

/// Writes the given string as a text file with the specified path, regardless
/// of whether the file already exists.
pub fn write_text_file(text: &str, output_file_path: impl AsRef<Path>) -> Result<()> {
    let output_file_path = output_file_path.as_ref();
    let mut file = create_file_and_required_directories(output_file_path)?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("Could not write {}", output_file_path.display()))
}

/// Calls the given closure with a buffered writer to a newly created file at
/// the given path, and flushes the writer afterwards.
pub fn write_buffered(
    output_file_path: impl AsRef<Path>,
    write: impl FnOnce(&mut BufWriter<File>) -> Result<()>,
) -> Result<()> {
    let output_file_path = output_file_path.as_ref();
    let mut writer = BufWriter::new(create_file_and_required_directories(output_file_path)?);
    write(&mut writer).with_context(|| format!("Could not write {}", output_file_path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Could not write {}", output_file_path.display()))
}

/// Reads the RON (Rusty Object Notation) file at the given path and
/// deserializes the contents into an object of type `T`.
pub fn parse_ron_file<T>(file_path: impl AsRef<Path>) -> Result<T>
where
    T: for<'de> serde::de::Deserialize<'de>,
{
    let file_path = file_path.as_ref();

    let text = fs::read_to_string(file_path)
        .with_context(|| format!("Could not open {}", file_path.display()))?;

    ron::from_str::<T>(&text)
        .with_context(|| format!("Invalid syntax in {}", file_path.display()))
}

/// Serializes the given value of type `T` to RON (Rusty Object Notation)
/// and writes it to the given path.
pub fn write_ron_file<T>(value: &T, output_file_path: impl AsRef<Path>) -> Result<()>
where
    T: serde::ser::Serialize,
{
    let text = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())?;
    write_text_file(&text, output_file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_dir() -> TempDir {
        tempfile::Builder::new().prefix("rtc_io_test").tempdir().unwrap()
    }

    #[test]
    fn written_text_file_can_be_read_back() {
        let dir = temp_dir();
        let path = dir.path().join("nested/dir/text.txt");
        write_text_file("some text", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "some text");
    }

    #[test]
    fn buffered_writes_end_up_in_file() {
        let dir = temp_dir();
        let path = dir.path().join("buffered.txt");
        write_buffered(&path, |writer| {
            writer.write_all(b"abc")?;
            writer.write_all(b"def")?;
            Ok(())
        })
        .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "abcdef");
    }

    #[test]
    fn parsing_missing_ron_file_fails_with_path_in_message() {
        let dir = temp_dir();
        let path = dir.path().join("does_not_exist.ron");
        let error = parse_ron_file::<Vec<u32>>(&path).unwrap_err();
        assert!(format!("{error}").contains("does_not_exist.ron"));
    }

    #[test]
    fn parsing_malformed_ron_file_fails() {
        let dir = temp_dir();
        let path = dir.path().join("malformed.ron");
        write_text_file("[1, 2,, 3", &path).unwrap();
        let error = parse_ron_file::<Vec<u32>>(&path).unwrap_err();
        assert!(format!("{error}").starts_with("Invalid syntax in"));
    }

    #[test]
    fn written_ron_file_can_be_parsed() {
        let dir = temp_dir();
        let path = dir.path().join("values.ron");
        write_ron_file(&vec![1_u32, 2, 3], &path).unwrap();
        assert_eq!(parse_ron_file::<Vec<u32>>(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_directory_is_removed_with_its_contents() {
        let dir = temp_dir();
        let root = dir.path().to_path_buf();
        write_text_file("x", root.join("a/b.txt")).unwrap();
        drop(dir);
        assert!(!root.exists());
    }
}
