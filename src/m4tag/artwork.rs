//! Artwork loading. The engine reads the image file whole and declares no
//! format; a failed read is a soft error the applier reports as a warning
//! without aborting the run.

use crate::error::Result;
use crate::record::{ArtFormat, Artwork};
use std::fs;
use std::path::Path;

pub fn load(path: &Path) -> Result<Artwork> {
    let data = fs::read(path)?;
    Ok(Artwork {
        data,
        format: ArtFormat::Undefined,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_the_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG\r\n\x1a\nrest-of-image").unwrap();

        let art = load(file.path()).unwrap();
        assert_eq!(art.data, b"\x89PNG\r\n\x1a\nrest-of-image");
        assert_eq!(art.format, ArtFormat::Undefined);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load(Path::new("/no/such/picture.png")).is_err());
    }
}
