use std::path::Path;

use pnm_codec::PnmHeader;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file:      &'a Path,
    file_size: u64,
    header:    PnmHeader
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a Path, file_size: u64, header: PnmHeader) -> Metadata<'a> {
        Metadata {
            file,
            file_size,
            header
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let tag = self.header.format_tag;
        let mut state = serializer.serialize_struct("ImageMetadata", 8)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("format", &tag)?;
        state.serialize_field("family", &tag.family())?;
        state.serialize_field("encoding", &tag.encoding())?;
        state.serialize_field("width", &self.header.width)?;
        state.serialize_field("height", &self.header.height)?;
        state.serialize_field("max_color_value", &self.header.max_color_value)?;
        state.serialize_field("file_size", &self.file_size)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use pnm_core::FormatTag;

    use super::*;

    #[test]
    fn serializes_header_fields() {
        let header = PnmHeader {
            format_tag:      FormatTag::P5,
            width:           3,
            height:          2,
            max_color_value: 1023
        };
        let metadata = Metadata::new(Path::new("gray.pgm"), 30, header);
        let value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "file": "gray.pgm",
                "format": "P5",
                "family": "Grayscale",
                "encoding": "Binary",
                "width": 3,
                "height": 2,
                "max_color_value": 1023,
                "file_size": 30
            })
        );
    }
}
