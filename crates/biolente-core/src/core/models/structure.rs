use std::fmt;
use std::str::FromStr;

/// Text formats the renderer can build a molecular model from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureFormat {
    Pdb,
    Sdf,
    Mol,
    Xyz,
    /// Only accepted through file import.
    Cif,
}

impl StructureFormat {
    pub const ALL: [StructureFormat; 5] = [
        StructureFormat::Pdb,
        StructureFormat::Sdf,
        StructureFormat::Mol,
        StructureFormat::Xyz,
        StructureFormat::Cif,
    ];

    /// Format tag handed to the renderer.
    pub fn id(&self) -> &'static str {
        match self {
            StructureFormat::Pdb => "pdb",
            StructureFormat::Sdf => "sdf",
            StructureFormat::Mol => "mol",
            StructureFormat::Xyz => "xyz",
            StructureFormat::Cif => "cif",
        }
    }

    fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == extension)
    }
}

impl FromStr for StructureFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(&s.to_ascii_lowercase())
            .ok_or_else(|| format!("Unknown structure format '{}'", s))
    }
}

impl fmt::Display for StructureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Raster and vector image formats shown as-is, without the molecular renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Webp,
    Svg,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Webp => "image/webp",
            ImageFormat::Svg => "image/svg+xml",
        }
    }

    fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "bmp" => Some(ImageFormat::Bmp),
            "webp" => Some(ImageFormat::Webp),
            "svg" => Some(ImageFormat::Svg),
            _ => None,
        }
    }
}

/// What an uploaded file is, judged by its extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Structure(StructureFormat),
    Image(ImageFormat),
}

impl FileKind {
    /// Classifies a file name by the text after its last `.`, case-insensitively.
    ///
    /// The content is never inspected. Names without a `.` are unsupported.
    pub fn sniff(file_name: &str) -> Option<FileKind> {
        let (_, extension) = file_name.rsplit_once('.')?;
        let extension = extension.to_ascii_lowercase();
        StructureFormat::from_extension(&extension)
            .map(FileKind::Structure)
            .or_else(|| ImageFormat::from_extension(&extension).map(FileKind::Image))
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Structure(format) => write!(f, "molecular structure ({})", format),
            FileKind::Image(format) => write!(f, "image ({})", format.mime_type()),
        }
    }
}
