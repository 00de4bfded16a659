use std::path::{Path, PathBuf};

use strum::IntoEnumIterator;

use crate::ClassificationLabel;

/// Directory the reference photos are read from by default
pub const DEFAULT_EXEMPLAR_DIR: &str = "ImagenesEntrenamiento";

/// File name of the reference photo for `label` inside an exemplar directory
pub fn exemplar_file_name(label: ClassificationLabel) -> &'static str {
    match label {
        ClassificationLabel::Organized => "Organizado.jpg",
        ClassificationLabel::PartiallyOrganized => "Intermedio.jpg",
        ClassificationLabel::Disorganized => "Desorganizado.jpg",
    }
}

/// One reference photo per label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExemplarSet {
    pub organized: PathBuf,
    pub partial: PathBuf,
    pub disorganized: PathBuf,
}

impl ExemplarSet {
    pub fn new(
        organized: impl Into<PathBuf>,
        partial: impl Into<PathBuf>,
        disorganized: impl Into<PathBuf>,
    ) -> Self {
        Self {
            organized: organized.into(),
            partial: partial.into(),
            disorganized: disorganized.into(),
        }
    }

    /// The standard file names resolved against `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(exemplar_file_name(ClassificationLabel::Organized)),
            dir.join(exemplar_file_name(ClassificationLabel::PartiallyOrganized)),
            dir.join(exemplar_file_name(ClassificationLabel::Disorganized)),
        )
    }

    pub fn get(&self, label: ClassificationLabel) -> &Path {
        match label {
            ClassificationLabel::Organized => &self.organized,
            ClassificationLabel::PartiallyOrganized => &self.partial,
            ClassificationLabel::Disorganized => &self.disorganized,
        }
    }

    /// Paths in presentation order, paired with their label
    pub fn iter(&self) -> impl Iterator<Item = (ClassificationLabel, &Path)> {
        ClassificationLabel::iter().map(move |label| (label, self.get(label)))
    }
}

impl Default for ExemplarSet {
    fn default() -> Self {
        Self::from_dir(DEFAULT_EXEMPLAR_DIR)
    }
}
