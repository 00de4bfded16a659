//! Prompt wording.
//!
//! The text lives in `prompts/<language>/*.txt` and is compiled in. Bump
//! [`PROMPT_VERSION`] whenever any of those files change so logged results can
//! be traced back to the wording that produced them.

use std::borrow::Cow;

use strum::{Display, EnumIter, EnumString};

use crate::ClassificationLabel;

/// Revision of the bundled prompt files
pub const PROMPT_VERSION: u32 = 1;

/// Language of a bundled prompt set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PromptLanguage {
    /// Original wording, asks for `Decisión` / `Descripción` / `Recomendación`
    #[default]
    #[strum(to_string = "es", serialize = "spanish")]
    Es,
    /// Asks for `Decision` / `Description` / `Recommendation`
    #[strum(to_string = "en", serialize = "english")]
    En,
}

/// Static text of the five prompt turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    /// Taxonomy and objective, sent as the system turn
    pub system: Cow<'static, str>,
    pub organized_caption: Cow<'static, str>,
    pub partial_caption: Cow<'static, str>,
    pub disorganized_caption: Cow<'static, str>,
    /// Output format instructions that precede the query image
    pub query_instruction: Cow<'static, str>,
}

impl PromptTemplate {
    /// Bundled wording for `language`
    pub fn bundled(language: PromptLanguage) -> Self {
        match language {
            PromptLanguage::Es => Self::from_static(
                include_str!("../prompts/es/system.txt"),
                include_str!("../prompts/es/organized.txt"),
                include_str!("../prompts/es/partial.txt"),
                include_str!("../prompts/es/disorganized.txt"),
                include_str!("../prompts/es/query.txt"),
            ),
            PromptLanguage::En => Self::from_static(
                include_str!("../prompts/en/system.txt"),
                include_str!("../prompts/en/organized.txt"),
                include_str!("../prompts/en/partial.txt"),
                include_str!("../prompts/en/disorganized.txt"),
                include_str!("../prompts/en/query.txt"),
            ),
        }
    }

    /// Bundled texts, trimmed of the files' trailing newlines
    fn from_static(
        system: &'static str,
        organized: &'static str,
        partial: &'static str,
        disorganized: &'static str,
        query: &'static str,
    ) -> Self {
        Self {
            system: Cow::Borrowed(system.trim()),
            organized_caption: Cow::Borrowed(organized.trim()),
            partial_caption: Cow::Borrowed(partial.trim()),
            disorganized_caption: Cow::Borrowed(disorganized.trim()),
            query_instruction: Cow::Borrowed(query.trim()),
        }
    }

    /// Caption shown next to the exemplar for `label`
    pub fn caption(&self, label: ClassificationLabel) -> &str {
        match label {
            ClassificationLabel::Organized => &self.organized_caption,
            ClassificationLabel::PartiallyOrganized => &self.partial_caption,
            ClassificationLabel::Disorganized => &self.disorganized_caption,
        }
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::bundled(PromptLanguage::default())
    }
}
