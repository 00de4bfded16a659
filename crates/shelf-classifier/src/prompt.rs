use std::path::Path;

use azure_openai_ox::{ContentPart, Message};
use strum::EnumCount;

use crate::{ClassificationLabel, EncodeError, ExemplarSet, PromptTemplate, encode_image};

/// Number of turns produced by [`build_messages`]: system, one per exemplar, query
pub const TURN_COUNT: usize = ClassificationLabel::COUNT + 2;

/// Assemble the few-shot prompt for classifying `query`.
///
/// Turns, in order: the system text, one `[caption, image]` user turn per
/// exemplar (organized, partially organized, disorganized), and a final
/// `[instruction, query image]` user turn. The output depends only on the
/// inputs and the file contents.
///
/// # Errors
///
/// Returns the first [`EncodeError`] hit while reading the exemplars or the
/// query image; no partial prompt is returned.
pub fn build_messages(
    exemplars: &ExemplarSet,
    query: impl AsRef<Path>,
    template: &PromptTemplate,
) -> Result<Vec<Message>, EncodeError> {
    let mut messages = Vec::with_capacity(TURN_COUNT);
    messages.push(Message::system(&*template.system));

    for (label, path) in exemplars.iter() {
        let image = encode_image(path)?;
        messages.push(Message::user_parts([
            ContentPart::text(template.caption(label)),
            image.to_content_part(),
        ]));
    }

    let query = encode_image(query)?;
    messages.push(Message::user_parts([
        ContentPart::text(&*template.query_instruction),
        query.to_content_part(),
    ]));

    log::debug!("assembled {} prompt turns", messages.len());
    Ok(messages)
}
