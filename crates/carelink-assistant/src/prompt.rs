/// Answer cue the template ends with; generated text is truncated to
/// whatever follows it
pub(crate) const REPLY_DELIMITER: &str = "Companion:";

/// Build the fixed conversational prompt around a transcript
pub(crate) fn build_prompt(transcript: &str) -> String {
    format!(
        "You are a warm, patient voice companion for an elderly person. \
         Reply to what they said in one or two short, friendly sentences, \
         in plain language.\n\nUser: {transcript}\n{REPLY_DELIMITER}"
    )
}

/// Extract the reply from raw generated text
///
/// Keeps the text after the delimiter when the model echoed the prompt,
/// otherwise returns the whole trimmed generation.
pub(crate) fn extract_reply(generated: &str) -> String {
    match generated.split_once(REPLY_DELIMITER) {
        Some((_, reply)) => reply.trim().to_owned(),
        None => generated.trim().to_owned(),
    }
}
