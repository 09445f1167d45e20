/// A field the model reply must contain, with the hint shown to the model
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
}

pub const OUTPUT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "translatedText",
        description: "The translated version of the input text",
    },
    FieldSpec {
        name: "language",
        description: "The language of the translated text",
    },
];

/// Render the formatting instructions embedded in every prompt.
///
/// Built once at startup and kept in the application state.
pub fn describe() -> String {
    let fields = OUTPUT_FIELDS
        .iter()
        .map(|field| format!("\t\"{}\": string  // {}", field.name, field.description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "The output should be a markdown code snippet formatted in the following schema, \
         including the leading and trailing \"```json\" and \"```\":\n\n```json\n{{\n{}\n}}\n```",
        fields
    )
}
