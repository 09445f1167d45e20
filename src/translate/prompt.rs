use regex::Regex;
use std::collections::HashMap;

use super::error::TranslateError;

pub const TRANSLATION_TEMPLATE: &str = "
You are an expert translator. Translate the following text into {targetLanguage}. \
Respond only with a JSON object in this format:

{format_instructions}

Text: {text}
";

/// String template with `{name}` placeholders.
///
/// Values are substituted in a single pass, so placeholder-looking text
/// inside a value is kept literally.
pub struct PromptTemplate {
    template: String,
    partials: HashMap<String, String>,
    placeholder: Regex,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self, TranslateError> {
        let placeholder = Regex::new(r"\{(\w+)\}")
            .map_err(|e| TranslateError::Template(e.to_string()))?;
        Ok(Self {
            template: template.into(),
            partials: HashMap::new(),
            placeholder,
        })
    }

    /// Template used for every translation, with the format instructions
    /// already bound.
    pub fn translation(format_instructions: &str) -> Result<Self, TranslateError> {
        Ok(Self::new(TRANSLATION_TEMPLATE)?
            .with_partial("format_instructions", format_instructions))
    }

    /// Bind a variable once so callers only supply the per-call ones
    pub fn with_partial(mut self, name: &str, value: &str) -> Self {
        self.partials.insert(name.to_string(), value.to_string());
        self
    }

    pub fn render(&self, text: &str, target_language: &str) -> Result<String, TranslateError> {
        let vars = HashMap::from([("text", text), ("targetLanguage", target_language)]);
        self.format(&vars)
    }

    pub fn format(&self, vars: &HashMap<&str, &str>) -> Result<String, TranslateError> {
        if let Some(missing) = self
            .placeholder
            .captures_iter(&self.template)
            .map(|caps| caps[1].to_string())
            .find(|name| self.lookup(vars, name).is_none())
        {
            return Err(TranslateError::Template(format!(
                "missing value for template variable '{}'",
                missing
            )));
        }

        let rendered = self
            .placeholder
            .replace_all(&self.template, |caps: &regex::Captures| {
                self.lookup(vars, &caps[1]).unwrap_or_default().to_string()
            });
        Ok(rendered.into_owned())
    }

    fn lookup<'a>(&'a self, vars: &HashMap<&str, &'a str>, name: &str) -> Option<&'a str> {
        vars.get(name)
            .copied()
            .or_else(|| self.partials.get(name).map(String::as_str))
    }
}
