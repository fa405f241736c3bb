use crate::i18n::LanguageRegistry;

/// Build the instruction sent to the model for one target language.
///
/// The source document is embedded verbatim after the rules.
pub fn build_translation_prompt(target_language: &str, source_json: &str) -> String {
    let source_language = LanguageRegistry::get().canonical().name;

    format!(
        r#"You are a professional translator specializing in technical and business content for software products.

Translate the following JSON content from {source} to {target}.

IMPORTANT RULES:
1. Maintain the exact same JSON structure
2. Translate all text values, keeping every key unchanged
3. Use professional, industry-appropriate terminology for business and technical software
4. Keep formatting consistent (capitalization, punctuation)
5. Preserve placeholders and format tokens exactly as they are (e.g., {{name}}, {{{{count}}}}, %s, %d)
6. Be culturally appropriate for a European business context
7. Maintain a formality level appropriate for B2B software
8. Return ONLY valid JSON, no explanations, no markdown and no code fences
9. Use natural local phrasing rather than literal translation

JSON to translate:
{json}"#,
        source = source_language,
        target = target_language,
        json = source_json,
    )
}
