use crate::types::AnalysisRequest;

const INSTRUCTIONS_ANALYSIS: &str = include_str!("../../prompts/analysis.txt");
const INSTRUCTIONS_AGREEMENT: &str = include_str!("../../prompts/agreement.txt");
const INSTRUCTIONS_CASE_ANALYSIS: &str = include_str!("../../prompts/case_analysis.txt");

/// Build the prompt for a general legal question.
pub fn build_analysis_prompt(request: &AnalysisRequest) -> String {
    let mut prompt = String::new();

    prompt.push_str(INSTRUCTIONS_ANALYSIS);
    prompt.push('\n');

    prompt.push_str(&format!("- Response language: {}\n", request.ui_lang));
    prompt.push_str(&format!("- Jurisdiction / location: {}\n", request.location));
    if request.anon {
        prompt.push_str(
            "- The user asked to stay anonymous: do not ask for or repeat names, \
             phone numbers, addresses or other identifying details.\n",
        );
    } else {
        prompt.push_str("- Anonymous: no\n");
    }
    prompt.push('\n');

    prompt.push_str(&format!("# Question\n\n{}\n", request.user_text));

    prompt
}

/// Build the prompt for reviewing an agreement.
pub fn build_agreement_prompt(details: &str, ui_lang: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(INSTRUCTIONS_AGREEMENT);
    prompt.push('\n');
    prompt.push_str(&format!(
        "Write every value in {ui_lang}. Keep the JSON keys in English.\n\n"
    ));
    prompt.push_str(&format!("# Agreement\n\n{details}\n"));

    prompt
}

/// Build the prompt for analysing a legal fact pattern.
pub fn build_case_analysis_prompt(user_text: &str, ui_lang: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(INSTRUCTIONS_CASE_ANALYSIS);
    prompt.push('\n');
    prompt.push_str(&format!(
        "Write every value in {ui_lang}. Keep the JSON keys in English.\n\n"
    ));
    prompt.push_str(&format!("# Facts\n\n{user_text}\n"));

    prompt
}
