pub const SYSTEM_PROMPT: &str = include_str!("prompts/system.md");

pub const DEFAULT_USER_REQUEST: &str = "Generate synthetic data";

/// The user turn sent with `SYSTEM_PROMPT`; blank requests fall back to `DEFAULT_USER_REQUEST`.
pub fn user_prompt(request: Option<&str>) -> String {
    match request.map(str::trim) {
        Some(request) if !request.is_empty() => request.to_string(),
        _ => DEFAULT_USER_REQUEST.to_string(),
    }
}
