use crate::error::validation::ValidationError;

/// Parses a Discord user ID typed by an admin.
///
/// Accepts a bare ID or a user mention (`<@id>` / `<@!id>`), with surrounding whitespace.
///
/// # Arguments
/// - `value` - Raw input from a modal, reply or command option
///
/// # Returns
/// - `Ok(u64)` - Parsed, non-zero user ID
/// - `Err(ValidationError::InvalidUserId)` - Input is not a user ID
pub fn parse_user_id(value: &str) -> Result<u64, ValidationError> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix("<@")
        .and_then(|rest| rest.strip_suffix('>'))
        .map(|rest| rest.strip_prefix('!').unwrap_or(rest))
        .unwrap_or(trimmed);

    parse_snowflake(inner).ok_or_else(|| ValidationError::InvalidUserId(value.to_string()))
}

/// Parses a Discord channel ID typed by an admin.
///
/// Accepts a bare ID or a channel mention (`<#id>`), with surrounding whitespace.
///
/// # Arguments
/// - `value` - Raw input from a modal or command option
///
/// # Returns
/// - `Ok(u64)` - Parsed, non-zero channel ID
/// - `Err(ValidationError::InvalidChannelId)` - Input is not a channel ID
pub fn parse_channel_id(value: &str) -> Result<u64, ValidationError> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix("<#")
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(trimmed);

    parse_snowflake(inner).ok_or_else(|| ValidationError::InvalidChannelId(value.to_string()))
}

/// Trims free text and rejects it when nothing is left.
///
/// # Arguments
/// - `value` - Raw input
/// - `label` - Name of the field, used in the error message
///
/// # Returns
/// - `Ok(String)` - Trimmed text
/// - `Err(ValidationError::EmptyText)` - Input was blank
pub fn non_empty_text(value: &str, label: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText(label));
    }
    Ok(trimmed.to_string())
}

fn parse_snowflake(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<u64>().ok().filter(|id| *id != 0)
}
