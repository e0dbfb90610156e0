//! Construction-time validation rules
//!
//! Every rule is a pure function of staged builder state (and, for the
//! configurable checks, an explicit [`ModelConfig`]). A failing rule returns a
//! structured [`Error`] naming the field and the violated constraint.

use crate::choice::Choice;
use crate::config::ModelConfig;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::types::{DataType, Reference};
use once_cell::sync::Lazy;
use regex::Regex;

const MIN_STRING_LENGTH: usize = 1;
const MAX_STRING_LENGTH: usize = 1024 * 1024;
const MAX_ID_LENGTH: usize = 64;

/// `[type]/[id]` with an optional base URL and `_history` suffix
static REFERENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((https?)://([A-Za-z0-9\-\\.:%$]*/)+)?([A-Z][A-Za-z]+)/[A-Za-z0-9\-.]{1,64}(/_history/[A-Za-z0-9\-.]{1,64})?$",
    )
    .expect("reference pattern is a valid regex")
});
const RESOURCE_TYPE_GROUP: usize = 4;

/// Required single-valued field
pub fn require_present<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::MissingRequiredField(field))
}

/// Required repeating field: absent is missing, present-but-empty is empty
pub fn require_non_empty<T>(values: Option<Vec<T>>, field: &'static str) -> Result<Vec<T>> {
    match values {
        None => Err(Error::MissingRequiredField(field)),
        Some(values) if values.is_empty() => Err(Error::EmptyRequiredCollection(field)),
        Some(values) => Ok(values),
    }
}

/// Optional choice field: narrows a staged value into the field's alternatives
pub fn require_choice_of<C: Choice>(value: Option<DataType>, field: &'static str) -> Result<Option<C>> {
    match value {
        None => Ok(None),
        Some(value) => C::from_data(value).map(Some).map_err(|rejected| Error::InvalidChoiceType {
            field,
            actual: rejected.type_name(),
            allowed: C::ALLOWED,
        }),
    }
}

/// Required choice field
pub fn require_choice<C: Choice>(value: Option<DataType>, field: &'static str) -> Result<C> {
    let value = require_present(value, field)?;
    match require_choice_of::<C>(Some(value), field)? {
        Some(choice) => Ok(choice),
        None => Err(Error::MissingRequiredField(field)),
    }
}

pub fn prohibited<T>(value: Option<&T>, field: &'static str) -> Result<()> {
    match value {
        Some(_) => Err(Error::Prohibited(field)),
        None => Ok(()),
    }
}

/// `ele-1`: all elements must have a value or children
pub fn require_value_or_children(config: &ModelConfig, node: &dyn Node) -> Result<()> {
    if !config.check_value_or_children || node.has_value() || node.has_children() {
        return Ok(());
    }
    Err(Error::ValueOrChildrenRequired(node.type_name()))
}

/// FHIR `string`: pattern `[ \r\n\t\S]+`
pub fn check_string(config: &ModelConfig, value: &str) -> Result<()> {
    check_max_length("string", value)?;
    let mut count = 0;
    for ch in value.chars() {
        if !is_fhir_whitespace(ch) {
            check_control_char(config, "string", value, ch)?;
            count += 1;
        } else if !matches!(ch, ' ' | '\t' | '\r' | '\n') {
            return Err(invalid(
                "string",
                format!("'{value}' is not valid with respect to pattern: [ \\r\\n\\t\\S]+"),
            ));
        }
    }
    if count < MIN_STRING_LENGTH {
        return Err(invalid(
            "string",
            format!("trimmed length {count} is less than minimum required length {MIN_STRING_LENGTH}"),
        ));
    }
    Ok(())
}

/// FHIR `code`: pattern `[^\s]+(\s[^\s]+)*`
pub fn check_code(config: &ModelConfig, value: &str) -> Result<()> {
    let first = value.chars().next();
    if first.map_or(true, is_fhir_whitespace) {
        return Err(invalid("code", format!("'{value}' must begin with a non-whitespace character")));
    }
    if value.chars().last().is_some_and(is_fhir_whitespace) {
        return Err(invalid("code", format!("'{value}' must end with a non-whitespace character")));
    }
    let mut previous_is_space = false;
    for ch in value.chars() {
        if is_fhir_whitespace(ch) {
            if ch != ' ' {
                return Err(invalid(
                    "code",
                    format!("'{value}' must not contain whitespace other than a single space"),
                ));
            }
            if previous_is_space {
                return Err(invalid("code", format!("'{value}' must not contain consecutive spaces")));
            }
            previous_is_space = true;
        } else {
            check_control_char(config, "code", value, ch)?;
            previous_is_space = false;
        }
    }
    Ok(())
}

/// FHIR `id`: pattern `[A-Za-z0-9\-\.]{1,64}`
pub fn check_id(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(invalid("id", "value must not be empty".to_string()));
    }
    if value.len() > MAX_ID_LENGTH {
        return Err(invalid(
            "id",
            format!("length {} is greater than maximum allowed length {MAX_ID_LENGTH}", value.len()),
        ));
    }
    if let Some(ch) = value
        .chars()
        .find(|ch| !(ch.is_ascii_alphanumeric() || *ch == '-' || *ch == '.'))
    {
        return Err(invalid("id", format!("'{value}' contains invalid character '{ch}'")));
    }
    Ok(())
}

/// FHIR `uri`: pattern `\S*`
pub fn check_uri(config: &ModelConfig, value: &str) -> Result<()> {
    check_max_length("uri", value)?;
    for ch in value.chars() {
        check_control_char(config, "uri", value, ch)?;
        if is_fhir_whitespace(ch) {
            return Err(invalid("uri", format!("'{value}' must not contain whitespace")));
        }
    }
    Ok(())
}

/// Check that a reference targets one of the resource types an element allows.
///
/// Local (`#id`) and absolute (`scheme:...`) references are not inspected. A
/// relative reference must name its type, either as `Type/id` or as the
/// conditional form `Type?query`. An explicit `Reference.type` must be
/// allowed and agree with the type in the literal reference.
pub fn check_reference_type(
    config: &ModelConfig,
    reference: &Reference,
    field: &'static str,
    allowed: &[&str],
) -> Result<()> {
    if !config.check_reference_types {
        return Ok(());
    }

    let literal = reference
        .reference()
        .and_then(|r| r.value())
        .map(String::as_str);
    let mut literal_type: Option<&str> = None;

    if let Some(literal) = literal.filter(|l| !l.starts_with('#') && !has_scheme(l)) {
        let resource_type = match literal.find('?') {
            Some(index) => Some(&literal[..index]),
            None => REFERENCE_PATTERN
                .captures(literal)
                .and_then(|caps| caps.get(RESOURCE_TYPE_GROUP))
                .map(|m| m.as_str()),
        };
        let resource_type = resource_type.filter(|t| !t.is_empty()).ok_or_else(|| {
            Error::InvalidReferenceType {
                field,
                reason: format!("resource type not found in reference value '{literal}'"),
            }
        })?;
        if !allowed.contains(&resource_type) {
            return Err(Error::InvalidReferenceType {
                field,
                reason: format!(
                    "resource type in reference value '{literal}' must be one of: {allowed:?}"
                ),
            });
        }
        literal_type = Some(resource_type);
    }

    if let Some(declared) = reference.r#type().and_then(|t| t.value()).map(String::as_str) {
        if !allowed.contains(&declared) {
            return Err(Error::InvalidReferenceType {
                field,
                reason: format!("Reference.type '{declared}' must be one of: {allowed:?}"),
            });
        }
        if let Some(found) = literal_type.filter(|found| *found != declared) {
            return Err(Error::InvalidReferenceType {
                field,
                reason: format!("resource type '{found}' does not match Reference.type '{declared}'"),
            });
        }
    }

    Ok(())
}

pub fn check_reference_types(
    config: &ModelConfig,
    references: &[Reference],
    field: &'static str,
    allowed: &[&str],
) -> Result<()> {
    references
        .iter()
        .try_for_each(|reference| check_reference_type(config, reference, field, allowed))
}

/// Reference check for a choice slot that may hold a reference
pub fn check_choice_reference_type<C: Choice>(
    config: &ModelConfig,
    value: Option<&C>,
    field: &'static str,
    allowed: &[&str],
) -> Result<()> {
    let reference = value.and_then(|choice| choice.as_node().as_any().downcast_ref::<Reference>());
    match reference {
        Some(reference) => check_reference_type(config, reference, field, allowed),
        None => Ok(()),
    }
}

fn has_scheme(value: &str) -> bool {
    match value.find(':') {
        Some(index) => index > 0 && value.len() > index + 1,
        None => false,
    }
}

/// Whitespace as the FHIR value patterns see it. The no-break spaces U+00A0,
/// U+2007 and U+202F are content; U+001C..U+001F count as whitespace.
fn is_fhir_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'..='\u{000D}'
            | '\u{001C}'..='\u{001F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

fn check_max_length(type_name: &'static str, value: &str) -> Result<()> {
    let length = value.chars().count();
    if length > MAX_STRING_LENGTH {
        return Err(invalid(
            type_name,
            format!("length {length} is greater than maximum allowed length {MAX_STRING_LENGTH}"),
        ));
    }
    Ok(())
}

fn check_control_char(config: &ModelConfig, type_name: &'static str, value: &str, ch: char) -> Result<()> {
    if config.check_control_chars && (ch as u32) < 32 && !matches!(ch, '\t' | '\n' | '\r') {
        return Err(invalid(
            type_name,
            format!("value contains unsupported control character U+{:04X}: {value:?}", ch as u32),
        ));
    }
    Ok(())
}

fn invalid(type_name: &'static str, reason: String) -> Error {
    Error::InvalidValue { type_name, reason }
}
