//! Schema metadata lookups over the static descriptor tables

use crate::node::{FieldDescriptor, TypeDescriptor};
use crate::resource::{resource_descriptor, Answer, Friendly, Legal, Offer, Signer, Term};
use crate::types::element_descriptor;
use heck::ToUpperCamelCase;

/// Descriptor of any known type: resources, backbone elements, data types
pub fn type_descriptor(name: &str) -> Option<&'static TypeDescriptor> {
    resource_descriptor(name)
        .or_else(|| element_descriptor(name))
        .or_else(|| {
            [
                Signer::DESCRIPTOR,
                Term::DESCRIPTOR,
                Offer::DESCRIPTOR,
                Answer::DESCRIPTOR,
                Friendly::DESCRIPTOR,
                Legal::DESCRIPTOR,
            ]
            .into_iter()
            .find(|descriptor| descriptor.name == name)
        })
}

pub fn element_info(
    descriptor: &'static TypeDescriptor,
    element_name: &str,
) -> Option<&'static FieldDescriptor> {
    descriptor.field(element_name)
}

pub fn is_choice_element(descriptor: &'static TypeDescriptor, element_name: &str) -> bool {
    element_info(descriptor, element_name).is_some_and(FieldDescriptor::is_choice)
}

pub fn is_required_element(descriptor: &'static TypeDescriptor, element_name: &str) -> bool {
    element_info(descriptor, element_name).is_some_and(|f| f.cardinality.is_required())
}

pub fn is_repeating_element(descriptor: &'static TypeDescriptor, element_name: &str) -> bool {
    element_info(descriptor, element_name).is_some_and(|f| f.cardinality.is_repeating())
}

pub fn is_summary_element(descriptor: &'static TypeDescriptor, element_name: &str) -> bool {
    element_info(descriptor, element_name).is_some_and(|f| f.summary)
}

pub fn is_modifier_element(descriptor: &'static TypeDescriptor, element_name: &str) -> bool {
    element_info(descriptor, element_name).is_some_and(|f| f.modifier)
}

/// Serialized name of a choice element for one of its types:
/// `("value", "dateTime")` gives `valueDateTime`
pub fn choice_element_name(element_name: &str, type_name: &str) -> String {
    format!("{element_name}{}", type_name.to_upper_camel_case())
}

/// Every serialized name a choice element may take, in declared type order
pub fn choice_element_names(descriptor: &'static TypeDescriptor, element_name: &str) -> Vec<String> {
    match element_info(descriptor, element_name) {
        Some(field) if field.is_choice() => field
            .types
            .type_names()
            .iter()
            .map(|type_name| choice_element_name(element_name, type_name))
            .collect(),
        _ => Vec::new(),
    }
}

/// Map a serialized name such as `legallyBindingReference` back to the
/// choice element and the type name it carries
pub fn resolve_choice_element(
    descriptor: &'static TypeDescriptor,
    serialized_name: &str,
) -> Option<(&'static FieldDescriptor, &'static str)> {
    descriptor
        .fields
        .iter()
        .filter(|field| field.is_choice())
        .filter_map(|field| {
            let suffix = serialized_name.strip_prefix(field.name)?;
            field
                .types
                .type_names()
                .iter()
                .find(|type_name| type_name.to_upper_camel_case() == suffix)
                .map(|type_name| (field, *type_name))
        })
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Contract;

    #[test]
    fn test_choice_element_name() {
        assert_eq!(choice_element_name("value", "dateTime"), "valueDateTime");
        assert_eq!(choice_element_name("value", "string"), "valueString");
        assert_eq!(choice_element_name("topic", "CodeableConcept"), "topicCodeableConcept");
    }

    #[test]
    fn test_choice_element_names() {
        assert_eq!(
            choice_element_names(Contract::DESCRIPTOR, "legallyBinding"),
            vec!["legallyBindingAttachment", "legallyBindingReference"]
        );
        assert!(choice_element_names(Contract::DESCRIPTOR, "status").is_empty());
    }

    #[test]
    fn test_element_flags() {
        let contract = Contract::DESCRIPTOR;
        assert!(is_choice_element(contract, "topic"));
        assert!(!is_choice_element(contract, "term"));
        assert!(is_repeating_element(contract, "term"));
        assert!(is_summary_element(contract, "status"));
        assert!(is_modifier_element(contract, "status"));
        assert!(!is_required_element(contract, "status"));
        assert!(is_required_element(Signer::DESCRIPTOR, "signature"));
        assert!(element_info(contract, "nope").is_none());
    }

    #[test]
    fn test_type_descriptor_lookup() {
        assert_eq!(type_descriptor("Contract.Term.Offer").unwrap().name, "Contract.Term.Offer");
        assert_eq!(type_descriptor("dateTime").unwrap().name, "dateTime");
        assert_eq!(type_descriptor("Meta").unwrap().name, "Meta");
        assert!(type_descriptor("Unknown").is_none());
    }

    #[test]
    fn test_resolve_choice_element() {
        let (field, type_name) =
            resolve_choice_element(Answer::DESCRIPTOR, "valueDateTime").unwrap();
        assert_eq!(field.name, "value");
        assert_eq!(type_name, "dateTime");
        assert!(resolve_choice_element(Answer::DESCRIPTOR, "valueCodeableConcept").is_none());
        assert!(resolve_choice_element(Contract::DESCRIPTOR, "status").is_none());
    }
}
