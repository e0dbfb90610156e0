//! Construction discipline: required fields, choices, append semantics and
//! copy-and-override

use ferrum_models::resource::{
    AnyResource, Basic, Contract, ContractBuilder, LegallyBinding, Signer, SignerBuilder,
};
use ferrum_models::types::Coding;
use ferrum_models::{Builder, Error, Node, Resource, ToBuilder};

mod test_support;
use test_support::*;

#[test]
fn test_round_trip_through_to_builder() {
    let contract = lease();
    let rebuilt = contract.to_builder().build().unwrap();
    assert_eq!(rebuilt, contract);
    assert_eq!(rebuilt.term().len(), 2);
    assert_eq!(rebuilt.term()[0].group().len(), 2);
}

#[test]
fn test_build_twice_gives_equal_nodes() {
    let builder = ContractBuilder::from(&lease());
    let first = builder.build().unwrap();
    let second = builder.build().unwrap();
    assert_eq!(first, second);
    assert!(!std::ptr::eq(&first, &second));
}

#[test]
fn test_copy_with_override_leaves_original() {
    let original = lease();
    let changed = original.to_builder().status(code("terminated")).build().unwrap();
    assert_eq!(original.status().unwrap().value().unwrap(), "executed");
    assert_eq!(changed.status().unwrap().value().unwrap(), "terminated");
    assert_eq!(changed.signer(), original.signer());
}

#[test]
fn test_signer_without_signature_fails() {
    let role = Coding::builder().code(code("CONSENTER")).build().unwrap();
    let err = Signer::builder(role.clone(), reference("Patient/p1"), Vec::new())
        .build()
        .unwrap_err();
    assert_eq!(err, Error::EmptyRequiredCollection("signature"));
    assert_eq!(err.to_string(), "Required element 'signature' must contain at least one value");

    let err = SignerBuilder::default().r#type(role).build().unwrap_err();
    assert_eq!(err, Error::MissingRequiredField("party"));
}

#[test]
fn test_legally_binding_rejects_coded_concept() {
    let err = Contract::builder()
        .legally_binding(concept("binding"))
        .build()
        .unwrap_err();
    match err {
        Error::InvalidChoiceType {
            field,
            actual,
            allowed,
        } => {
            assert_eq!(field, "legallyBinding");
            assert_eq!(actual, "CodeableConcept");
            assert_eq!(allowed, &["Attachment", "Reference"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_choice_holds_concrete_alternative() {
    let contract = lease();
    match contract.legally_binding() {
        Some(LegallyBinding::Attachment(a)) => {
            assert_eq!(a.title().unwrap().value().unwrap(), "signed-lease.pdf")
        }
        other => panic!("unexpected legallyBinding: {other:?}"),
    }
}

#[test]
fn test_list_setters_append_in_call_order() {
    let contract = Contract::builder()
        .signer(signer("Patient/a"))
        .signers([signer("Patient/b"), signer("Patient/c")])
        .signer(signer("Patient/d"))
        .build()
        .unwrap();
    let parties: Vec<_> = contract
        .signer()
        .iter()
        .map(|s| s.party().reference().unwrap().value().unwrap().as_str())
        .collect();
    assert_eq!(parties, vec!["Patient/a", "Patient/b", "Patient/c", "Patient/d"]);
}

#[test]
fn test_generic_builder_trait() {
    fn rebuild<T: ToBuilder>(node: &T) -> ferrum_models::Result<T> {
        node.to_builder().build()
    }
    let contract = lease();
    assert_eq!(rebuild(&contract).unwrap(), contract);
    let signer = signer("Patient/p1");
    assert_eq!(rebuild(&signer).unwrap(), signer);
}

#[test]
fn test_contained_resources_and_version() {
    let note = Basic::builder(concept("side letter")).id("note").build().unwrap();
    let contract = lease().to_builder().contained(note.clone()).build().unwrap();
    assert_eq!(contract.version_id(), Some("2"));
    assert_eq!(contract.resource_type(), "Contract");
    assert_eq!(contract.contained(), &[AnyResource::from(note)]);
    assert_eq!(contract.contained()[0].resource_type(), "Basic");
    assert_eq!(contract.contained()[0].id(), Some("note"));
}

#[test]
fn test_contract_descriptor_order() {
    let names: Vec<_> = Contract::DESCRIPTOR.fields.iter().map(|f| f.name).collect();
    let topic = names.iter().position(|n| *n == "topic").unwrap();
    let term = names.iter().position(|n| *n == "term").unwrap();
    let binding = names.iter().position(|n| *n == "legallyBinding").unwrap();
    assert!(topic < term && term < binding);
    assert_eq!(lease().kind(), ferrum_models::NodeKind::Resource);
}
