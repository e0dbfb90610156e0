//! Shared fixtures for integration tests

#![allow(dead_code)]

use ferrum_models::resource::{Contract, Legal, Offer, Signer, Term};
use ferrum_models::types::{
    Attachment, Code, CodeableConcept, Coding, DateTime, Extension, FhirString, Id, Meta,
    Reference, Signature, Uri,
};

pub fn string(value: &str) -> FhirString {
    FhirString::of(value).unwrap()
}

pub fn code(value: &str) -> Code {
    Code::of(value).unwrap()
}

pub fn date_time(value: &str) -> DateTime {
    DateTime::of(chrono::DateTime::parse_from_rfc3339(value).unwrap()).unwrap()
}

pub fn reference(value: &str) -> Reference {
    Reference::builder().reference(string(value)).build().unwrap()
}

pub fn concept(text: &str) -> CodeableConcept {
    CodeableConcept::builder().text(string(text)).build().unwrap()
}

pub fn attachment(title: &str) -> Attachment {
    Attachment::builder()
        .content_type(code("application/pdf"))
        .title(string(title))
        .build()
        .unwrap()
}

pub fn signature(who: &str) -> Signature {
    let role = Coding::builder()
        .system(Uri::of("urn:iso-astm:E1762-95:2013").unwrap())
        .code(code("1.2.840.10065.1.12.1.1"))
        .build()
        .unwrap();
    Signature::builder([role], date_time("2024-03-01T12:00:00Z"), reference(who))
        .build()
        .unwrap()
}

pub fn signer(party: &str) -> Signer {
    let role = Coding::builder()
        .system(Uri::of("http://terminology.hl7.org/CodeSystem/contractsignertypecodes").unwrap())
        .code(code("CONSENTER"))
        .build()
        .unwrap();
    Signer::builder(role, reference(party), [signature(party)])
        .build()
        .unwrap()
}

pub fn term(text: &str, groups: Vec<Term>) -> Term {
    let offer = Offer::builder().text(string(text)).build().unwrap();
    Term::builder(offer).groups(groups).build().unwrap()
}

pub fn extension(url: &str, value: &str) -> Extension {
    Extension::builder(url).value(string(value)).build().unwrap()
}

/// A lease contract with nested terms, two signers, legal text and a
/// legally binding attachment
pub fn lease() -> Contract {
    Contract::builder()
        .id("lease-1")
        .meta(Meta::builder().version_id(Id::of("2").unwrap()).build().unwrap())
        .status(code("executed"))
        .issued(date_time("2024-03-01T09:00:00Z"))
        .subject(reference("Patient/p1"))
        .title(string("Residential lease"))
        .topic(concept("lease"))
        .term(term("rent", vec![term("rent.amount", vec![]), term("rent.due", vec![])]))
        .term(term("deposit", vec![]))
        .signer(signer("Patient/p1"))
        .signer(signer("Organization/o1"))
        .legal(Legal::builder(attachment("lease.pdf")).build().unwrap())
        .legally_binding(attachment("signed-lease.pdf"))
        .build()
        .unwrap()
}
