//! Contract: a legally enforceable agreement and its backbone elements
//!
//! `Contract.Term` is recursive through `group`, and several fields are choice
//! elements (`topic[x]`, `legallyBinding[x]`, `Answer.value[x]`,
//! `Friendly.content[x]`, `Legal.content[x]`).

use super::{check_resource_base, AnyResource};
use crate::builder::{finish, impl_builder};
use crate::choice::{choice_type, Choice};
use crate::config;
use crate::error::Result;
use crate::node::{
    Cardinality, FieldDescriptor, FieldValue, Node, NodeKind, Resource, TypeDescriptor,
};
use crate::types::{
    Attachment, Boolean, Code, CodeableConcept, Coding, DataType, Date, DateTime, Decimal,
    Extension, FhirString, Identifier, Integer, Meta, Period, Quantity, Reference, Signature, Uri,
};
use crate::validation;
use std::any::Any;

choice_type! {
    /// `Contract.topic[x]` and `Contract.term.topic[x]`
    pub enum ContractTopic {
        CodeableConcept(CodeableConcept),
        Reference(Reference),
    }
}

choice_type! {
    /// `Contract.legallyBinding[x]`
    pub enum LegallyBinding {
        Attachment(Attachment),
        Reference(Reference),
    }
}

choice_type! {
    /// `Contract.friendly.content[x]` and `Contract.legal.content[x]`
    pub enum ContractContent {
        Attachment(Attachment),
        Reference(Reference),
    }
}

choice_type! {
    /// `Contract.term.offer.answer.value[x]`
    pub enum AnswerValue {
        Boolean(Boolean),
        Decimal(Decimal),
        Integer(Integer),
        Date(Date),
        DateTime(DateTime),
        String(FhirString),
        Uri(Uri),
        Attachment(Attachment),
        Coding(Coding),
        Quantity(Quantity),
        Reference(Reference),
    }
}

const SIGNER_PARTY_TARGETS: &[&str] = &[
    "Organization",
    "Patient",
    "Practitioner",
    "PractitionerRole",
    "RelatedPerson",
];

const CONTENT_TARGETS: &[&str] = &["Composition", "DocumentReference", "QuestionnaireResponse"];

const LEGALLY_BINDING_TARGETS: &[&str] = &[
    "Composition",
    "DocumentReference",
    "QuestionnaireResponse",
    "Contract",
];

/// Legal agreement between parties
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    id: Option<String>,
    meta: Option<Meta>,
    implicit_rules: Option<Uri>,
    language: Option<Code>,
    contained: Vec<AnyResource>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    identifier: Vec<Identifier>,
    url: Option<Uri>,
    version: Option<FhirString>,
    status: Option<Code>,
    issued: Option<DateTime>,
    applies: Option<Period>,
    subject: Vec<Reference>,
    name: Option<FhirString>,
    title: Option<FhirString>,
    topic: Option<ContractTopic>,
    r#type: Option<CodeableConcept>,
    term: Vec<Term>,
    signer: Vec<Signer>,
    friendly: Vec<Friendly>,
    legal: Vec<Legal>,
    legally_binding: Option<LegallyBinding>,
}

impl Contract {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Contract",
        kind: NodeKind::Resource,
        fields: &[
            FieldDescriptor::META,
            FieldDescriptor::IMPLICIT_RULES,
            FieldDescriptor::LANGUAGE,
            FieldDescriptor::CONTAINED,
            FieldDescriptor::EXTENSION,
            FieldDescriptor::MODIFIER_EXTENSION,
            FieldDescriptor::new("identifier", Cardinality::OptionalMany, "Identifier").summary(),
            FieldDescriptor::new("url", Cardinality::OptionalOne, "uri"),
            FieldDescriptor::new("version", Cardinality::OptionalOne, "string"),
            FieldDescriptor::new("status", Cardinality::OptionalOne, "code")
                .summary()
                .modifier(),
            FieldDescriptor::new("issued", Cardinality::OptionalOne, "dateTime").summary(),
            FieldDescriptor::new("applies", Cardinality::OptionalOne, "Period").summary(),
            FieldDescriptor::new("subject", Cardinality::OptionalMany, "Reference").summary(),
            FieldDescriptor::new("name", Cardinality::OptionalOne, "string"),
            FieldDescriptor::new("title", Cardinality::OptionalOne, "string"),
            FieldDescriptor::choice("topic", Cardinality::OptionalOne, ContractTopic::ALLOWED),
            FieldDescriptor::new("type", Cardinality::OptionalOne, "CodeableConcept").summary(),
            FieldDescriptor::new("term", Cardinality::OptionalMany, "Contract.Term"),
            FieldDescriptor::new("signer", Cardinality::OptionalMany, "Contract.Signer"),
            FieldDescriptor::new("friendly", Cardinality::OptionalMany, "Contract.Friendly"),
            FieldDescriptor::new("legal", Cardinality::OptionalMany, "Contract.Legal"),
            FieldDescriptor::choice(
                "legallyBinding",
                Cardinality::OptionalOne,
                LegallyBinding::ALLOWED,
            ),
        ],
    };

    pub fn builder() -> ContractBuilder {
        ContractBuilder::default()
    }

    pub fn implicit_rules(&self) -> Option<&Uri> {
        self.implicit_rules.as_ref()
    }

    pub fn language(&self) -> Option<&Code> {
        self.language.as_ref()
    }

    pub fn identifier(&self) -> &[Identifier] {
        &self.identifier
    }

    pub fn url(&self) -> Option<&Uri> {
        self.url.as_ref()
    }

    pub fn version(&self) -> Option<&FhirString> {
        self.version.as_ref()
    }

    pub fn status(&self) -> Option<&Code> {
        self.status.as_ref()
    }

    /// When this Contract was issued
    pub fn issued(&self) -> Option<&DateTime> {
        self.issued.as_ref()
    }

    /// Effective time
    pub fn applies(&self) -> Option<&Period> {
        self.applies.as_ref()
    }

    /// Contract target
    pub fn subject(&self) -> &[Reference] {
        &self.subject
    }

    pub fn name(&self) -> Option<&FhirString> {
        self.name.as_ref()
    }

    pub fn title(&self) -> Option<&FhirString> {
        self.title.as_ref()
    }

    /// Focus of contract interest
    pub fn topic(&self) -> Option<&ContractTopic> {
        self.topic.as_ref()
    }

    pub fn r#type(&self) -> Option<&CodeableConcept> {
        self.r#type.as_ref()
    }

    /// Contract Term List
    pub fn term(&self) -> &[Term] {
        &self.term
    }

    /// Contract Signatory
    pub fn signer(&self) -> &[Signer] {
        &self.signer
    }

    /// Contract Friendly Language
    pub fn friendly(&self) -> &[Friendly] {
        &self.friendly
    }

    /// Contract Legal Language
    pub fn legal(&self) -> &[Legal] {
        &self.legal
    }

    /// Binding Contract
    pub fn legally_binding(&self) -> Option<&LegallyBinding> {
        self.legally_binding.as_ref()
    }

    pub fn to_builder(&self) -> ContractBuilder {
        ContractBuilder {
            id: self.id.clone(),
            meta: self.meta.clone(),
            implicit_rules: self.implicit_rules.clone(),
            language: self.language.clone(),
            contained: self.contained.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            identifier: self.identifier.clone(),
            url: self.url.clone(),
            version: self.version.clone(),
            status: self.status.clone(),
            issued: self.issued.clone(),
            applies: self.applies.clone(),
            subject: self.subject.clone(),
            name: self.name.clone(),
            title: self.title.clone(),
            topic: self.topic.clone().map(Choice::into_data),
            r#type: self.r#type.clone(),
            term: self.term.clone(),
            signer: self.signer.clone(),
            friendly: self.friendly.clone(),
            legal: self.legal.clone(),
            legally_binding: self.legally_binding.clone().map(Choice::into_data),
        }
    }
}

impl Node for Contract {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::optional(self.meta.as_ref()),
            1 => FieldValue::optional(self.implicit_rules.as_ref()),
            2 => FieldValue::optional(self.language.as_ref()),
            3 => FieldValue::list(&self.contained),
            4 => FieldValue::list(&self.extension),
            5 => FieldValue::list(&self.modifier_extension),
            6 => FieldValue::list(&self.identifier),
            7 => FieldValue::optional(self.url.as_ref()),
            8 => FieldValue::optional(self.version.as_ref()),
            9 => FieldValue::optional(self.status.as_ref()),
            10 => FieldValue::optional(self.issued.as_ref()),
            11 => FieldValue::optional(self.applies.as_ref()),
            12 => FieldValue::list(&self.subject),
            13 => FieldValue::optional(self.name.as_ref()),
            14 => FieldValue::optional(self.title.as_ref()),
            15 => FieldValue::choice(self.topic.as_ref()),
            16 => FieldValue::optional(self.r#type.as_ref()),
            17 => FieldValue::list(&self.term),
            18 => FieldValue::list(&self.signer),
            19 => FieldValue::list(&self.friendly),
            20 => FieldValue::list(&self.legal),
            21 => FieldValue::choice(self.legally_binding.as_ref()),
            _ => FieldValue::Absent,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Resource for Contract {
    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn contained(&self) -> &[AnyResource] {
        &self.contained
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContractBuilder {
    id: Option<String>,
    meta: Option<Meta>,
    implicit_rules: Option<Uri>,
    language: Option<Code>,
    contained: Vec<AnyResource>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    identifier: Vec<Identifier>,
    url: Option<Uri>,
    version: Option<FhirString>,
    status: Option<Code>,
    issued: Option<DateTime>,
    applies: Option<Period>,
    subject: Vec<Reference>,
    name: Option<FhirString>,
    title: Option<FhirString>,
    topic: Option<DataType>,
    r#type: Option<CodeableConcept>,
    term: Vec<Term>,
    signer: Vec<Signer>,
    friendly: Vec<Friendly>,
    legal: Vec<Legal>,
    legally_binding: Option<DataType>,
}

impl ContractBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn implicit_rules(mut self, implicit_rules: Uri) -> Self {
        self.implicit_rules = Some(implicit_rules);
        self
    }

    pub fn language(mut self, language: Code) -> Self {
        self.language = Some(language);
        self
    }

    pub fn contained(mut self, resource: impl Into<AnyResource>) -> Self {
        self.contained.push(resource.into());
        self
    }

    pub fn contained_all(mut self, resources: impl IntoIterator<Item = AnyResource>) -> Self {
        self.contained.extend(resources);
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.extension.extend(extensions);
        self
    }

    pub fn modifier_extension(mut self, extension: Extension) -> Self {
        self.modifier_extension.push(extension);
        self
    }

    pub fn modifier_extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.modifier_extension.extend(extensions);
        self
    }

    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.identifier.push(identifier);
        self
    }

    pub fn identifiers(mut self, identifiers: impl IntoIterator<Item = Identifier>) -> Self {
        self.identifier.extend(identifiers);
        self
    }

    pub fn url(mut self, url: Uri) -> Self {
        self.url = Some(url);
        self
    }

    pub fn version(mut self, version: FhirString) -> Self {
        self.version = Some(version);
        self
    }

    pub fn status(mut self, status: Code) -> Self {
        self.status = Some(status);
        self
    }

    pub fn issued(mut self, issued: DateTime) -> Self {
        self.issued = Some(issued);
        self
    }

    pub fn applies(mut self, applies: Period) -> Self {
        self.applies = Some(applies);
        self
    }

    pub fn subject(mut self, subject: Reference) -> Self {
        self.subject.push(subject);
        self
    }

    pub fn subjects(mut self, subjects: impl IntoIterator<Item = Reference>) -> Self {
        self.subject.extend(subjects);
        self
    }

    pub fn name(mut self, name: FhirString) -> Self {
        self.name = Some(name);
        self
    }

    pub fn title(mut self, title: FhirString) -> Self {
        self.title = Some(title);
        self
    }

    /// Stage `topic[x]`; `CodeableConcept` or `Reference`
    pub fn topic(mut self, topic: impl Into<DataType>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn r#type(mut self, r#type: CodeableConcept) -> Self {
        self.r#type = Some(r#type);
        self
    }

    pub fn term(mut self, term: Term) -> Self {
        self.term.push(term);
        self
    }

    pub fn terms(mut self, terms: impl IntoIterator<Item = Term>) -> Self {
        self.term.extend(terms);
        self
    }

    pub fn signer(mut self, signer: Signer) -> Self {
        self.signer.push(signer);
        self
    }

    pub fn signers(mut self, signers: impl IntoIterator<Item = Signer>) -> Self {
        self.signer.extend(signers);
        self
    }

    pub fn friendly(mut self, friendly: Friendly) -> Self {
        self.friendly.push(friendly);
        self
    }

    pub fn friendly_all(mut self, friendly: impl IntoIterator<Item = Friendly>) -> Self {
        self.friendly.extend(friendly);
        self
    }

    pub fn legal(mut self, legal: Legal) -> Self {
        self.legal.push(legal);
        self
    }

    pub fn legal_all(mut self, legal: impl IntoIterator<Item = Legal>) -> Self {
        self.legal.extend(legal);
        self
    }

    /// Stage `legallyBinding[x]`; `Attachment` or `Reference`
    pub fn legally_binding(mut self, legally_binding: impl Into<DataType>) -> Self {
        self.legally_binding = Some(legally_binding.into());
        self
    }

    pub fn build(&self) -> Result<Contract> {
        finish("Contract", self.validate())
    }

    fn validate(&self) -> Result<Contract> {
        let config = config::current();
        check_resource_base(self.id.as_deref(), &self.contained)?;
        Ok(Contract {
            id: self.id.clone(),
            meta: self.meta.clone(),
            implicit_rules: self.implicit_rules.clone(),
            language: self.language.clone(),
            contained: self.contained.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            identifier: self.identifier.clone(),
            url: self.url.clone(),
            version: self.version.clone(),
            status: self.status.clone(),
            issued: self.issued.clone(),
            applies: self.applies.clone(),
            subject: self.subject.clone(),
            name: self.name.clone(),
            title: self.title.clone(),
            topic: validation::require_choice_of(self.topic.clone(), "topic")?,
            r#type: self.r#type.clone(),
            term: self.term.clone(),
            signer: self.signer.clone(),
            friendly: self.friendly.clone(),
            legal: self.legal.clone(),
            legally_binding: {
                let value = validation::require_choice_of::<LegallyBinding>(
                    self.legally_binding.clone(),
                    "legallyBinding",
                )?;
                validation::check_choice_reference_type(
                    &config,
                    value.as_ref(),
                    "legallyBinding",
                    LEGALLY_BINDING_TARGETS,
                )?;
                value
            },
        })
    }
}

impl_builder!(Contract, ContractBuilder);

/// Contract Signatory: parties with legal standing who sign the contract
#[derive(Debug, Clone, PartialEq)]
pub struct Signer {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    r#type: Coding,
    party: Reference,
    signature: Vec<Signature>,
}

impl Signer {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Contract.Signer",
        kind: NodeKind::BackboneElement,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::MODIFIER_EXTENSION,
            FieldDescriptor::new("type", Cardinality::RequiredOne, "Coding"),
            FieldDescriptor::new("party", Cardinality::RequiredOne, "Reference"),
            FieldDescriptor::new("signature", Cardinality::RequiredMany, "Signature"),
        ],
    };

    pub fn builder(
        r#type: Coding,
        party: Reference,
        signature: impl IntoIterator<Item = Signature>,
    ) -> SignerBuilder {
        SignerBuilder {
            r#type: Some(r#type),
            party: Some(party),
            signature: Some(signature.into_iter().collect()),
            ..SignerBuilder::default()
        }
    }

    /// Contract Signatory Role
    pub fn r#type(&self) -> &Coding {
        &self.r#type
    }

    /// Contract Signatory Party
    pub fn party(&self) -> &Reference {
        &self.party
    }

    pub fn signature(&self) -> &[Signature] {
        &self.signature
    }

    pub fn to_builder(&self) -> SignerBuilder {
        SignerBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            r#type: Some(self.r#type.clone()),
            party: Some(self.party.clone()),
            signature: Some(self.signature.clone()),
        }
    }
}

impl Node for Signer {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::list(&self.modifier_extension),
            2 => FieldValue::one(&self.r#type),
            3 => FieldValue::one(&self.party),
            4 => FieldValue::list(&self.signature),
            _ => FieldValue::Absent,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignerBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    r#type: Option<Coding>,
    party: Option<Reference>,
    signature: Option<Vec<Signature>>,
}

impl SignerBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.extension.extend(extensions);
        self
    }

    pub fn modifier_extension(mut self, extension: Extension) -> Self {
        self.modifier_extension.push(extension);
        self
    }

    pub fn modifier_extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.modifier_extension.extend(extensions);
        self
    }

    pub fn r#type(mut self, r#type: Coding) -> Self {
        self.r#type = Some(r#type);
        self
    }

    pub fn party(mut self, party: Reference) -> Self {
        self.party = Some(party);
        self
    }

    pub fn signature(mut self, signature: Signature) -> Self {
        self.signature.get_or_insert_with(Vec::new).push(signature);
        self
    }

    pub fn signatures(mut self, signatures: impl IntoIterator<Item = Signature>) -> Self {
        self.signature.get_or_insert_with(Vec::new).extend(signatures);
        self
    }

    pub fn build(&self) -> Result<Signer> {
        finish("Contract.Signer", self.validate())
    }

    fn validate(&self) -> Result<Signer> {
        let config = config::current();
        Ok(Signer {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            r#type: validation::require_present(self.r#type.clone(), "type")?,
            party: {
                let party = validation::require_present(self.party.clone(), "party")?;
                validation::check_reference_type(&config, &party, "party", SIGNER_PARTY_TARGETS)?;
                party
            },
            signature: validation::require_non_empty(self.signature.clone(), "signature")?,
        })
    }
}

impl_builder!(Signer, SignerBuilder);

/// Contract Term List: one clause of the contract, possibly grouping others
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    identifier: Option<Identifier>,
    issued: Option<DateTime>,
    applies: Option<Period>,
    topic: Option<ContractTopic>,
    r#type: Option<CodeableConcept>,
    text: Option<FhirString>,
    offer: Offer,
    group: Vec<Term>,
}

impl Term {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Contract.Term",
        kind: NodeKind::BackboneElement,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::MODIFIER_EXTENSION,
            FieldDescriptor::new("identifier", Cardinality::OptionalOne, "Identifier").summary(),
            FieldDescriptor::new("issued", Cardinality::OptionalOne, "dateTime").summary(),
            FieldDescriptor::new("applies", Cardinality::OptionalOne, "Period").summary(),
            FieldDescriptor::choice("topic", Cardinality::OptionalOne, ContractTopic::ALLOWED),
            FieldDescriptor::new("type", Cardinality::OptionalOne, "CodeableConcept"),
            FieldDescriptor::new("text", Cardinality::OptionalOne, "string").summary(),
            FieldDescriptor::new("offer", Cardinality::RequiredOne, "Contract.Term.Offer"),
            FieldDescriptor::new("group", Cardinality::OptionalMany, "Contract.Term"),
        ],
    };

    pub fn builder(offer: Offer) -> TermBuilder {
        TermBuilder {
            offer: Some(offer),
            ..TermBuilder::default()
        }
    }

    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    pub fn issued(&self) -> Option<&DateTime> {
        self.issued.as_ref()
    }

    pub fn applies(&self) -> Option<&Period> {
        self.applies.as_ref()
    }

    pub fn topic(&self) -> Option<&ContractTopic> {
        self.topic.as_ref()
    }

    pub fn r#type(&self) -> Option<&CodeableConcept> {
        self.r#type.as_ref()
    }

    /// Term statement
    pub fn text(&self) -> Option<&FhirString> {
        self.text.as_ref()
    }

    /// Context of the Contract term
    pub fn offer(&self) -> &Offer {
        &self.offer
    }

    /// Nested Contract Term Group
    pub fn group(&self) -> &[Term] {
        &self.group
    }

    pub fn to_builder(&self) -> TermBuilder {
        TermBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            identifier: self.identifier.clone(),
            issued: self.issued.clone(),
            applies: self.applies.clone(),
            topic: self.topic.clone().map(Choice::into_data),
            r#type: self.r#type.clone(),
            text: self.text.clone(),
            offer: Some(self.offer.clone()),
            group: self.group.clone(),
        }
    }
}

impl Node for Term {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::list(&self.modifier_extension),
            2 => FieldValue::optional(self.identifier.as_ref()),
            3 => FieldValue::optional(self.issued.as_ref()),
            4 => FieldValue::optional(self.applies.as_ref()),
            5 => FieldValue::choice(self.topic.as_ref()),
            6 => FieldValue::optional(self.r#type.as_ref()),
            7 => FieldValue::optional(self.text.as_ref()),
            8 => FieldValue::one(&self.offer),
            9 => FieldValue::list(&self.group),
            _ => FieldValue::Absent,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TermBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    identifier: Option<Identifier>,
    issued: Option<DateTime>,
    applies: Option<Period>,
    topic: Option<DataType>,
    r#type: Option<CodeableConcept>,
    text: Option<FhirString>,
    offer: Option<Offer>,
    group: Vec<Term>,
}

impl TermBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.extension.extend(extensions);
        self
    }

    pub fn modifier_extension(mut self, extension: Extension) -> Self {
        self.modifier_extension.push(extension);
        self
    }

    pub fn modifier_extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.modifier_extension.extend(extensions);
        self
    }

    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.identifier = Some(identifier);
        self
    }

    pub fn issued(mut self, issued: DateTime) -> Self {
        self.issued = Some(issued);
        self
    }

    pub fn applies(mut self, applies: Period) -> Self {
        self.applies = Some(applies);
        self
    }

    /// Stage `topic[x]`; `CodeableConcept` or `Reference`
    pub fn topic(mut self, topic: impl Into<DataType>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn r#type(mut self, r#type: CodeableConcept) -> Self {
        self.r#type = Some(r#type);
        self
    }

    pub fn text(mut self, text: FhirString) -> Self {
        self.text = Some(text);
        self
    }

    pub fn offer(mut self, offer: Offer) -> Self {
        self.offer = Some(offer);
        self
    }

    pub fn group(mut self, group: Term) -> Self {
        self.group.push(group);
        self
    }

    pub fn groups(mut self, groups: impl IntoIterator<Item = Term>) -> Self {
        self.group.extend(groups);
        self
    }

    pub fn build(&self) -> Result<Term> {
        finish("Contract.Term", self.validate())
    }

    fn validate(&self) -> Result<Term> {
        Ok(Term {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            identifier: self.identifier.clone(),
            issued: self.issued.clone(),
            applies: self.applies.clone(),
            topic: validation::require_choice_of(self.topic.clone(), "topic")?,
            r#type: self.r#type.clone(),
            text: self.text.clone(),
            offer: validation::require_present(self.offer.clone(), "offer")?,
            group: self.group.clone(),
        })
    }
}

impl_builder!(Term, TermBuilder);

/// Context of the Contract term
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    identifier: Vec<Identifier>,
    topic: Option<Reference>,
    r#type: Option<CodeableConcept>,
    text: Option<FhirString>,
    answer: Vec<Answer>,
    link_id: Vec<FhirString>,
}

impl Offer {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Contract.Term.Offer",
        kind: NodeKind::BackboneElement,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::MODIFIER_EXTENSION,
            FieldDescriptor::new("identifier", Cardinality::OptionalMany, "Identifier"),
            FieldDescriptor::new("topic", Cardinality::OptionalOne, "Reference"),
            FieldDescriptor::new("type", Cardinality::OptionalOne, "CodeableConcept"),
            FieldDescriptor::new("text", Cardinality::OptionalOne, "string"),
            FieldDescriptor::new("answer", Cardinality::OptionalMany, "Contract.Term.Offer.Answer"),
            FieldDescriptor::new("linkId", Cardinality::OptionalMany, "string"),
        ],
    };

    pub fn builder() -> OfferBuilder {
        OfferBuilder::default()
    }

    pub fn identifier(&self) -> &[Identifier] {
        &self.identifier
    }

    /// Negotiable offer asset
    pub fn topic(&self) -> Option<&Reference> {
        self.topic.as_ref()
    }

    pub fn r#type(&self) -> Option<&CodeableConcept> {
        self.r#type.as_ref()
    }

    /// Human readable offer text
    pub fn text(&self) -> Option<&FhirString> {
        self.text.as_ref()
    }

    /// Response to offer text
    pub fn answer(&self) -> &[Answer] {
        &self.answer
    }

    /// Pointer to text within the contract
    pub fn link_id(&self) -> &[FhirString] {
        &self.link_id
    }

    pub fn to_builder(&self) -> OfferBuilder {
        OfferBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            identifier: self.identifier.clone(),
            topic: self.topic.clone(),
            r#type: self.r#type.clone(),
            text: self.text.clone(),
            answer: self.answer.clone(),
            link_id: self.link_id.clone(),
        }
    }
}

impl Node for Offer {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::list(&self.modifier_extension),
            2 => FieldValue::list(&self.identifier),
            3 => FieldValue::optional(self.topic.as_ref()),
            4 => FieldValue::optional(self.r#type.as_ref()),
            5 => FieldValue::optional(self.text.as_ref()),
            6 => FieldValue::list(&self.answer),
            7 => FieldValue::list(&self.link_id),
            _ => FieldValue::Absent,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct OfferBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    identifier: Vec<Identifier>,
    topic: Option<Reference>,
    r#type: Option<CodeableConcept>,
    text: Option<FhirString>,
    answer: Vec<Answer>,
    link_id: Vec<FhirString>,
}

impl OfferBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.extension.extend(extensions);
        self
    }

    pub fn modifier_extension(mut self, extension: Extension) -> Self {
        self.modifier_extension.push(extension);
        self
    }

    pub fn modifier_extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.modifier_extension.extend(extensions);
        self
    }

    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.identifier.push(identifier);
        self
    }

    pub fn identifiers(mut self, identifiers: impl IntoIterator<Item = Identifier>) -> Self {
        self.identifier.extend(identifiers);
        self
    }

    pub fn topic(mut self, topic: Reference) -> Self {
        self.topic = Some(topic);
        self
    }

    pub fn r#type(mut self, r#type: CodeableConcept) -> Self {
        self.r#type = Some(r#type);
        self
    }

    pub fn text(mut self, text: FhirString) -> Self {
        self.text = Some(text);
        self
    }

    pub fn answer(mut self, answer: Answer) -> Self {
        self.answer.push(answer);
        self
    }

    pub fn answers(mut self, answers: impl IntoIterator<Item = Answer>) -> Self {
        self.answer.extend(answers);
        self
    }

    pub fn link_id(mut self, link_id: FhirString) -> Self {
        self.link_id.push(link_id);
        self
    }

    pub fn link_ids(mut self, link_ids: impl IntoIterator<Item = FhirString>) -> Self {
        self.link_id.extend(link_ids);
        self
    }

    pub fn build(&self) -> Result<Offer> {
        finish("Contract.Term.Offer", self.validate())
    }

    fn validate(&self) -> Result<Offer> {
        let node = Offer {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            identifier: self.identifier.clone(),
            topic: self.topic.clone(),
            r#type: self.r#type.clone(),
            text: self.text.clone(),
            answer: self.answer.clone(),
            link_id: self.link_id.clone(),
        };
        validation::require_value_or_children(&config::current(), &node)?;
        Ok(node)
    }
}

impl_builder!(Offer, OfferBuilder);

/// Response to an offer
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    value: AnswerValue,
}

impl Answer {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Contract.Term.Offer.Answer",
        kind: NodeKind::BackboneElement,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::MODIFIER_EXTENSION,
            FieldDescriptor::choice("value", Cardinality::RequiredOne, AnswerValue::ALLOWED),
        ],
    };

    pub fn builder(value: impl Into<DataType>) -> AnswerBuilder {
        AnswerBuilder {
            value: Some(value.into()),
            ..AnswerBuilder::default()
        }
    }

    pub fn value(&self) -> &AnswerValue {
        &self.value
    }

    pub fn to_builder(&self) -> AnswerBuilder {
        AnswerBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            value: Some(self.value.clone().into_data()),
        }
    }
}

impl Node for Answer {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::list(&self.modifier_extension),
            2 => FieldValue::Single(self.value.as_node()),
            _ => FieldValue::Absent,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnswerBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    value: Option<DataType>,
}

impl AnswerBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.extension.extend(extensions);
        self
    }

    pub fn modifier_extension(mut self, extension: Extension) -> Self {
        self.modifier_extension.push(extension);
        self
    }

    pub fn modifier_extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.modifier_extension.extend(extensions);
        self
    }

    pub fn value(mut self, value: impl Into<DataType>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(&self) -> Result<Answer> {
        finish("Contract.Term.Offer.Answer", self.validate())
    }

    fn validate(&self) -> Result<Answer> {
        Ok(Answer {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            value: validation::require_choice(self.value.clone(), "value")?,
        })
    }
}

impl_builder!(Answer, AnswerBuilder);

/// Contract Friendly Language: a patient-friendly rendering of the contract
#[derive(Debug, Clone, PartialEq)]
pub struct Friendly {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    content: ContractContent,
}

impl Friendly {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Contract.Friendly",
        kind: NodeKind::BackboneElement,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::MODIFIER_EXTENSION,
            FieldDescriptor::choice("content", Cardinality::RequiredOne, ContractContent::ALLOWED),
        ],
    };

    pub fn builder(content: impl Into<DataType>) -> FriendlyBuilder {
        FriendlyBuilder {
            content: Some(content.into()),
            ..FriendlyBuilder::default()
        }
    }

    pub fn content(&self) -> &ContractContent {
        &self.content
    }

    pub fn to_builder(&self) -> FriendlyBuilder {
        FriendlyBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            content: Some(self.content.clone().into_data()),
        }
    }
}

impl Node for Friendly {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::list(&self.modifier_extension),
            2 => FieldValue::Single(self.content.as_node()),
            _ => FieldValue::Absent,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct FriendlyBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    content: Option<DataType>,
}

impl FriendlyBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.extension.extend(extensions);
        self
    }

    pub fn modifier_extension(mut self, extension: Extension) -> Self {
        self.modifier_extension.push(extension);
        self
    }

    pub fn modifier_extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.modifier_extension.extend(extensions);
        self
    }

    pub fn content(mut self, content: impl Into<DataType>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn build(&self) -> Result<Friendly> {
        finish("Contract.Friendly", self.validate())
    }

    fn validate(&self) -> Result<Friendly> {
        let config = config::current();
        Ok(Friendly {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            content: {
                let content = validation::require_choice::<ContractContent>(self.content.clone(), "content")?;
                validation::check_choice_reference_type(&config, Some(&content), "content", CONTENT_TARGETS)?;
                content
            },
        })
    }
}

impl_builder!(Friendly, FriendlyBuilder);

/// Contract Legal Language: the legally binding text of the contract
#[derive(Debug, Clone, PartialEq)]
pub struct Legal {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    content: ContractContent,
}

impl Legal {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Contract.Legal",
        kind: NodeKind::BackboneElement,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::MODIFIER_EXTENSION,
            FieldDescriptor::choice("content", Cardinality::RequiredOne, ContractContent::ALLOWED),
        ],
    };

    pub fn builder(content: impl Into<DataType>) -> LegalBuilder {
        LegalBuilder {
            content: Some(content.into()),
            ..LegalBuilder::default()
        }
    }

    pub fn content(&self) -> &ContractContent {
        &self.content
    }

    pub fn to_builder(&self) -> LegalBuilder {
        LegalBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            content: Some(self.content.clone().into_data()),
        }
    }
}

impl Node for Legal {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::list(&self.modifier_extension),
            2 => FieldValue::Single(self.content.as_node()),
            _ => FieldValue::Absent,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct LegalBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    modifier_extension: Vec<Extension>,
    content: Option<DataType>,
}

impl LegalBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.extension.extend(extensions);
        self
    }

    pub fn modifier_extension(mut self, extension: Extension) -> Self {
        self.modifier_extension.push(extension);
        self
    }

    pub fn modifier_extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.modifier_extension.extend(extensions);
        self
    }

    pub fn content(mut self, content: impl Into<DataType>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn build(&self) -> Result<Legal> {
        finish("Contract.Legal", self.validate())
    }

    fn validate(&self) -> Result<Legal> {
        let config = config::current();
        Ok(Legal {
            id: self.id.clone(),
            extension: self.extension.clone(),
            modifier_extension: self.modifier_extension.clone(),
            content: {
                let content = validation::require_choice::<ContractContent>(self.content.clone(), "content")?;
                validation::check_choice_reference_type(&config, Some(&content), "content", CONTENT_TARGETS)?;
                content
            },
        })
    }
}

impl_builder!(Legal, LegalBuilder);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn text(value: &str) -> FhirString {
        FhirString::of(value).unwrap()
    }

    fn reference(value: &str) -> Reference {
        Reference::builder().reference(text(value)).build().unwrap()
    }

    fn concept(value: &str) -> CodeableConcept {
        CodeableConcept::builder().text(text(value)).build().unwrap()
    }

    fn offer(value: &str) -> Offer {
        Offer::builder().text(text(value)).build().unwrap()
    }

    fn signature() -> Signature {
        let when = DateTime::of(chrono::DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z").unwrap())
            .unwrap();
        let role = Coding::builder()
            .code(Code::of("1.2.840.10065.1.12.1.7").unwrap())
            .build()
            .unwrap();
        Signature::builder([role], when, reference("Patient/1")).build().unwrap()
    }

    fn role() -> Coding {
        Coding::builder().code(Code::of("PAT").unwrap()).build().unwrap()
    }

    #[test]
    fn test_signer_without_signature() {
        let err = Signer::builder(role(), reference("Patient/1"), Vec::new())
            .build()
            .unwrap_err();
        assert_eq!(err, Error::EmptyRequiredCollection("signature"));

        let err = SignerBuilder::default()
            .r#type(role())
            .party(reference("Patient/1"))
            .build()
            .unwrap_err();
        assert_eq!(err, Error::MissingRequiredField("signature"));
    }

    #[test]
    fn test_signer_signatures_append() {
        let signer = Signer::builder(role(), reference("Patient/1"), [signature()])
            .signature(signature())
            .signatures([signature(), signature()])
            .build()
            .unwrap();
        assert_eq!(signer.signature().len(), 4);
    }

    #[test]
    fn test_signer_party_reference_type() {
        let err = Signer::builder(role(), reference("Device/1"), [signature()])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidReferenceType { field: "party", .. }));
    }

    #[test]
    fn test_legally_binding_rejects_codeable_concept() {
        let err = Contract::builder()
            .legally_binding(concept("binding"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidChoiceType {
                field: "legallyBinding",
                actual: "CodeableConcept",
                allowed: &["Attachment", "Reference"],
            }
        );
    }

    #[test]
    fn test_legally_binding_accepts_declared_alternatives() {
        let attachment = Attachment::builder().title(text("signed.pdf")).build().unwrap();
        let contract = Contract::builder().legally_binding(attachment).build().unwrap();
        assert!(matches!(contract.legally_binding(), Some(LegallyBinding::Attachment(_))));

        let contract = Contract::builder()
            .legally_binding(reference("Composition/c1"))
            .build()
            .unwrap();
        assert_eq!(contract.legally_binding().unwrap().type_name(), "Reference");
    }

    #[test]
    fn test_first_violation_in_declared_order() {
        // topic is declared before legallyBinding
        let err = Contract::builder()
            .legally_binding(concept("a"))
            .topic(text("b"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidChoiceType { field: "topic", .. }));
    }

    #[test]
    fn test_failed_build_leaves_builder_usable() {
        let builder = Contract::builder().topic(text("wrong"));
        assert!(builder.build().is_err());
        let contract = builder.topic(concept("right")).build().unwrap();
        assert!(matches!(contract.topic(), Some(ContractTopic::CodeableConcept(_))));
    }

    #[test]
    fn test_answer_value_choice() {
        let answer = Answer::builder(Boolean::of(true).unwrap()).build().unwrap();
        assert_eq!(answer.value().type_name(), "boolean");
        let err = Answer::builder(concept("no")).build().unwrap_err();
        assert!(matches!(err, Error::InvalidChoiceType { field: "value", .. }));
        let err = AnswerBuilder::default().build().unwrap_err();
        assert_eq!(err, Error::MissingRequiredField("value"));
    }

    #[test]
    fn test_legal_and_friendly_content() {
        let legal = Legal::builder(reference("DocumentReference/d1")).build().unwrap();
        assert!(matches!(legal.content(), ContractContent::Reference(_)));
        let err = Friendly::builder(reference("Patient/1")).build().unwrap_err();
        assert!(matches!(err, Error::InvalidReferenceType { field: "content", .. }));
    }

    #[test]
    fn test_recursive_term_round_trip() {
        let leaf = Term::builder(offer("leaf")).build().unwrap();
        let inner = Term::builder(offer("inner")).group(leaf.clone()).build().unwrap();
        let outer = Term::builder(offer("outer"))
            .topic(reference("Basic/1"))
            .groups([inner, leaf])
            .build()
            .unwrap();
        assert_eq!(outer.group().len(), 2);
        assert_eq!(outer.group()[0].group().len(), 1);
        assert_eq!(outer.to_builder().build().unwrap(), outer);
    }

    #[test]
    fn test_empty_offer_fails_ele_1() {
        let err = Offer::builder().build().unwrap_err();
        assert_eq!(err, Error::ValueOrChildrenRequired("Contract.Term.Offer"));
    }

    #[test]
    fn test_contract_round_trip_with_choices() {
        let contract = Contract::builder()
            .id("c1")
            .status(Code::of("executed").unwrap())
            .topic(concept("lease"))
            .term(Term::builder(offer("pay rent")).build().unwrap())
            .signer(Signer::builder(role(), reference("Patient/1"), [signature()]).build().unwrap())
            .legal(Legal::builder(reference("Composition/1")).build().unwrap())
            .legally_binding(reference("Contract/c0"))
            .build()
            .unwrap();
        let rebuilt = contract.to_builder().build().unwrap();
        assert_eq!(rebuilt, contract);
        assert_eq!(ContractBuilder::from(&contract).build().unwrap(), contract);
    }
}
