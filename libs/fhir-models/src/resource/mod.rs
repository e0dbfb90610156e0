//! Resources: top-level records
//!
//! Every resource starts with the same base fields (`meta`, `implicitRules`,
//! `language`, `contained`, `extension`, `modifierExtension`) ahead of its own.
//! [`AnyResource`] is the closed sum used wherever a field may hold a resource
//! of any kind, such as `contained`.

mod basic;
mod contract;

pub use basic::{Basic, BasicBuilder};
pub use contract::{
    Answer, AnswerBuilder, AnswerValue, Contract, ContractBuilder, ContractContent, ContractTopic,
    Friendly, FriendlyBuilder, Legal, LegalBuilder, LegallyBinding, Offer, OfferBuilder, Signer,
    SignerBuilder, Term, TermBuilder,
};

use crate::error::{Error, Result};
use crate::node::{FieldValue, Node, Resource, TypeDescriptor};
use crate::types::{Extension, Meta};
use crate::validation;
use std::any::Any;

/// A resource of any kind known to this crate
#[derive(Debug, Clone, PartialEq)]
pub enum AnyResource {
    Basic(Box<Basic>),
    Contract(Box<Contract>),
}

impl AnyResource {
    fn inner(&self) -> &dyn Resource {
        match self {
            AnyResource::Basic(r) => r.as_ref(),
            AnyResource::Contract(r) => r.as_ref(),
        }
    }
}

impl From<Basic> for AnyResource {
    fn from(resource: Basic) -> Self {
        AnyResource::Basic(Box::new(resource))
    }
}

impl From<Contract> for AnyResource {
    fn from(resource: Contract) -> Self {
        AnyResource::Contract(Box::new(resource))
    }
}

impl Node for AnyResource {
    fn descriptor(&self) -> &'static TypeDescriptor {
        self.inner().descriptor()
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        self.inner().field(index)
    }

    fn id(&self) -> Option<&str> {
        self.inner().id()
    }

    fn extension(&self) -> &[Extension] {
        self.inner().extension()
    }

    fn modifier_extension(&self) -> &[Extension] {
        self.inner().modifier_extension()
    }

    // The wrapped resource, so callers can downcast straight to `Contract`
    fn as_any(&self) -> &dyn Any {
        self.inner().as_any()
    }
}

impl Resource for AnyResource {
    fn meta(&self) -> Option<&Meta> {
        self.inner().meta()
    }

    fn contained(&self) -> &[AnyResource] {
        self.inner().contained()
    }
}

/// Descriptor of a resource type by name
pub fn resource_descriptor(name: &str) -> Option<&'static TypeDescriptor> {
    [Basic::DESCRIPTOR, Contract::DESCRIPTOR]
        .into_iter()
        .find(|descriptor| descriptor.name == name)
}

/// Checks shared by every resource builder: the logical id and `dom-2`
/// (contained resources shall not themselves contain resources).
pub(crate) fn check_resource_base(id: Option<&str>, contained: &[AnyResource]) -> Result<()> {
    if let Some(id) = id {
        validation::check_id(id)?;
    }
    if contained.iter().any(|r| !r.contained().is_empty()) {
        return Err(Error::Prohibited("contained.contained"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CodeableConcept, FhirString, Id};

    fn basic(id: &str) -> Basic {
        let code = CodeableConcept::builder()
            .text(FhirString::of("note").unwrap())
            .build()
            .unwrap();
        Basic::builder(code).id(id).build().unwrap()
    }

    #[test]
    fn test_any_resource_delegates() {
        let any = AnyResource::from(basic("b1"));
        assert_eq!(any.resource_type(), "Basic");
        assert_eq!(any.id(), Some("b1"));
        assert!((&any as &dyn Node).downcast_ref::<Basic>().is_some());
    }

    #[test]
    fn test_version_id_reads_meta() {
        let meta = Meta::builder().version_id(Id::of("3").unwrap()).build().unwrap();
        let code = CodeableConcept::builder()
            .text(FhirString::of("note").unwrap())
            .build()
            .unwrap();
        let resource = Basic::builder(code).meta(meta).build().unwrap();
        assert_eq!(resource.version_id(), Some("3"));
        assert_eq!(basic("b2").version_id(), None);
    }

    #[test]
    fn test_nested_contained_is_prohibited() {
        let inner = basic("inner");
        let middle = basic("middle").to_builder().contained(inner).build().unwrap();
        let code = CodeableConcept::builder()
            .text(FhirString::of("outer").unwrap())
            .build()
            .unwrap();
        let err = Basic::builder(code).contained(middle).build().unwrap_err();
        assert_eq!(err, Error::Prohibited("contained.contained"));
    }

    #[test]
    fn test_resource_id_must_be_valid() {
        let code = CodeableConcept::builder()
            .text(FhirString::of("x").unwrap())
            .build()
            .unwrap();
        let err = Basic::builder(code).id("not valid!").build().unwrap_err();
        assert!(matches!(err, Error::InvalidValue { type_name: "id", .. }));
    }

    #[test]
    fn test_resource_descriptor_lookup() {
        assert_eq!(resource_descriptor("Contract").unwrap().name, "Contract");
        assert!(resource_descriptor("Patient").is_none());
    }
}
