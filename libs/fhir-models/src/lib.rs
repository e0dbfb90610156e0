//! FHIR node model
//!
//! This crate provides the framework every schema-defined FHIR type is built
//! on, plus a slice of the catalog (primitives, common data types, `Basic` and
//! `Contract`) in the shape a generator emits.
//!
//! # Module Organization
//!
//! - `node`: the [`Node`] / [`Resource`] traits and static type descriptors
//! - `choice`: per-field sum types for `[x]` elements
//! - `builder` / `validation`: staged construction and the rules `build()` runs
//! - `visitor`: the generic traversal and stock visitors
//! - `support`: lookups over the descriptor tables
//! - `types`, `resource`: the schema types themselves
//!
//! # Example
//!
//! ```rust
//! use ferrum_models::resource::{Contract, ContractTopic, Offer, Term};
//! use ferrum_models::types::{CodeableConcept, FhirString};
//! use ferrum_models::visitor::CollectingVisitor;
//! use ferrum_models::NodeExt;
//!
//! let offer = Offer::builder()
//!     .text(FhirString::of("Monthly rent is due on the first day").unwrap())
//!     .build()
//!     .unwrap();
//! let lease = CodeableConcept::builder()
//!     .text(FhirString::of("lease").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let contract = Contract::builder()
//!     .topic(lease)
//!     .term(Term::builder(offer).build().unwrap())
//!     .build()
//!     .unwrap();
//! assert!(matches!(contract.topic(), Some(ContractTopic::CodeableConcept(_))));
//!
//! let mut terms = CollectingVisitor::<Term>::new();
//! contract.accept("Contract", &mut terms);
//! assert_eq!(terms.result().len(), 1);
//! ```

pub mod builder;
pub mod choice;
pub mod config;
pub mod error;
pub mod node;
pub mod resource;
pub mod support;
pub mod types;
pub mod validation;
pub mod visitor;

pub use builder::{Builder, ToBuilder};
pub use choice::Choice;
pub use config::ModelConfig;
pub use error::{Error, Result};
pub use node::{
    Cardinality, FieldDescriptor, FieldValue, Node, NodeExt, NodeKind, PrimitiveValue,
    Resource, TypeConstraint, TypeDescriptor,
};
pub use resource::AnyResource;
pub use types::DataType;
pub use visitor::{accept, Visitor};
