//! Measured amounts: `Quantity` and `Money`

use super::{Code, Decimal, Extension, FhirString, Uri};
use crate::builder::{finish, impl_builder};
use crate::config;
use crate::error::Result;
use crate::node::{Cardinality, FieldDescriptor, FieldValue, Node, NodeKind, TypeDescriptor};
use crate::validation;
use std::any::Any;

/// A measured amount (or an amount that can potentially be measured)
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    id: Option<String>,
    extension: Vec<Extension>,
    value: Option<Decimal>,
    unit: Option<FhirString>,
    system: Option<Uri>,
    code: Option<Code>,
}

impl Quantity {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Quantity",
        kind: NodeKind::Element,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::new("value", Cardinality::OptionalOne, "decimal").summary(),
            FieldDescriptor::new("unit", Cardinality::OptionalOne, "string").summary(),
            FieldDescriptor::new("system", Cardinality::OptionalOne, "uri").summary(),
            FieldDescriptor::new("code", Cardinality::OptionalOne, "code").summary(),
        ],
    };

    pub fn builder() -> QuantityBuilder {
        QuantityBuilder::default()
    }

    pub fn value(&self) -> Option<&Decimal> {
        self.value.as_ref()
    }

    /// Unit representation
    pub fn unit(&self) -> Option<&FhirString> {
        self.unit.as_ref()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    /// Coded form of the unit
    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }

    pub fn to_builder(&self) -> QuantityBuilder {
        QuantityBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value.clone(),
            unit: self.unit.clone(),
            system: self.system.clone(),
            code: self.code.clone(),
        }
    }
}

impl Node for Quantity {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::optional(self.value.as_ref()),
            2 => FieldValue::optional(self.unit.as_ref()),
            3 => FieldValue::optional(self.system.as_ref()),
            4 => FieldValue::optional(self.code.as_ref()),
            _ => FieldValue::Absent,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuantityBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    value: Option<Decimal>,
    unit: Option<FhirString>,
    system: Option<Uri>,
    code: Option<Code>,
}

impl QuantityBuilder {
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

    pub fn value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    pub fn unit(mut self, unit: FhirString) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn system(mut self, system: Uri) -> Self {
        self.system = Some(system);
        self
    }

    pub fn code(mut self, code: Code) -> Self {
        self.code = Some(code);
        self
    }

    pub fn build(&self) -> Result<Quantity> {
        finish("Quantity", self.validate())
    }

    fn validate(&self) -> Result<Quantity> {
        let node = Quantity {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value.clone(),
            unit: self.unit.clone(),
            system: self.system.clone(),
            code: self.code.clone(),
        };
        validation::require_value_or_children(&config::current(), &node)?;
        Ok(node)
    }
}

impl_builder!(Quantity, QuantityBuilder);

/// An amount of economic utility in some recognized currency
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    id: Option<String>,
    extension: Vec<Extension>,
    value: Option<Decimal>,
    currency: Option<Code>,
}

impl Money {
    pub const DESCRIPTOR: &'static TypeDescriptor = &TypeDescriptor {
        name: "Money",
        kind: NodeKind::Element,
        fields: &[
            FieldDescriptor::EXTENSION,
            FieldDescriptor::new("value", Cardinality::OptionalOne, "decimal").summary(),
            FieldDescriptor::new("currency", Cardinality::OptionalOne, "code").summary(),
        ],
    };

    pub fn builder() -> MoneyBuilder {
        MoneyBuilder::default()
    }

    pub fn value(&self) -> Option<&Decimal> {
        self.value.as_ref()
    }

    /// ISO 4217 currency code
    pub fn currency(&self) -> Option<&Code> {
        self.currency.as_ref()
    }

    pub fn to_builder(&self) -> MoneyBuilder {
        MoneyBuilder {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value.clone(),
            currency: self.currency.clone(),
        }
    }
}

impl Node for Money {
    fn descriptor(&self) -> &'static TypeDescriptor {
        Self::DESCRIPTOR
    }

    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::list(&self.extension),
            1 => FieldValue::optional(self.value.as_ref()),
            2 => FieldValue::optional(self.currency.as_ref()),
            _ => FieldValue::Absent,
        }
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.extension
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoneyBuilder {
    id: Option<String>,
    extension: Vec<Extension>,
    value: Option<Decimal>,
    currency: Option<Code>,
}

impl MoneyBuilder {
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

    pub fn value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    pub fn currency(mut self, currency: Code) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn build(&self) -> Result<Money> {
        finish("Money", self.validate())
    }

    fn validate(&self) -> Result<Money> {
        let node = Money {
            id: self.id.clone(),
            extension: self.extension.clone(),
            value: self.value.clone(),
            currency: self.currency.clone(),
        };
        validation::require_value_or_children(&config::current(), &node)?;
        Ok(node)
    }
}

impl_builder!(Money, MoneyBuilder);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_round_trip() {
        let money = Money::builder()
            .value(Decimal::of(rust_decimal::Decimal::new(1999, 2)).unwrap())
            .currency(Code::of("EUR").unwrap())
            .build()
            .unwrap();
        assert_eq!(money.to_builder().build().unwrap(), money);
        assert_eq!(
            money.value().and_then(|v| v.value()).copied(),
            Some(rust_decimal::Decimal::new(1999, 2))
        );
    }

    #[test]
    fn test_quantity_setters_overwrite() {
        let quantity = Quantity::builder()
            .unit(FhirString::of("mg").unwrap())
            .unit(FhirString::of("g").unwrap())
            .build()
            .unwrap();
        assert_eq!(quantity.unit().unwrap().value().unwrap(), "g");
    }
}
