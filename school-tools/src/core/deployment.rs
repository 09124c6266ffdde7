// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

//! Declarative deployment modules.
//!
//! A module records which contracts to instantiate and in what order.
//! Declaration has no side effects: constructor arguments are not checked
//! against any contract, and no transaction is sent. An external engine
//! executes the finalized module and assigns on-chain identities.

use std::collections::BTreeMap;

use serde::Serialize;

/// Request to create one contract instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractInstantiation {
    pub contract_name: String,
    pub constructor_args: Vec<String>,
}

/// Reference to a contract instance that will exist once the module is
/// executed. No on-chain address is modeled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractHandle {
    pub module: String,
    pub contract_id: String,
}

/// Finalized, immutable deployment descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentModule {
    name: String,
    contracts: Vec<ContractInstantiation>,
    handles: BTreeMap<String, ContractHandle>,
}

impl DeploymentModule {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instantiation requests in declaration order.
    pub fn contracts(&self) -> &[ContractInstantiation] {
        &self.contracts
    }

    /// Instance handles by logical id.
    pub fn handles(&self) -> &BTreeMap<String, ContractHandle> {
        &self.handles
    }

    pub fn handle(&self, contract_id: &str) -> Option<&ContractHandle> {
        self.handles.get(contract_id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("contract id {id} is declared twice in module {module}")]
    DuplicateContract { module: String, id: String },
}

/// Accumulates instantiation requests and finalizes them into a
/// [`DeploymentModule`].
#[derive(Debug)]
pub struct ModuleBuilder {
    name: String,
    contracts: Vec<ContractInstantiation>,
    handles: BTreeMap<String, ContractHandle>,
}

impl ModuleBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contracts: Vec::new(),
            handles: BTreeMap::new(),
        }
    }

    /// Records an instantiation request under a logical id derived from the
    /// contract name (`SchoolManagement` becomes `schoolManagement`).
    pub fn add_contract_instance(
        &mut self,
        contract_name: impl Into<String>,
        constructor_args: Vec<String>,
    ) -> Result<ContractHandle, ModuleError> {
        let contract_name = contract_name.into();
        let contract_id = lower_camel(&contract_name);
        self.add_contract_instance_as(contract_id, contract_name, constructor_args)
    }

    /// Records an instantiation request under an explicit logical id.
    pub fn add_contract_instance_as(
        &mut self,
        contract_id: impl Into<String>,
        contract_name: impl Into<String>,
        constructor_args: Vec<String>,
    ) -> Result<ContractHandle, ModuleError> {
        let contract_id = contract_id.into();
        if self.handles.contains_key(&contract_id) {
            return Err(ModuleError::DuplicateContract {
                module: self.name.clone(),
                id: contract_id,
            });
        }
        let handle = ContractHandle {
            module: self.name.clone(),
            contract_id: contract_id.clone(),
        };
        self.contracts.push(ContractInstantiation {
            contract_name: contract_name.into(),
            constructor_args,
        });
        self.handles.insert(contract_id, handle.clone());
        Ok(handle)
    }

    /// Finalizes the descriptor. Nothing is executed here.
    pub fn build(self) -> DeploymentModule {
        DeploymentModule {
            name: self.name,
            contracts: self.contracts,
            handles: self.handles,
        }
    }
}

fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_records_contracts_in_declaration_order() {
        let mut builder = ModuleBuilder::new("TestModule");
        builder.add_contract_instance("Registry", Vec::new()).unwrap();
        builder
            .add_contract_instance("Gradebook", vec!["42".to_owned()])
            .unwrap();
        let module = builder.build();

        assert_eq!(module.name(), "TestModule");
        let names: Vec<_> = module
            .contracts()
            .iter()
            .map(|c| c.contract_name.as_str())
            .collect();
        assert_eq!(names, ["Registry", "Gradebook"]);
        assert_eq!(module.contracts()[1].constructor_args, ["42"]);
    }

    #[test]
    fn handles_reference_their_module() {
        let mut builder = ModuleBuilder::new("TestModule");
        let handle = builder.add_contract_instance("Registry", Vec::new()).unwrap();
        assert_eq!(handle.module, "TestModule");
        assert_eq!(handle.contract_id, "registry");

        let module = builder.build();
        assert_eq!(module.handle("registry"), Some(&handle));
        assert_eq!(module.handle("gradebook"), None);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut builder = ModuleBuilder::new("TestModule");
        builder.add_contract_instance("Registry", Vec::new()).unwrap();
        let err = builder
            .add_contract_instance("Registry", Vec::new())
            .unwrap_err();
        assert!(matches!(
            err,
            ModuleError::DuplicateContract { module, id }
                if module == "TestModule" && id == "registry"
        ));
    }

    #[test]
    fn explicit_ids_allow_repeated_contracts() {
        let mut builder = ModuleBuilder::new("TestModule");
        builder
            .add_contract_instance_as("primary", "Registry", Vec::new())
            .unwrap();
        builder
            .add_contract_instance_as("secondary", "Registry", Vec::new())
            .unwrap();
        let module = builder.build();
        assert_eq!(module.contracts().len(), 2);
        assert_eq!(module.handles().len(), 2);
    }

    #[test]
    fn declaration_is_idempotent() {
        let build = || {
            let mut builder = ModuleBuilder::new("TestModule");
            builder.add_contract_instance("Registry", Vec::new()).unwrap();
            builder.build()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn logical_ids_are_lower_camel() {
        assert_eq!(lower_camel("SchoolManagement"), "schoolManagement");
        assert_eq!(lower_camel("registry"), "registry");
        assert_eq!(lower_camel(""), "");
    }
}
