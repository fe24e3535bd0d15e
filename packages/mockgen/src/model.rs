//! Model Module
//!
//! Resolved description of the Go interfaces to mock. The model is produced
//! by a loader outside this crate and is read-only during generation.
//!
//! Embedded interfaces must already be flattened into their embedder's
//! method list; recursive embedding is not supported.

use crate::error::{MockgenError, Result};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// A Go package and the interfaces in it that should be mocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub name: String,
    /// Import path of the package itself, empty when unknown.
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub interfaces: Vec<Interface>,
    #[serde(default)]
    pub dot_imports: Vec<String>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Package {
            name: name.into(),
            path: String::new(),
            interfaces: Vec::new(),
            dot_imports: Vec::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_interface(mut self, interface: Interface) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_dot_import(mut self, path: impl Into<String>) -> Self {
        self.dot_imports.push(path.into());
        self
    }

    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Import paths referenced by any type in the package, sorted.
    pub fn imports(&self) -> BTreeSet<String> {
        let mut imports = BTreeSet::new();
        for interface in &self.interfaces {
            interface.add_imports(&mut imports);
        }
        imports
    }

    pub fn has_methods(&self) -> bool {
        self.interfaces.iter().any(|i| !i.methods.is_empty())
    }

    pub fn validate(&self) -> Result<()> {
        let mut interface_names = HashSet::new();
        for interface in &self.interfaces {
            if !interface_names.insert(interface.name.as_str()) {
                return Err(MockgenError::InvalidModel(format!(
                    "duplicate interface {} in package {}",
                    interface.name, self.name
                )));
            }
            interface.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Interface {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    fn add_imports(&self, imports: &mut BTreeSet<String>) {
        for method in &self.methods {
            method.add_imports(imports);
        }
    }

    fn validate(&self) -> Result<()> {
        let mut method_names = HashSet::new();
        for method in &self.methods {
            if !method_names.insert(method.name.as_str()) {
                return Err(MockgenError::InvalidModel(format!(
                    "duplicate method {}.{}",
                    self.name, method.name
                )));
            }
        }
        Ok(())
    }
}

/// A method signature. The variadic parameter, when present, is the final
/// input and is not repeated in `inputs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default, rename = "in")]
    pub inputs: Vec<Parameter>,
    #[serde(default, rename = "out")]
    pub outputs: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variadic: Option<Parameter>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Method {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            variadic: None,
        }
    }

    pub fn with_input(mut self, param: Parameter) -> Self {
        self.inputs.push(param);
        self
    }

    pub fn with_output(mut self, param: Parameter) -> Self {
        self.outputs.push(param);
        self
    }

    pub fn with_variadic(mut self, param: Parameter) -> Self {
        self.variadic = Some(param);
        self
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic.is_some()
    }

    fn add_imports(&self, imports: &mut BTreeSet<String>) {
        for param in self.inputs.iter().chain(&self.outputs).chain(&self.variadic) {
            param.ty.add_imports(imports);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// May be empty; anonymous parameters are named by position when rendered.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Parameter {
            name: name.into(),
            ty,
        }
    }

    pub fn anonymous(ty: Type) -> Self {
        Parameter::new("", ty)
    }
}

bitflags! {
    /// Direction of a channel type. Both bits (or none) mean bidirectional.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ChanDir: u8 {
        const RECV = 1;
        const SEND = 2;
    }
}

impl Default for ChanDir {
    fn default() -> Self {
        ChanDir::all()
    }
}

impl ChanDir {
    pub fn is_recv_only(self) -> bool {
        self == ChanDir::RECV
    }

    pub fn is_send_only(self) -> bool {
        self == ChanDir::SEND
    }
}

/// A Go type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    /// `int`, `error`, `string`, ...
    Predeclared { name: String },
    /// A declared type; an empty package means the universe or local scope.
    Named {
        #[serde(default)]
        package: String,
        name: String,
    },
    Pointer { elem: Box<Type> },
    Slice { elem: Box<Type> },
    Array { len: u64, elem: Box<Type> },
    Map { key: Box<Type>, value: Box<Type> },
    Chan {
        #[serde(default)]
        dir: ChanDir,
        elem: Box<Type>,
    },
    Func(FuncType),
    Interface {
        #[serde(default)]
        methods: Vec<Method>,
    },
    Struct {
        #[serde(default)]
        fields: Vec<Field>,
    },
}

impl Type {
    pub fn predeclared(name: impl Into<String>) -> Self {
        Type::Predeclared { name: name.into() }
    }

    pub fn named(package: impl Into<String>, name: impl Into<String>) -> Self {
        Type::Named {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn pointer(elem: Type) -> Self {
        Type::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: Type) -> Self {
        Type::Slice {
            elem: Box::new(elem),
        }
    }

    pub fn array(len: u64, elem: Type) -> Self {
        Type::Array {
            len,
            elem: Box::new(elem),
        }
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(dir: ChanDir, elem: Type) -> Self {
        Type::Chan {
            dir,
            elem: Box::new(elem),
        }
    }

    pub fn empty_interface() -> Self {
        Type::Interface {
            methods: Vec::new(),
        }
    }

    fn add_imports(&self, imports: &mut BTreeSet<String>) {
        match self {
            Type::Predeclared { .. } => {}
            Type::Named { package, .. } => {
                if !package.is_empty() {
                    imports.insert(package.clone());
                }
            }
            Type::Pointer { elem }
            | Type::Slice { elem }
            | Type::Array { elem, .. }
            | Type::Chan { elem, .. } => elem.add_imports(imports),
            Type::Map { key, value } => {
                key.add_imports(imports);
                value.add_imports(imports);
            }
            Type::Func(func) => func.add_imports(imports),
            Type::Interface { methods } => {
                for method in methods {
                    method.add_imports(imports);
                }
            }
            Type::Struct { fields } => {
                for field in fields {
                    field.ty.add_imports(imports);
                }
            }
        }
    }
}

/// A function type, `func(in...) out`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncType {
    #[serde(default, rename = "in")]
    pub params: Vec<Parameter>,
    #[serde(default, rename = "out")]
    pub results: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variadic: Option<Box<Parameter>>,
}

impl FuncType {
    fn add_imports(&self, imports: &mut BTreeSet<String>) {
        for param in &self.params {
            param.ty.add_imports(imports);
        }
        for result in &self.results {
            result.ty.add_imports(imports);
        }
        if let Some(variadic) = &self.variadic {
            variadic.ty.add_imports(imports);
        }
    }
}

/// A struct field; an empty name marks an embedded field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}
