//! Generator Configuration
//!
//! Options threaded through a generation pass.

use crate::error::{MockgenError, Result};
use crate::imports::{GoKeywords, ReservedWords};
use crate::util::is_legal_identifier;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_MOCK_LIBRARY_PATH: &str = "github.com/otokaze/mock/gomock";
pub const REFLECT_IMPORT_PATH: &str = "reflect";

fn default_mock_library_path() -> String {
    DEFAULT_MOCK_LIBRARY_PATH.to_string()
}

/// Provenance written into the generated file's header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Source {
    /// Mocks generated from a source file.
    File(String),
    /// Mocks generated from a package's listed interfaces.
    Package {
        package: String,
        interfaces: Vec<String>,
    },
}

impl Source {
    pub fn header_line(&self) -> String {
        match self {
            Source::File(file) => format!("// Source: {}", file),
            Source::Package {
                package,
                interfaces,
            } => format!(
                "// Source: {} (interfaces: {})",
                package,
                interfaces.join(",")
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Header provenance; derived from the package when absent.
    #[serde(default)]
    pub source: Option<Source>,
    /// Interface name to mock type name.
    #[serde(default)]
    pub mock_names: HashMap<String, String>,
    /// Output package clause; `mock_<package>` when absent.
    #[serde(default)]
    pub package_name: Option<String>,
    /// Import path of the output package. Its types are not qualified.
    #[serde(default)]
    pub output_package_path: Option<String>,
    #[serde(default = "default_mock_library_path")]
    pub mock_library_path: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            source: None,
            mock_names: HashMap::new(),
            package_name: None,
            output_package_path: None,
            mock_library_path: default_mock_library_path(),
        }
    }
}

impl GeneratorOptions {
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_mock_name(mut self, interface: impl Into<String>, mock: impl Into<String>) -> Self {
        self.mock_names.insert(interface.into(), mock.into());
        self
    }

    pub fn with_package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    pub fn with_output_package_path(mut self, path: impl Into<String>) -> Self {
        self.output_package_path = Some(path.into());
        self
    }

    pub fn with_mock_library_path(mut self, path: impl Into<String>) -> Self {
        self.mock_library_path = path.into();
        self
    }

    /// The mock type name for the interface `interface`.
    pub fn mock_name(&self, interface: &str) -> String {
        match self.mock_names.get(interface) {
            Some(name) => name.clone(),
            None => format!("Mock{}", interface),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut overrides: Vec<_> = self.mock_names.iter().collect();
        overrides.sort();
        for (interface, name) in overrides {
            if !is_legal_identifier(name) || GoKeywords.is_reserved(name) {
                return Err(MockgenError::InvalidMockName {
                    interface: interface.clone(),
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Parses `Iface=MockIface,Other=MockOther`.
pub fn parse_mock_names(names: &str) -> Result<HashMap<String, String>> {
    let mut mocks = HashMap::new();
    if names.trim().is_empty() {
        return Ok(mocks);
    }
    for kv in names.split(',') {
        match kv.split_once('=') {
            Some((interface, mock)) if !mock.is_empty() => {
                mocks.insert(interface.trim().to_string(), mock.trim().to_string());
            }
            _ => return Err(MockgenError::BadMockNamesSpec(kv.to_string())),
        }
    }
    Ok(mocks)
}
