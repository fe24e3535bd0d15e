//! Mock Generator
//!
//! Emits a GoMock mock package for a model: per interface a mock struct, its
//! recorder, a constructor, the `EXPECT` accessor, and a mock/recorder method
//! pair for every interface method.

use crate::config::{GeneratorOptions, Source, REFLECT_IMPORT_PATH};
use crate::error::{MockgenError, Result, UnresolvedImport};
use crate::format::{IdentityFormatter, SourceFormatter};
use crate::identifier::IdentifierAllocator;
use crate::imports::{sanitize, AliasMap, GoKeywords, ReservedWords};
use crate::model::{Interface, Method, Package};
use crate::output::Emitter;
use crate::signature::{format_params, format_results};
use crate::types::TypeRenderer;
use crate::util::quote_go_string;
use tracing::debug;

pub struct Generator {
    options: GeneratorOptions,
    reserved: Box<dyn ReservedWords + Send + Sync>,
    emitter: Emitter,
    aliases: AliasMap,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Generator {
            options,
            reserved: Box::new(GoKeywords),
            emitter: Emitter::create_root(),
            aliases: AliasMap::default(),
        }
    }

    /// Replaces the Go keyword table consulted when choosing import aliases.
    pub fn with_reserved_words(mut self, reserved: impl ReservedWords + Send + Sync + 'static) -> Self {
        self.reserved = Box::new(reserved);
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Aliases resolved by the last call to [`Generator::generate`].
    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    /// Generates the whole mock file for `pkg`, replacing any earlier output.
    pub fn generate(&mut self, pkg: &Package) -> Result<()> {
        pkg.validate()?;
        self.options.validate()?;
        debug!(
            package = %pkg.name,
            interfaces = pkg.interfaces.len(),
            "generating mock package"
        );

        self.emitter = Emitter::create_root();

        let source = self.options.source.clone().unwrap_or_else(|| Source::Package {
            package: if pkg.path.is_empty() {
                pkg.name.clone()
            } else {
                pkg.path.clone()
            },
            interfaces: pkg.interfaces.iter().map(|i| i.name.clone()).collect(),
        });
        self.emitter.println("// Code generated by MockGen. DO NOT EDIT.");
        self.emitter.println(&source.header_line());
        self.emitter.blank_line();

        let mut paths = pkg.imports();
        paths.insert(self.options.mock_library_path.clone());
        // reflect is only used by mocked methods
        if pkg.has_methods() {
            paths.insert(REFLECT_IMPORT_PATH.to_string());
        }
        self.aliases = AliasMap::resolve(paths, &pkg.dot_imports, self.reserved.as_ref());

        let package_name = self
            .options
            .package_name
            .clone()
            .unwrap_or_else(|| format!("mock_{}", sanitize(&pkg.name)));

        let aliases = &self.aliases;
        let output_package_path = self.options.output_package_path.as_deref();
        let e = &mut self.emitter;
        e.println(&format!(
            "// Package {} is a generated GoMock package.",
            package_name
        ));
        e.println(&format!("package {}", package_name));
        e.blank_line();
        e.block("import (", ")", |e| {
            for (path, alias) in aliases.iter() {
                if Some(path) == output_package_path {
                    continue;
                }
                e.println(&format!("{} {}", alias, quote_go_string(path)));
            }
            for path in aliases.dot_imports() {
                e.println(&format!(". {}", quote_go_string(path)));
            }
        });

        for interface in &pkg.interfaces {
            self.generate_mock_interface(interface)?;
        }

        Ok(())
    }

    fn generate_mock_interface(&mut self, interface: &Interface) -> Result<()> {
        let mock_type = self.options.mock_name(&interface.name);
        debug!(
            interface = %interface.name,
            mock = %mock_type,
            methods = interface.methods.len(),
            "generating mock"
        );
        let gomock = self.qualifier(&self.options.mock_library_path);

        let e = &mut self.emitter;
        e.blank_line();
        e.println(&format!(
            "// {} is a mock of {} interface",
            mock_type, interface.name
        ));
        e.block(&format!("type {} struct {{", mock_type), "}", |e| {
            e.println(&format!("ctrl     *{}Controller", gomock));
            e.println(&format!("recorder *{}MockRecorder", mock_type));
        });
        e.blank_line();

        e.println(&format!(
            "// {}MockRecorder is the mock recorder for {}",
            mock_type, mock_type
        ));
        e.block(&format!("type {}MockRecorder struct {{", mock_type), "}", |e| {
            e.println(&format!("mock *{}", mock_type));
        });
        e.blank_line();

        e.println(&format!("// New{} creates a new mock instance", mock_type));
        e.block(
            &format!(
                "func New{}(ctrl *{}Controller) *{} {{",
                mock_type, gomock, mock_type
            ),
            "}",
            |e| {
                e.println(&format!("mock := &{}{{ctrl: ctrl}}", mock_type));
                e.println(&format!("mock.recorder = &{}MockRecorder{{mock}}", mock_type));
                e.println("return mock");
            },
        );
        e.blank_line();

        // An interface method named EXPECT collides with this accessor
        e.println("// EXPECT returns an object that allows the caller to indicate expected use");
        e.block(
            &format!(
                "func (m *{}) EXPECT() *{}MockRecorder {{",
                mock_type, mock_type
            ),
            "}",
            |e| e.println("return m.recorder"),
        );

        for method in &interface.methods {
            self.emitter.blank_line();
            self.generate_mock_method(&interface.name, &mock_type, method)?;
            self.emitter.blank_line();
            self.generate_mock_recorder_method(&mock_type, method);
        }

        Ok(())
    }

    fn generate_mock_method(&mut self, interface: &str, mock_type: &str, m: &Method) -> Result<()> {
        let renderer = TypeRenderer::new(&self.aliases, self.options.output_package_path.as_deref());
        let in_method = |err: UnresolvedImport| err.in_method(interface, &m.name);

        let arg_names = arg_names(m);
        let arg_types = arg_types(&renderer, m).map_err(in_method)?;
        let arg_string = format_params(&arg_names, &arg_types);

        let rets = m
            .outputs
            .iter()
            .map(|p| renderer.render(&p.ty))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(in_method)?;
        let ret_string = format_results(&rets);

        let mut ia = IdentifierAllocator::new(arg_names.iter().cloned());
        let id_recv = ia.allocate("m");

        let e = &mut self.emitter;
        e.println(&format!("// {} mocks base method", m.name));
        e.block(
            &format!(
                "func ({} *{}) {}({}){} {{",
                id_recv, mock_type, m.name, arg_string, ret_string
            ),
            "}",
            |e| {
                let call_args: String = if m.is_variadic() {
                    // The variadic argument may be any type, so its elements
                    // are copied into a []interface{} one by one.
                    let id_var_args = ia.allocate("varargs");
                    let id_v_arg = ia.allocate("a");
                    let (fixed, variadic) = arg_names.split_at(arg_names.len() - 1);
                    e.println(&format!(
                        "{} := []interface{{}}{{{}}}",
                        id_var_args,
                        fixed.join(", ")
                    ));
                    e.block(
                        &format!("for _, {} := range {} {{", id_v_arg, variadic[0]),
                        "}",
                        |e| {
                            e.println(&format!(
                                "{0} = append({0}, {1})",
                                id_var_args, id_v_arg
                            ))
                        },
                    );
                    format!(", {}...", id_var_args)
                } else {
                    arg_names.iter().map(|n| format!(", {}", n)).collect()
                };

                let call = format!(
                    "{0}.ctrl.Call({0}, {1}{2})",
                    id_recv,
                    quote_go_string(&m.name),
                    call_args
                );
                if rets.is_empty() {
                    e.println(&call);
                    return;
                }

                let id_ret = ia.allocate("ret");
                e.println(&format!("{} := {}", id_ret, call));

                // The two-value assertion yields the zero value of T when the
                // result is nil or of another type.
                let ret_names = rets
                    .iter()
                    .enumerate()
                    .map(|(i, t)| {
                        let name = ia.allocate(&format!("ret{}", i));
                        e.println(&format!("{}, _ := {}[{}].({})", name, id_ret, i, t));
                        name
                    })
                    .collect::<Vec<_>>();
                e.println(&format!("return {}", ret_names.join(", ")));
            },
        );

        Ok(())
    }

    fn generate_mock_recorder_method(&mut self, mock_type: &str, m: &Method) {
        let gomock = self.qualifier(&self.options.mock_library_path);
        let reflect = self.qualifier(REFLECT_IMPORT_PATH);

        let arg_names = arg_names(m);
        let (fixed, variadic) = if m.is_variadic() {
            let (fixed, rest) = arg_names.split_at(arg_names.len() - 1);
            (fixed, rest.first())
        } else {
            (&arg_names[..], None)
        };

        let mut arg_string = fixed.join(", ");
        if !arg_string.is_empty() {
            arg_string.push_str(" interface{}");
        }
        if let Some(variadic) = variadic {
            if !arg_string.is_empty() {
                arg_string.push_str(", ");
            }
            arg_string.push_str(&format!("{} ...interface{{}}", variadic));
        }

        let mut ia = IdentifierAllocator::new(arg_names.iter().cloned());
        let id_recv = ia.allocate("mr");

        let e = &mut self.emitter;
        e.println(&format!(
            "// {} indicates an expected call of {}",
            m.name, m.name
        ));
        e.block(
            &format!(
                "func ({} *{}MockRecorder) {}({}) *{}Call {{",
                id_recv, mock_type, m.name, arg_string, gomock
            ),
            "}",
            |e| {
                let call_args: String = match variadic {
                    None => fixed.iter().map(|n| format!(", {}", n)).collect(),
                    // Only the variadic slot: push it straight through
                    Some(variadic) if fixed.is_empty() => format!(", {}...", variadic),
                    Some(variadic) => {
                        let id_var_args = ia.allocate("varargs");
                        e.println(&format!(
                            "{} := append([]interface{{}}{{{}}}, {}...)",
                            id_var_args,
                            fixed.join(", "),
                            variadic
                        ));
                        format!(", {}...", id_var_args)
                    }
                };
                e.println(&format!(
                    "return {0}.mock.ctrl.RecordCallWithMethodType({0}.mock, {1}, {2}TypeOf((*{3})(nil).{4}){5})",
                    id_recv,
                    quote_go_string(&m.name),
                    reflect,
                    mock_type,
                    m.name,
                    call_args
                ));
            },
        );
    }

    /// `alias.` for a package used by the generated code itself, or nothing
    /// when the package is the output package or dot-imported.
    fn qualifier(&self, path: &str) -> String {
        if self.options.output_package_path.as_deref() == Some(path) {
            return String::new();
        }
        match self.aliases.get(path) {
            Some(alias) => format!("{}.", alias),
            None => String::new(),
        }
    }

    /// The generated text as emitted, before formatting.
    pub fn source(&self) -> String {
        self.emitter.to_source()
    }

    pub fn output(&self, formatter: &dyn SourceFormatter) -> Result<String> {
        let source = self.source();
        formatter
            .format(&source)
            .map_err(|err| MockgenError::Format {
                message: err.to_string(),
                source_text: source.clone(),
            })
    }
}

/// Generates the mock file for `pkg` without formatting it.
pub fn generate(pkg: &Package, options: GeneratorOptions) -> Result<String> {
    let mut generator = Generator::new(options);
    generator.generate(pkg)?;
    generator.output(&IdentityFormatter)
}

/// Parameter names of `m`, variadic last; anonymous parameters are named
/// `arg<position>`.
fn arg_names(m: &Method) -> Vec<String> {
    let mut names = m
        .inputs
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if p.name.is_empty() {
                format!("arg{}", i)
            } else {
                p.name.clone()
            }
        })
        .collect::<Vec<_>>();
    if let Some(variadic) = &m.variadic {
        names.push(if variadic.name.is_empty() {
            format!("arg{}", m.inputs.len())
        } else {
            variadic.name.clone()
        });
    }
    names
}

fn arg_types(
    renderer: &TypeRenderer<'_>,
    m: &Method,
) -> std::result::Result<Vec<String>, UnresolvedImport> {
    let mut types = m
        .inputs
        .iter()
        .map(|p| renderer.render(&p.ty))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    if let Some(variadic) = &m.variadic {
        types.push(format!("...{}", renderer.render(&variadic.ty)?));
    }
    Ok(types)
}
