//! Type Renderer
//!
//! Renders model types as Go type expressions, qualifying named types with
//! the alias resolved for their package.

use crate::error::UnresolvedImport;
use crate::imports::AliasMap;
use crate::model::{FuncType, Method, Parameter, Type};
use crate::util::quote_struct_tag;

pub type RenderResult = std::result::Result<String, UnresolvedImport>;

pub struct TypeRenderer<'a> {
    aliases: &'a AliasMap,
    output_package_path: Option<&'a str>,
}

impl<'a> TypeRenderer<'a> {
    /// Types of `output_package_path` are rendered unqualified.
    pub fn new(aliases: &'a AliasMap, output_package_path: Option<&'a str>) -> Self {
        TypeRenderer {
            aliases,
            output_package_path,
        }
    }

    pub fn render(&self, ty: &Type) -> RenderResult {
        match ty {
            Type::Predeclared { name } => Ok(name.clone()),
            Type::Named { package, name } => self.render_named(package, name),
            Type::Pointer { elem } => Ok(format!("*{}", self.render(elem)?)),
            Type::Slice { elem } => Ok(format!("[]{}", self.render(elem)?)),
            Type::Array { len, elem } => Ok(format!("[{}]{}", len, self.render(elem)?)),
            Type::Map { key, value } => Ok(format!(
                "map[{}]{}",
                self.render(key)?,
                self.render(value)?
            )),
            Type::Chan { dir, elem } => {
                let elem_str = self.render(elem)?;
                if dir.is_recv_only() {
                    Ok(format!("<-chan {}", elem_str))
                } else if dir.is_send_only() {
                    Ok(format!("chan<- {}", elem_str))
                } else {
                    // `chan <-chan T` would parse as `chan<- (chan T)`
                    match elem.as_ref() {
                        Type::Chan { dir: inner, .. } if inner.is_recv_only() => {
                            Ok(format!("chan ({})", elem_str))
                        }
                        _ => Ok(format!("chan {}", elem_str)),
                    }
                }
            }
            Type::Func(func) => Ok(format!("func{}", self.render_func_signature(func)?)),
            Type::Interface { methods } => {
                if methods.is_empty() {
                    return Ok("interface{}".to_string());
                }
                let specs = methods
                    .iter()
                    .map(|m| self.render_method_spec(m))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("interface{{ {} }}", specs.join("; ")))
            }
            Type::Struct { fields } => {
                if fields.is_empty() {
                    return Ok("struct{}".to_string());
                }
                let mut parts = Vec::with_capacity(fields.len());
                for field in fields {
                    let mut part = self.render(&field.ty)?;
                    if !field.name.is_empty() {
                        part = format!("{} {}", field.name, part);
                    }
                    if let Some(tag) = &field.tag {
                        part = format!("{} {}", part, quote_struct_tag(tag));
                    }
                    parts.push(part);
                }
                Ok(format!("struct{{ {} }}", parts.join("; ")))
            }
        }
    }

    fn render_named(&self, package: &str, name: &str) -> RenderResult {
        if package.is_empty()
            || self.output_package_path == Some(package)
            || self.aliases.is_dot_import(package)
        {
            return Ok(name.to_string());
        }
        match self.aliases.get(package) {
            Some(alias) => Ok(format!("{}.{}", alias, name)),
            None => Err(UnresolvedImport(package.to_string())),
        }
    }

    /// `(A, ...B) R` for a function type; parameter names are not rendered.
    fn render_func_signature(&self, func: &FuncType) -> RenderResult {
        self.render_signature(&func.params, func.variadic.as_deref(), &func.results)
    }

    fn render_method_spec(&self, method: &Method) -> RenderResult {
        let signature =
            self.render_signature(&method.inputs, method.variadic.as_ref(), &method.outputs)?;
        Ok(format!("{}{}", method.name, signature))
    }

    fn render_signature(
        &self,
        params: &[Parameter],
        variadic: Option<&Parameter>,
        results: &[Parameter],
    ) -> RenderResult {
        let mut args = params
            .iter()
            .map(|p| self.render(&p.ty))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(variadic) = variadic {
            args.push(format!("...{}", self.render(&variadic.ty)?));
        }

        let rets = results
            .iter()
            .map(|p| self.render(&p.ty))
            .collect::<Result<Vec<_>, _>>()?;
        let ret_string = match rets.len() {
            0 => String::new(),
            1 => format!(" {}", rets[0]),
            _ => format!(" ({})", rets.join(", ")),
        };

        Ok(format!("({}){}", args.join(", "), ret_string))
    }
}

/// Renders `ty` against `aliases`, leaving types of `output_package_path`
/// unqualified.
pub fn render_type(ty: &Type, aliases: &AliasMap, output_package_path: Option<&str>) -> RenderResult {
    TypeRenderer::new(aliases, output_package_path).render(ty)
}
