use gomockgen::error::UnresolvedImport;
use gomockgen::imports::{AliasMap, GoKeywords};
use gomockgen::model::{ChanDir, Field, FuncType, Method, Parameter, Type};
use gomockgen::types::{render_type, TypeRenderer};

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases() -> AliasMap {
        let dots = vec!["example.com/dsl".to_string()];
        AliasMap::resolve(
            [
                "io",
                "html/template",
                "text/template",
                "example.com/self",
                "example.com/dsl",
            ],
            &dots,
            &GoKeywords,
        )
    }

    fn render(ty: &Type) -> String {
        render_type(ty, &aliases(), Some("example.com/self")).unwrap()
    }

    #[test]
    fn should_render_predeclared_types() {
        assert_eq!(render(&Type::predeclared("int")), "int");
        assert_eq!(render(&Type::predeclared("error")), "error");
    }

    #[test]
    fn should_qualify_named_types_with_alias() {
        assert_eq!(render(&Type::named("io", "Reader")), "io.Reader");
        assert_eq!(
            render(&Type::named("text/template", "Template")),
            "template0.Template"
        );
    }

    #[test]
    fn should_leave_output_package_types_unqualified() {
        assert_eq!(render(&Type::named("example.com/self", "Thing")), "Thing");
    }

    #[test]
    fn should_leave_local_and_dot_imported_types_unqualified() {
        assert_eq!(render(&Type::named("", "local")), "local");
        assert_eq!(render(&Type::named("example.com/dsl", "Rule")), "Rule");
    }

    #[test]
    fn should_fail_on_unknown_package() {
        let err = render_type(
            &Type::pointer(Type::named("example.com/missing", "T")),
            &aliases(),
            None,
        )
        .unwrap_err();
        assert_eq!(err, UnresolvedImport("example.com/missing".to_string()));
    }

    #[test]
    fn should_render_composites() {
        assert_eq!(render(&Type::pointer(Type::named("io", "Reader"))), "*io.Reader");
        assert_eq!(render(&Type::slice(Type::predeclared("byte"))), "[]byte");
        assert_eq!(render(&Type::array(4, Type::predeclared("int"))), "[4]int");
        assert_eq!(
            render(&Type::map(
                Type::predeclared("string"),
                Type::slice(Type::pointer(Type::named("io", "Writer")))
            )),
            "map[string][]*io.Writer"
        );
    }

    #[test]
    fn should_render_channel_directions() {
        let int = Type::predeclared("int");
        assert_eq!(render(&Type::chan(ChanDir::all(), int.clone())), "chan int");
        assert_eq!(render(&Type::chan(ChanDir::empty(), int.clone())), "chan int");
        assert_eq!(render(&Type::chan(ChanDir::RECV, int.clone())), "<-chan int");
        assert_eq!(render(&Type::chan(ChanDir::SEND, int.clone())), "chan<- int");
        assert_eq!(
            render(&Type::chan(ChanDir::all(), Type::chan(ChanDir::RECV, int.clone()))),
            "chan (<-chan int)"
        );
        assert_eq!(
            render(&Type::chan(ChanDir::SEND, Type::chan(ChanDir::RECV, int))),
            "chan<- <-chan int"
        );
    }

    #[test]
    fn should_render_func_types() {
        let func = Type::Func(FuncType {
            params: vec![
                Parameter::new("ctx", Type::named("io", "Reader")),
                Parameter::anonymous(Type::predeclared("int")),
            ],
            results: vec![],
            variadic: None,
        });
        assert_eq!(render(&func), "func(io.Reader, int)");

        let func = Type::Func(FuncType {
            params: vec![],
            results: vec![Parameter::anonymous(Type::predeclared("error"))],
            variadic: Some(Box::new(Parameter::anonymous(Type::predeclared("string")))),
        });
        assert_eq!(render(&func), "func(...string) error");

        let func = Type::Func(FuncType {
            params: vec![],
            results: vec![
                Parameter::anonymous(Type::predeclared("int")),
                Parameter::anonymous(Type::predeclared("error")),
            ],
            variadic: None,
        });
        assert_eq!(render(&func), "func() (int, error)");
    }

    #[test]
    fn should_render_interface_types() {
        assert_eq!(render(&Type::empty_interface()), "interface{}");

        let iface = Type::Interface {
            methods: vec![
                Method::new("Close").with_output(Parameter::anonymous(Type::predeclared("error"))),
                Method::new("Reset"),
            ],
        };
        assert_eq!(render(&iface), "interface{ Close() error; Reset() }");
    }

    #[test]
    fn should_render_struct_types() {
        assert_eq!(render(&Type::Struct { fields: vec![] }), "struct{}");

        let st = Type::Struct {
            fields: vec![
                Field {
                    name: "ID".to_string(),
                    ty: Type::predeclared("int"),
                    tag: Some(r#"json:"id""#.to_string()),
                },
                Field {
                    name: String::new(),
                    ty: Type::named("io", "Reader"),
                    tag: None,
                },
            ],
        };
        assert_eq!(render(&st), r#"struct{ ID int `json:"id"`; io.Reader }"#);
    }

    #[test]
    fn should_render_without_output_package() {
        let aliases = aliases();
        let renderer = TypeRenderer::new(&aliases, None);
        assert_eq!(
            renderer.render(&Type::named("example.com/self", "Thing")).unwrap(),
            "self.Thing"
        );
    }
}
