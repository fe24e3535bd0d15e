use gomockgen::model::{Interface, Method, Package, Parameter, Type};
use gomockgen::{generate, GeneratorOptions};

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_method(method: Method) -> String {
        let pkg = Package::new("fmt").with_interface(Interface::new("Printer").with_method(method));
        generate(&pkg, GeneratorOptions::default()).unwrap()
    }

    #[test]
    fn should_spread_lone_variadic_into_call() {
        let output = generate_method(
            Method::new("Print")
                .with_variadic(Parameter::new("args", Type::empty_interface()))
                .with_output(Parameter::anonymous(Type::predeclared("int"))),
        );
        assert!(output.contains(
            "func (m *MockPrinter) Print(args ...interface{}) int {\n\
             \tvarargs := []interface{}{}\n\
             \tfor _, a := range args {\n\
             \t\tvarargs = append(varargs, a)\n\
             \t}\n\
             \tret := m.ctrl.Call(m, \"Print\", varargs...)\n\
             \tret0, _ := ret[0].(int)\n\
             \treturn ret0\n\
             }\n"
        ));
        assert!(output.contains(
            "func (mr *MockPrinterMockRecorder) Print(args ...interface{}) *gomock.Call {\n\
             \treturn mr.mock.ctrl.RecordCallWithMethodType(mr.mock, \"Print\", reflect.TypeOf((*MockPrinter)(nil).Print), args...)\n\
             }\n"
        ));
    }

    #[test]
    fn should_combine_fixed_and_variadic_arguments() {
        let output = generate_method(
            Method::new("Printf")
                .with_input(Parameter::new("format", Type::predeclared("string")))
                .with_variadic(Parameter::new("args", Type::empty_interface()))
                .with_output(Parameter::anonymous(Type::predeclared("int")))
                .with_output(Parameter::anonymous(Type::predeclared("error"))),
        );
        assert!(output.contains(
            "func (m *MockPrinter) Printf(format string, args ...interface{}) (int, error) {\n\
             \tvarargs := []interface{}{format}\n\
             \tfor _, a := range args {\n\
             \t\tvarargs = append(varargs, a)\n\
             \t}\n\
             \tret := m.ctrl.Call(m, \"Printf\", varargs...)\n"
        ));
        assert!(output.contains(
            "func (mr *MockPrinterMockRecorder) Printf(format interface{}, args ...interface{}) *gomock.Call {\n\
             \tvarargs := append([]interface{}{format}, args...)\n\
             \treturn mr.mock.ctrl.RecordCallWithMethodType(mr.mock, \"Printf\", reflect.TypeOf((*MockPrinter)(nil).Printf), varargs...)\n\
             }\n"
        ));
    }

    #[test]
    fn should_name_anonymous_variadic_by_position() {
        let output = generate_method(
            Method::new("Join")
                .with_input(Parameter::anonymous(Type::predeclared("string")))
                .with_variadic(Parameter::anonymous(Type::predeclared("string"))),
        );
        assert!(output.contains("func (m *MockPrinter) Join(arg0 string, arg1 ...string) {"));
        assert!(output.contains("\tvarargs := []interface{}{arg0}\n"));
        assert!(output.contains("\tfor _, a := range arg1 {\n"));
        assert!(output.contains("\tm.ctrl.Call(m, \"Join\", varargs...)\n"));
        assert!(output.contains(
            "func (mr *MockPrinterMockRecorder) Join(arg0 interface{}, arg1 ...interface{}) *gomock.Call {"
        ));
        assert!(output.contains("\tvarargs := append([]interface{}{arg0}, arg1...)\n"));
    }

    #[test]
    fn should_rename_variadic_locals_that_collide_with_parameters() {
        let output = generate_method(
            Method::new("Log")
                .with_input(Parameter::new("varargs", Type::predeclared("int")))
                .with_variadic(Parameter::new("a", Type::predeclared("string"))),
        );
        assert!(output.contains(
            "func (m *MockPrinter) Log(varargs int, a ...string) {\n\
             \tvarargs_2 := []interface{}{varargs}\n\
             \tfor _, a_2 := range a {\n\
             \t\tvarargs_2 = append(varargs_2, a_2)\n\
             \t}\n\
             \tm.ctrl.Call(m, \"Log\", varargs_2...)\n\
             }\n"
        ));
        assert!(output.contains(
            "\tvarargs_2 := append([]interface{}{varargs}, a...)\n\
             \treturn mr.mock.ctrl.RecordCallWithMethodType(mr.mock, \"Log\", reflect.TypeOf((*MockPrinter)(nil).Log), varargs_2...)\n"
        ));
    }

    #[test]
    fn should_qualify_variadic_element_types() {
        let pkg = Package::new("p").with_interface(
            Interface::new("Sink").with_method(
                Method::new("Write").with_variadic(Parameter::new(
                    "readers",
                    Type::pointer(Type::named("io", "Reader")),
                )),
            ),
        );
        let output = generate(&pkg, GeneratorOptions::default()).unwrap();
        assert!(output.contains("\tio \"io\"\n"));
        assert!(output.contains("func (m *MockSink) Write(readers ...*io.Reader) {"));
    }
}
